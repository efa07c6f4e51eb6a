use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use super::plural;

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Name", "Exits", "Blocked"]);

    for area in world.areas() {
        let travel = world.travelable(&area.key).map_err(|e| e.to_string())?;
        let exits = travel
            .exits
            .iter()
            .map(|(direction, target)| format!("{direction} → {target}"))
            .collect::<Vec<_>>()
            .join(", ");
        let blocked = travel
            .blocked
            .keys()
            .map(|direction| direction.name())
            .collect::<Vec<_>>()
            .join(", ");

        let exits = if exits.is_empty() { "—".to_string() } else { exits };
        let blocked = if blocked.is_empty() { "—".to_string() } else { blocked };
        table.add_row(vec![
            area.key.as_str(),
            area.name.as_str(),
            exits.as_str(),
            blocked.as_str(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {}", plural(world.area_count(), "area"));

    Ok(())
}
