use std::path::Path;

use super::plural;

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;

    println!("  All checks passed for '{}'.", world.name());
    println!(
        "  {}, {}, {}, {}",
        plural(world.area_count(), "area"),
        plural(world.item_count(), "item"),
        plural(world.container_count(), "container"),
        plural(world.door_count(), "door"),
    );
    println!("  Start: {}", world.start());

    Ok(())
}
