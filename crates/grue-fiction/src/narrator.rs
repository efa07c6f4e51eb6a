//! Text rendering for areas, inventories, and reveals.

use grue_core::{Area, AreaText, ItemId, World};

use crate::parser::name_matches;

/// Lines shown on entering or looking at an area: its name, then its
/// description.
///
/// A light-dependent description shows its lit text only while some carried
/// item's name contains the light token.
pub fn describe_area(world: &World, area: &Area, inventory: &[ItemId]) -> Vec<String> {
    let mut lines = vec![area.name.clone()];
    let text = match &area.description {
        AreaText::Plain(text) => text,
        AreaText::Lit { light, lit, dark } => {
            if carries_light(world, inventory, light) {
                lit
            } else {
                dark
            }
        }
    };
    lines.extend(to_lines(text));
    lines
}

/// Whether any carried item's name contains the light token.
pub fn carries_light(world: &World, inventory: &[ItemId], light: &str) -> bool {
    inventory
        .iter()
        .any(|&id| name_matches(&world.item(id).name, light))
}

/// Lines listing the inventory.
pub fn list_inventory(world: &World, inventory: &[ItemId]) -> Vec<String> {
    if inventory.is_empty() {
        return vec!["You are empty-handed.".to_string()];
    }

    let mut lines = vec!["You are carrying:".to_string()];
    lines.extend(
        inventory
            .iter()
            .map(|&id| format!("  {}", world.item(id).name)),
    );
    lines
}

/// The line shown when a container is opened for the first time.
pub fn reveal(container: &str, items: &[&str]) -> String {
    if items.is_empty() {
        return format!("Opening the {container} reveals nothing.");
    }
    let listed: Vec<String> = items.iter().map(|name| with_article(name)).collect();
    format!("Opening the {container} reveals {}.", join_listed(&listed))
}

/// Split authored text into output lines.
pub fn to_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines().map(str::to_string)
}

fn with_article(name: &str) -> String {
    let article = match name.chars().next() {
        Some(c) if "aeiou".contains(c.to_ascii_lowercase()) => "an",
        _ => "a",
    };
    format!("{article} {name}")
}

// "a", "a, and b", "a, b, and c"
fn join_listed(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}
