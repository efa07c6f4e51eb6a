pub mod check;
pub mod export;
pub mod list;
pub mod play;

use std::path::Path;

use grue_core::{World, WorldBlueprint};

/// Load and validate a world from a JSON file, or build the built-in world.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    let Some(path) = path else {
        return grue_core::build_world().map_err(|e| format!("built-in world is invalid: {e}"));
    };

    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let world = WorldBlueprint::from_json(&json)
        .and_then(|blueprint| blueprint.build())
        .map_err(|e| format!("{}: {e}", path.display()))?;

    tracing::info!(path = %path.display(), areas = world.area_count(), "world loaded");
    Ok(world)
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
