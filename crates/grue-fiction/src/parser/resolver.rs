//! Target name resolution against the objects in reach.

use grue_core::{ContainerId, DoorId, ItemId, World};
use strsim::jaro_winkler;

use super::command::vocabulary;

/// Case-insensitive substring test of a target against a canonical name.
pub fn name_matches(name: &str, target: &str) -> bool {
    name.to_lowercase().contains(&target.to_lowercase())
}

/// First candidate, in the given order, whose name contains the target.
pub fn first_match<'a, T>(
    candidates: impl IntoIterator<Item = (T, &'a str)>,
    target: &str,
) -> Option<T> {
    candidates
        .into_iter()
        .find(|(_, name)| name_matches(name, target))
        .map(|(id, _)| id)
}

/// Resolve an item among `ids`.
pub fn find_item(world: &World, ids: &[ItemId], target: &str) -> Option<ItemId> {
    first_match(ids.iter().map(|&id| (id, world.item(id).name.as_str())), target)
}

/// Resolve a container among `ids`.
pub fn find_container(world: &World, ids: &[ContainerId], target: &str) -> Option<ContainerId> {
    first_match(
        ids.iter().map(|&id| (id, world.container(id).name.as_str())),
        target,
    )
}

/// Resolve a door among `ids`.
pub fn find_door(world: &World, ids: &[DoorId], target: &str) -> Option<DoorId> {
    first_match(ids.iter().map(|&id| (id, world.door(id).name.as_str())), target)
}

/// Suggest the known word closest to an unrecognized one.
///
/// Returns `None` when nothing reaches `threshold` or the word is already
/// known.
pub fn suggest_word(word: &str, threshold: f64) -> Option<&'static str> {
    let word = word.to_lowercase();
    let mut best: Option<(&'static str, f64)> = None;
    for candidate in vocabulary() {
        if candidate == word {
            return None;
        }
        let score = jaro_winkler(&word, candidate);
        if score >= threshold && best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}
