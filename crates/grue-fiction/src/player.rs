//! Player state management.

use grue_core::{AreaKey, ItemId};

/// The player's current state in a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Current area.
    pub location: AreaKey,
    /// Carried items, in the order they were taken.
    pub inventory: Vec<ItemId>,
}

impl PlayerState {
    /// Create an empty-handed player at the given area.
    pub fn new(location: AreaKey) -> Self {
        Self {
            location,
            inventory: Vec::new(),
        }
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item_id: ItemId) -> bool {
        self.inventory.contains(&item_id)
    }

    /// Add an item to inventory.
    pub fn add_item(&mut self, item_id: ItemId) {
        if !self.inventory.contains(&item_id) {
            self.inventory.push(item_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_state_new() {
        let state = PlayerState::new(AreaKey::from("kitchen"));
        assert_eq!(state.location.as_str(), "kitchen");
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn inventory_management() {
        let mut state = PlayerState::new(AreaKey::from("kitchen"));
        let item = ItemId(4);

        assert!(!state.has_item(item));
        state.add_item(item);
        assert!(state.has_item(item));

        // Adding again should not duplicate
        state.add_item(item);
        assert_eq!(state.inventory.len(), 1);
    }

    #[test]
    fn inventory_keeps_take_order() {
        let mut state = PlayerState::new(AreaKey::from("kitchen"));
        state.add_item(ItemId(2));
        state.add_item(ItemId(0));
        assert_eq!(state.inventory, vec![ItemId(2), ItemId(0)]);
    }
}
