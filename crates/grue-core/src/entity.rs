use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Text shown when the player enters a dark area without a light source.
pub const GRUE_WARNING: &str =
    "You have moved into a dark place. It is pitch black. You are likely to be eaten by a grue.";

/// Stable identifier of an area.
///
/// Distinct from the display name, since several areas may share one
/// (three areas are called "Forest").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaKey(String);

impl AreaKey {
    /// Create a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AreaKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for AreaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Index of an item inside its [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// Index of a container inside its [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub usize);

/// Index of a door inside its [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DoorId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door#{}", self.0)
    }
}

/// Description of an area, possibly depending on what the player carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaText {
    /// The same text on every visit.
    Plain(String),
    /// Text that needs a light source in the inventory to be seen.
    Lit {
        /// Name fragment of the light source (e.g. "lantern").
        light: String,
        /// Text shown when the light source is carried.
        lit: String,
        /// Text shown otherwise.
        #[serde(default = "default_dark")]
        dark: String,
    },
}

fn default_dark() -> String {
    GRUE_WARNING.to_string()
}

impl AreaText {
    /// A light-dependent description with the standard grue warning as dark text.
    pub fn lit(light: impl Into<String>, lit: impl Into<String>) -> Self {
        Self::Lit {
            light: light.into(),
            lit: lit.into(),
            dark: default_dark(),
        }
    }
}

impl From<&str> for AreaText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

/// Examine text of an item, possibly depending on its on/off switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Examine {
    /// The same text regardless of state.
    Plain(String),
    /// An item that can be turned on and off.
    Switchable {
        /// Text while switched on.
        on: String,
        /// Text while switched off.
        off: String,
    },
}

/// A portable object.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Display name, also the token matched against player input.
    pub name: String,
    /// Text shown by `read`.
    pub description: String,
    /// Text shown by `examine`.
    pub examine: Examine,
    /// Whether the player has taken this item.
    pub carried: bool,
    /// Switch state; only meaningful for [`Examine::Switchable`] items.
    pub on: bool,
}

impl Item {
    /// Whether the item can be turned on and off.
    pub fn is_switchable(&self) -> bool {
        matches!(self.examine, Examine::Switchable { .. })
    }

    /// The examine text for the item's current state.
    pub fn examine_text(&self) -> &str {
        match &self.examine {
            Examine::Plain(text) => text,
            Examine::Switchable { on, off } => {
                if self.on {
                    on
                } else {
                    off
                }
            }
        }
    }
}

/// An openable holder of items, fixed to one area.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Display name and match token.
    pub name: String,
    /// One-way flag, set by the first successful open.
    pub opened: bool,
    /// Items held until the first open; empty afterwards.
    pub contents: Vec<ItemId>,
}

/// A barrier gating one exit of one area.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    /// Display name and match token.
    pub name: String,
    /// The exit this door gates.
    pub direction: Direction,
    /// Message shown when travel is attempted while closed.
    pub refusal: String,
    /// Message shown when the door is opened.
    pub opening: String,
    /// One-way flag; doors never re-close.
    pub opened: bool,
}

/// A location node of the world graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    /// Stable key.
    pub key: AreaKey,
    /// Display name.
    pub name: String,
    /// Text shown on entry.
    pub description: AreaText,
    /// Static exits. Door-gated exits are listed here too; see
    /// [`World::travelable`](crate::World::travelable) for what is open now.
    pub exits: BTreeMap<Direction, AreaKey>,
    /// Static refusal messages for directions that lead nowhere.
    pub blocked: BTreeMap<Direction, String>,
    /// Containers in this area, in authored order.
    pub containers: Vec<ContainerId>,
    /// Items lying here, in the order they arrived.
    pub items: Vec<ItemId>,
    /// Doors of this area, in authored order.
    pub doors: Vec<DoorId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lantern() -> Item {
        Item {
            name: "brass lantern".to_string(),
            description: "How does one read a brass lantern?".to_string(),
            examine: Examine::Switchable {
                on: "The lantern is turned on.".to_string(),
                off: "The lantern is turned off.".to_string(),
            },
            carried: false,
            on: false,
        }
    }

    #[test]
    fn switchable_examine_follows_state() {
        let mut item = lantern();
        assert!(item.is_switchable());
        assert_eq!(item.examine_text(), "The lantern is turned off.");
        item.on = true;
        assert_eq!(item.examine_text(), "The lantern is turned on.");
    }

    #[test]
    fn plain_examine_ignores_state() {
        let item = Item {
            examine: Examine::Plain("There's nothing special about the sword.".to_string()),
            on: true,
            ..lantern()
        };
        assert!(!item.is_switchable());
        assert_eq!(item.examine_text(), "There's nothing special about the sword.");
    }

    #[test]
    fn area_text_deserializes_plain_and_lit() {
        let plain: AreaText = serde_json::from_str(r#""A quiet room.""#).unwrap();
        assert_eq!(plain, AreaText::from("A quiet room."));

        let lit: AreaText =
            serde_json::from_str(r#"{"light":"lantern","lit":"This is the attic."}"#).unwrap();
        assert_eq!(lit, AreaText::lit("lantern", "This is the attic."));
    }

    #[test]
    fn ids_display_with_kind() {
        assert_eq!(ItemId(3).to_string(), "item#3");
        assert_eq!(ContainerId(0).to_string(), "container#0");
        assert_eq!(DoorId(1).to_string(), "door#1");
        assert_eq!(AreaKey::from("kitchen").to_string(), "kitchen");
    }
}
