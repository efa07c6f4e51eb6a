use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::entity::{
    Area, AreaKey, AreaText, Container, ContainerId, Door, DoorId, Examine, Item, ItemId,
};
use crate::error::{CoreError, CoreResult};
use crate::world::World;

/// Refusal used for directions that simply lead nowhere.
pub const NO_WAY: &str = "You can't go that way.";

/// Declarative description of a whole world.
///
/// A blueprint is plain data: it can be written as Rust tables, read from
/// JSON, and checked with [`WorldBlueprint::validate`]. [`WorldBlueprint::build`]
/// turns it into a playable [`World`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBlueprint {
    /// Display name of the world.
    pub name: String,
    /// Key of the area the player starts in.
    pub start: AreaKey,
    /// Every area, in authored order.
    pub areas: Vec<AreaBlueprint>,
}

/// Declarative description of one area and everything fixed inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaBlueprint {
    /// Stable key, unique across the world.
    pub key: AreaKey,
    /// Display name.
    pub name: String,
    /// Text shown on entry.
    pub description: AreaText,
    /// Exits to other areas.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub exits: BTreeMap<Direction, AreaKey>,
    /// Refusal messages for directions without an exit.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub blocked: BTreeMap<Direction, String>,
    /// Containers fixed in this area.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<ContainerBlueprint>,
    /// Items lying here from the start.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemBlueprint>,
    /// Doors gating exits of this area.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doors: Vec<DoorBlueprint>,
}

/// Declarative description of a container and its hidden contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerBlueprint {
    /// Display name and match token.
    pub name: String,
    /// Items revealed by the first open.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contents: Vec<ItemBlueprint>,
}

/// Declarative description of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemBlueprint {
    /// Display name and match token.
    pub name: String,
    /// Text shown by `read`.
    pub description: String,
    /// Text shown by `examine`; defaults to "There's nothing special about the <name>."
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examine: Option<Examine>,
}

/// Declarative description of a door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorBlueprint {
    /// Display name and match token.
    pub name: String,
    /// The exit the door gates.
    pub direction: Direction,
    /// Message shown while the door is closed.
    pub refusal: String,
    /// Message shown when the door is opened.
    pub opening: String,
}

impl AreaBlueprint {
    /// Start an area with no exits or contents.
    pub fn new(key: &str, name: &str, description: impl Into<AreaText>) -> Self {
        Self {
            key: AreaKey::from(key),
            name: name.to_string(),
            description: description.into(),
            exits: BTreeMap::new(),
            blocked: BTreeMap::new(),
            containers: Vec::new(),
            items: Vec::new(),
            doors: Vec::new(),
        }
    }

    /// Add an exit.
    pub fn exit(mut self, direction: Direction, target: &str) -> Self {
        self.exits.insert(direction, AreaKey::from(target));
        self
    }

    /// Add a blocked direction with its refusal message.
    pub fn blocked(mut self, direction: Direction, message: &str) -> Self {
        self.blocked.insert(direction, message.to_string());
        self
    }

    /// Block a direction with the stock "You can't go that way." refusal.
    pub fn no_way(self, direction: Direction) -> Self {
        self.blocked(direction, NO_WAY)
    }

    /// Add a container.
    pub fn container(mut self, container: ContainerBlueprint) -> Self {
        self.containers.push(container);
        self
    }

    /// Add an item lying in the area.
    pub fn item(mut self, item: ItemBlueprint) -> Self {
        self.items.push(item);
        self
    }

    /// Add a door.
    pub fn door(mut self, door: DoorBlueprint) -> Self {
        self.doors.push(door);
        self
    }
}

impl ContainerBlueprint {
    /// An empty container.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            contents: Vec::new(),
        }
    }

    /// Put an item inside.
    pub fn holding(mut self, item: ItemBlueprint) -> Self {
        self.contents.push(item);
        self
    }
}

impl ItemBlueprint {
    /// An item with the default examine text.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            examine: None,
        }
    }

    /// Set a fixed examine text.
    pub fn examine(mut self, text: &str) -> Self {
        self.examine = Some(Examine::Plain(text.to_string()));
        self
    }

    /// Make the item switchable, with examine text for each state.
    pub fn switchable(mut self, on: &str, off: &str) -> Self {
        self.examine = Some(Examine::Switchable {
            on: on.to_string(),
            off: off.to_string(),
        });
        self
    }

    fn instantiate(&self) -> Item {
        let examine = self.examine.clone().unwrap_or_else(|| {
            Examine::Plain(format!("There's nothing special about the {}.", self.name))
        });
        Item {
            name: self.name.clone(),
            description: self.description.clone(),
            examine,
            carried: false,
            on: false,
        }
    }
}

impl DoorBlueprint {
    /// A closed door gating `direction`.
    pub fn new(name: &str, direction: Direction, refusal: &str, opening: &str) -> Self {
        Self {
            name: name.to_string(),
            direction,
            refusal: refusal.to_string(),
            opening: opening.to_string(),
        }
    }
}

impl WorldBlueprint {
    /// Start an empty blueprint.
    pub fn new(name: &str, start: &str) -> Self {
        Self {
            name: name.to_string(),
            start: AreaKey::from(start),
            areas: Vec::new(),
        }
    }

    /// Add an area.
    pub fn area(mut self, area: AreaBlueprint) -> Self {
        self.areas.push(area);
        self
    }

    /// Parse a blueprint from JSON. The result is not validated yet.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the blueprint as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the blueprint for authoring mistakes.
    ///
    /// Rejects duplicate area keys, an undefined start area, exits to undefined
    /// areas, directions that are both exits and blocked, doors gating a
    /// direction with no exit, and doors sharing a direction.
    pub fn validate(&self) -> CoreResult<()> {
        let mut keys = HashSet::new();
        for area in &self.areas {
            if !keys.insert(&area.key) {
                return Err(CoreError::DuplicateArea(area.key.clone()));
            }
        }

        if !keys.contains(&self.start) {
            return Err(CoreError::UnknownStart(self.start.clone()));
        }

        for area in &self.areas {
            for (direction, target) in &area.exits {
                if !keys.contains(target) {
                    return Err(CoreError::DanglingExit {
                        area: area.key.clone(),
                        direction: *direction,
                        target: target.clone(),
                    });
                }
                if area.blocked.contains_key(direction) {
                    return Err(CoreError::ConflictingExit {
                        area: area.key.clone(),
                        direction: *direction,
                    });
                }
            }

            let mut gated = HashSet::new();
            for door in &area.doors {
                if !area.exits.contains_key(&door.direction) {
                    return Err(CoreError::DoorWithoutExit {
                        area: area.key.clone(),
                        door: door.name.clone(),
                        direction: door.direction,
                    });
                }
                if !gated.insert(door.direction) {
                    return Err(CoreError::DuplicateDoor {
                        area: area.key.clone(),
                        direction: door.direction,
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate the blueprint and build a fresh world from it.
    pub fn build(&self) -> CoreResult<World> {
        self.validate()?;

        let mut items = Vec::new();
        let mut containers = Vec::new();
        let mut doors = Vec::new();
        let mut areas = Vec::with_capacity(self.areas.len());

        for bp in &self.areas {
            let mut area = Area {
                key: bp.key.clone(),
                name: bp.name.clone(),
                description: bp.description.clone(),
                exits: bp.exits.clone(),
                blocked: bp.blocked.clone(),
                containers: Vec::new(),
                items: Vec::new(),
                doors: Vec::new(),
            };

            for container in &bp.containers {
                let contents = container
                    .contents
                    .iter()
                    .map(|item| {
                        items.push(item.instantiate());
                        ItemId(items.len() - 1)
                    })
                    .collect();
                containers.push(Container {
                    name: container.name.clone(),
                    opened: false,
                    contents,
                });
                area.containers.push(ContainerId(containers.len() - 1));
            }

            for item in &bp.items {
                items.push(item.instantiate());
                area.items.push(ItemId(items.len() - 1));
            }

            for door in &bp.doors {
                doors.push(Door {
                    name: door.name.clone(),
                    direction: door.direction,
                    refusal: door.refusal.clone(),
                    opening: door.opening.clone(),
                    opened: false,
                });
                area.doors.push(DoorId(doors.len() - 1));
            }

            areas.push(area);
        }

        tracing::debug!(
            world = %self.name,
            areas = areas.len(),
            items = items.len(),
            "built world"
        );

        Ok(World::assemble(
            self.name.clone(),
            self.start.clone(),
            areas,
            items,
            containers,
            doors,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> WorldBlueprint {
        WorldBlueprint::new("Test", "hall")
            .area(
                AreaBlueprint::new("hall", "Hall", "A long hall.")
                    .exit(Direction::North, "study")
                    .no_way(Direction::Up)
                    .container(
                        ContainerBlueprint::new("chest")
                            .holding(ItemBlueprint::new("coin", "You can't read a coin.")),
                    )
                    .door(DoorBlueprint::new(
                        "oak door",
                        Direction::North,
                        "The oak door is closed.",
                        "The oak door creaks open.",
                    )),
            )
            .area(
                AreaBlueprint::new("study", "Study", "Books everywhere.")
                    .item(ItemBlueprint::new("book", "It is a dull book.").examine("A dull book.")),
            )
    }

    #[test]
    fn valid_blueprint_builds() {
        let world = two_rooms().build().unwrap();
        assert_eq!(world.area_count(), 2);
        assert_eq!(world.item_count(), 2);
        assert_eq!(world.start().as_str(), "hall");
    }

    #[test]
    fn default_examine_text() {
        let world = two_rooms().build().unwrap();
        let hall = world.area(&AreaKey::from("hall")).unwrap();
        let chest = world.container(hall.containers[0]);
        let coin = world.item(chest.contents[0]);
        assert_eq!(coin.examine_text(), "There's nothing special about the coin.");
    }

    #[test]
    fn duplicate_area_rejected() {
        let bp = two_rooms().area(AreaBlueprint::new("study", "Study", "Again."));
        assert!(matches!(bp.build(), Err(CoreError::DuplicateArea(k)) if k.as_str() == "study"));
    }

    #[test]
    fn dangling_exit_rejected() {
        let mut bp = two_rooms();
        bp.areas[1] = bp.areas[1].clone().exit(Direction::South, "cellar");
        let err = bp.build().unwrap_err();
        assert!(matches!(
            err,
            CoreError::DanglingExit { direction: Direction::South, ref target, .. } if target.as_str() == "cellar"
        ));
        assert!(err.to_string().contains("cellar"));
    }

    #[test]
    fn unknown_start_rejected() {
        let mut bp = two_rooms();
        bp.start = AreaKey::from("attic");
        assert!(matches!(bp.validate(), Err(CoreError::UnknownStart(_))));
    }

    #[test]
    fn conflicting_exit_rejected() {
        let mut bp = two_rooms();
        bp.areas[0] = bp.areas[0].clone().no_way(Direction::North);
        assert!(matches!(
            bp.validate(),
            Err(CoreError::ConflictingExit { direction: Direction::North, .. })
        ));
    }

    #[test]
    fn door_without_exit_rejected() {
        let mut bp = two_rooms();
        bp.areas[1] = bp.areas[1].clone().door(DoorBlueprint::new(
            "hatch",
            Direction::Down,
            "The hatch is shut.",
            "The hatch opens.",
        ));
        assert!(matches!(
            bp.validate(),
            Err(CoreError::DoorWithoutExit { direction: Direction::Down, .. })
        ));
    }

    #[test]
    fn duplicate_door_rejected() {
        let mut bp = two_rooms();
        bp.areas[0] = bp.areas[0].clone().door(DoorBlueprint::new(
            "curtain",
            Direction::North,
            "A curtain hangs here.",
            "You pull the curtain aside.",
        ));
        assert!(matches!(
            bp.validate(),
            Err(CoreError::DuplicateDoor { direction: Direction::North, .. })
        ));
    }

    #[test]
    fn json_round_trip_preserves_blueprint() {
        let bp = two_rooms();
        let json = bp.to_json_pretty().unwrap();
        let back = WorldBlueprint::from_json(&json).unwrap();
        assert_eq!(back, bp);
    }

    #[test]
    fn json_omits_empty_collections() {
        let bp = WorldBlueprint::new("Tiny", "cell")
            .area(AreaBlueprint::new("cell", "Cell", "Four walls."));
        let json = serde_json::to_string(&bp).unwrap();
        insta::assert_snapshot!(
            json,
            @r#"{"name":"Tiny","start":"cell","areas":[{"key":"cell","name":"Cell","description":"Four walls."}]}"#
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = WorldBlueprint::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }
}
