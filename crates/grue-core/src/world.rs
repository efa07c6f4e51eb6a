use std::collections::{BTreeMap, HashMap};

use crate::direction::Direction;
use crate::entity::{Area, AreaKey, Container, ContainerId, Door, DoorId, Item, ItemId};
use crate::error::{CoreError, CoreResult};

/// Where a direction leads from an area under the current door state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passage<'a> {
    /// Travel is possible; holds the destination key.
    Open(&'a AreaKey),
    /// Travel is refused with this message.
    Blocked(&'a str),
}

/// The exit table of one area as it stands right now.
///
/// A direction appears in at most one of the two maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Travelable {
    /// Directions the player can travel, with their destinations.
    pub exits: BTreeMap<Direction, AreaKey>,
    /// Directions that refuse travel, with their messages.
    pub blocked: BTreeMap<Direction, String>,
}

/// Result of opening a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// First open: these items moved from the container into the area.
    Revealed(Vec<ItemId>),
    /// The container was already open; nothing changed.
    AlreadyOpen,
}

/// One place an item can be found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemPlace {
    /// Lying in an area.
    Area(AreaKey),
    /// Hidden inside an unopened container.
    Container(ContainerId),
    /// Carried by the player.
    Carried,
}

/// The runtime world graph. Owns every area, item, container, and door.
#[derive(Debug, Clone)]
pub struct World {
    name: String,
    start: AreaKey,
    areas: Vec<Area>,
    items: Vec<Item>,
    containers: Vec<Container>,
    doors: Vec<Door>,

    // Indexes
    by_key: HashMap<AreaKey, usize>,
}

impl World {
    pub(crate) fn assemble(
        name: String,
        start: AreaKey,
        areas: Vec<Area>,
        items: Vec<Item>,
        containers: Vec<Container>,
        doors: Vec<Door>,
    ) -> Self {
        let by_key = areas
            .iter()
            .enumerate()
            .map(|(idx, area)| (area.key.clone(), idx))
            .collect();
        Self {
            name,
            start,
            areas,
            items,
            containers,
            doors,
            by_key,
        }
    }

    /// Display name of the world.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key of the starting area.
    pub fn start(&self) -> &AreaKey {
        &self.start
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get an area by key.
    pub fn area(&self, key: &AreaKey) -> Option<&Area> {
        self.by_key.get(key).map(|&idx| &self.areas[idx])
    }

    fn area_mut(&mut self, key: &AreaKey) -> CoreResult<&mut Area> {
        let idx = *self
            .by_key
            .get(key)
            .ok_or_else(|| CoreError::AreaNotFound(key.clone()))?;
        Ok(&mut self.areas[idx])
    }

    fn require_area(&self, key: &AreaKey) -> CoreResult<&Area> {
        self.area(key)
            .ok_or_else(|| CoreError::AreaNotFound(key.clone()))
    }

    /// All areas, in authored order.
    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter()
    }

    /// Get an item.
    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.0]
    }

    /// Get an item mutably.
    pub fn item_mut(&mut self, id: ItemId) -> &mut Item {
        &mut self.items[id.0]
    }

    /// All items with their ids.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| (ItemId(idx), item))
    }

    /// Get a container.
    pub fn container(&self, id: ContainerId) -> &Container {
        &self.containers[id.0]
    }

    /// Get a door.
    pub fn door(&self, id: DoorId) -> &Door {
        &self.doors[id.0]
    }

    // -----------------------------------------------------------------------
    // Travel
    // -----------------------------------------------------------------------

    /// Derive the exit table of an area from its static exits and the current
    /// door state. Closed doors turn their gated exit into a blocked one.
    pub fn travelable(&self, key: &AreaKey) -> CoreResult<Travelable> {
        let area = self.require_area(key)?;
        let mut exits = area.exits.clone();
        let mut blocked = area.blocked.clone();

        for door in area.doors.iter().map(|&id| self.door(id)) {
            if !door.opened {
                exits.remove(&door.direction);
                blocked.insert(door.direction, door.refusal.clone());
            }
        }

        Ok(Travelable { exits, blocked })
    }

    /// Where `direction` leads from an area right now, or `None` when the
    /// area knows nothing about that direction.
    pub fn passage(&self, key: &AreaKey, direction: Direction) -> CoreResult<Option<Passage<'_>>> {
        let area = self.require_area(key)?;

        let closed_door = area
            .doors
            .iter()
            .map(|&id| self.door(id))
            .find(|door| door.direction == direction && !door.opened);
        if let Some(door) = closed_door {
            return Ok(Some(Passage::Blocked(&door.refusal)));
        }

        if let Some(target) = area.exits.get(&direction) {
            return Ok(Some(Passage::Open(target)));
        }

        Ok(area
            .blocked
            .get(&direction)
            .map(|message| Passage::Blocked(message.as_str())))
    }

    // -----------------------------------------------------------------------
    // State transitions
    // -----------------------------------------------------------------------

    /// Open a container in `area`, moving its contents into the area on the
    /// first call. Later calls change nothing.
    ///
    /// Fails if the container belongs to another area.
    pub fn open_container(&mut self, area: &AreaKey, id: ContainerId) -> CoreResult<OpenOutcome> {
        if !self.require_area(area)?.containers.contains(&id) {
            return Err(CoreError::ContainerNotInArea {
                area: area.clone(),
                container: id,
            });
        }

        let container = &mut self.containers[id.0];
        if container.opened {
            return Ok(OpenOutcome::AlreadyOpen);
        }
        container.opened = true;
        let revealed = std::mem::take(&mut container.contents);

        let revealed: Vec<ItemId> = revealed
            .into_iter()
            .filter(|&item| !self.items[item.0].carried)
            .collect();
        self.area_mut(area)?.items.extend(revealed.iter().copied());

        Ok(OpenOutcome::Revealed(revealed))
    }

    /// Open a door. Returns `false` if it was already open.
    pub fn open_door(&mut self, id: DoorId) -> bool {
        let door = &mut self.doors[id.0];
        if door.opened {
            return false;
        }
        door.opened = true;
        true
    }

    /// Pick an item up from `area`. Returns `false` if it is not lying there.
    pub fn take_item(&mut self, area: &AreaKey, id: ItemId) -> CoreResult<bool> {
        let area = self.area_mut(area)?;
        let Some(pos) = area.items.iter().position(|&item| item == id) else {
            return Ok(false);
        };
        area.items.remove(pos);
        self.items[id.0].carried = true;
        Ok(true)
    }

    /// Every place the item currently appears in. A consistent world always
    /// returns exactly one place.
    pub fn item_places(&self, id: ItemId) -> Vec<ItemPlace> {
        let mut places: Vec<ItemPlace> = self
            .areas
            .iter()
            .filter(|area| area.items.contains(&id))
            .map(|area| ItemPlace::Area(area.key.clone()))
            .collect();

        places.extend(
            self.containers
                .iter()
                .enumerate()
                .filter(|(_, container)| container.contents.contains(&id))
                .map(|(idx, _)| ItemPlace::Container(ContainerId(idx))),
        );

        if self.item(id).carried {
            places.push(ItemPlace::Carried);
        }
        places
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of areas.
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Number of items, revealed or not.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of containers.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Number of doors.
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }
}
