//! Core types for grue: areas, items, containers, doors, and the world graph.
//!
//! This crate defines the data model the interpreter runs against. It is
//! independent of command parsing: a [`World`] is built from a
//! [`WorldBlueprint`], either authored in Rust (see [`atlas`]) or
//! deserialized from JSON.

/// The built-in "above ground" world.
pub mod atlas;
/// Declarative, serializable world descriptions and load-time validation.
pub mod blueprint;
/// Compass and vertical directions used as exit labels.
pub mod direction;
/// Entity records and their identifiers.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// The runtime world graph that owns every entity.
pub mod world;

/// Re-export the built-in world constructor.
pub use atlas::build_world;
/// Re-export blueprint types.
pub use blueprint::{
    AreaBlueprint, ContainerBlueprint, DoorBlueprint, ItemBlueprint, WorldBlueprint,
};
/// Re-export the direction type.
pub use direction::Direction;
/// Re-export entity types.
pub use entity::{
    Area, AreaKey, AreaText, Container, ContainerId, Door, DoorId, Examine, GRUE_WARNING, Item,
    ItemId,
};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export world model types.
pub use world::{ItemPlace, OpenOutcome, Passage, Travelable, World};
