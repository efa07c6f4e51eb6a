use crate::direction::Direction;
use crate::entity::{AreaKey, ContainerId};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading or querying a world.
///
/// Every variant except [`CoreError::AreaNotFound`] and
/// [`CoreError::ContainerNotInArea`] describes malformed world data and is
/// fatal before play starts.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Two areas share the same key.
    #[error("duplicate area key: \"{0}\"")]
    DuplicateArea(AreaKey),

    /// An exit points at an area key that is not defined.
    #[error("exit {direction} of \"{area}\" leads to undefined area \"{target}\"")]
    DanglingExit {
        /// The area declaring the exit.
        area: AreaKey,
        /// The exit direction.
        direction: Direction,
        /// The undefined destination key.
        target: AreaKey,
    },

    /// The start area is not one of the defined areas.
    #[error("start area \"{0}\" is not defined")]
    UnknownStart(AreaKey),

    /// A direction is both an exit and a blocked exit in the authored data.
    #[error("direction {direction} of \"{area}\" is both an exit and blocked")]
    ConflictingExit {
        /// The offending area.
        area: AreaKey,
        /// The doubly-declared direction.
        direction: Direction,
    },

    /// A door gates a direction that has no exit behind it.
    #[error("door \"{door}\" in \"{area}\" gates {direction}, which has no exit")]
    DoorWithoutExit {
        /// The area holding the door.
        area: AreaKey,
        /// The door name.
        door: String,
        /// The gated direction.
        direction: Direction,
    },

    /// Two doors gate the same direction of one area.
    #[error("direction {direction} of \"{area}\" is gated by more than one door")]
    DuplicateDoor {
        /// The offending area.
        area: AreaKey,
        /// The doubly-gated direction.
        direction: Direction,
    },

    /// The requested area key does not exist in the world.
    #[error("area not found: \"{0}\"")]
    AreaNotFound(AreaKey),

    /// A container was addressed through an area it does not belong to.
    #[error("{container} is not in \"{area}\"")]
    ContainerNotInArea {
        /// The area named by the caller.
        area: AreaKey,
        /// The container that lives elsewhere.
        container: ContainerId,
    },

    /// The world description could not be read or written as JSON.
    #[error("invalid world description: {0}")]
    Json(#[from] serde_json::Error),
}
