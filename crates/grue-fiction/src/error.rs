//! Error types for the interpreter.

use grue_core::CoreError;
use thiserror::Error;

/// Result type for interpreter operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while resolving a turn.
///
/// Most variants are misses caused by player input; their `Display` output is
/// the exact line shown to the player and they never end the game. Only
/// [`FictionError::AreaNotFound`] and [`FictionError::Core`] indicate a broken
/// world.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Blank input.
    #[error("I beg your pardon?")]
    Pardon,

    /// A verb, direction, or target that matches nothing.
    #[error("I do not know the word \"{0}\"")]
    UnknownWord(String),

    /// Nothing openable in the area matches the target.
    #[error("There is no {0} to open here.")]
    NothingToOpen(String),

    /// The target is not in reach.
    #[error("You can't see any {0} here!")]
    NotHere(String),

    /// The container was opened before.
    #[error("It is already open.")]
    AlreadyOpen,

    /// The door was opened before.
    #[error("Too late for that.")]
    TooLate,

    /// A verb that needs a target was given none.
    #[error("What do you want to {0}?")]
    Incomplete(String),

    /// `go` without a direction.
    #[error("Where do you want to go?")]
    NoDirection,

    /// The item has no switch.
    #[error("You can't turn that {0}.")]
    NotSwitchable(&'static str),

    /// The item is already in the requested switch state.
    #[error("It is already {0}.")]
    AlreadySwitched(&'static str),

    /// The player stands in an area the world does not know.
    #[error("area not found: {0}")]
    AreaNotFound(String),

    /// World error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FictionError {
    /// Whether this error is an ordinary miss to be shown to the player.
    pub fn is_miss(&self) -> bool {
        !matches!(self, Self::AreaNotFound(_) | Self::Core(_))
    }
}
