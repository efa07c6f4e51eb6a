//! Command interpreter for grue.
//!
//! Turns one raw line of player input into state changes on a
//! [`grue_core::World`] and the lines of text to show for that turn.
//! Targets are matched by case-insensitive substring, so "lantern" finds the
//! "brass lantern".

/// Interpreter configuration.
pub mod config;
/// Error types for the interpreter.
pub mod error;
/// Text rendering for areas, inventories, and reveals.
pub mod narrator;
/// Command parsing and target matching.
pub mod parser;
/// Player state management.
pub mod player;
/// Turn resolution and game sessions.
pub mod session;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use parser::{Command, parse_command};
pub use player::PlayerState;
pub use session::{GameSession, resolve};
