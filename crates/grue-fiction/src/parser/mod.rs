//! Command parsing and target matching.

mod command;
mod resolver;

pub use command::{Command, parse_command, vocabulary};
pub use resolver::{find_container, find_door, find_item, first_match, name_matches, suggest_word};
