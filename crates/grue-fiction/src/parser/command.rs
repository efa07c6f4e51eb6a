//! Command parsing for player input.

use grue_core::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank input.
    Empty,
    /// Travel in a direction.
    Move {
        /// The direction to travel.
        direction: Direction,
        /// The word as typed, echoed back if the direction leads nowhere.
        word: String,
    },
    /// Describe the current area again.
    Look,
    /// List carried items.
    Inventory,
    /// Open a container or door.
    Open {
        /// Name fragment of the target.
        target: String,
    },
    /// Pick up an item.
    Take {
        /// Name fragment of the target.
        target: String,
    },
    /// Read a carried item.
    Read {
        /// Name fragment of the target.
        target: String,
    },
    /// Examine an item, carried or nearby.
    Examine {
        /// Name fragment of the target.
        target: String,
    },
    /// Turn a carried item on or off.
    Switch {
        /// `true` for on, `false` for off.
        on: bool,
        /// Name fragment of the target.
        target: String,
    },
    /// `go` with nothing after it.
    Nowhere,
    /// A verb that needs a target but got none.
    Incomplete {
        /// The verb phrase, e.g. "open" or "turn on".
        verb: String,
    },
    /// Anything else.
    Unknown {
        /// The unrecognized word.
        word: String,
    },
}

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["go", "walk"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const OPEN_VERBS: &[&str] = &["open"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab"];
const READ_VERBS: &[&str] = &["read"];
const EXAMINE_VERBS: &[&str] = &["examine", "x", "inspect"];
const SWITCH_VERBS: &[&str] = &["turn"];

/// Every verb and direction name the parser understands.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    [
        MOVE_VERBS,
        LOOK_VERBS,
        INVENTORY_VERBS,
        OPEN_VERBS,
        TAKE_VERBS,
        READ_VERBS,
        EXAMINE_VERBS,
        SWITCH_VERBS,
    ]
    .into_iter()
    .flatten()
    .copied()
    .chain(Direction::ALL.iter().map(Direction::name))
}

/// Parse a player input string into a command.
///
/// The line is lower-cased and split on whitespace; the first word is the
/// verb and the remaining words, joined by single spaces, are its argument.
pub fn parse_command(input: &str) -> Command {
    let input = input.to_lowercase();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((&verb, rest)) = words.split_first() else {
        return Command::Empty;
    };
    let rest = rest.join(" ");
    let rest = rest.as_str();

    // Check for bare direction
    if let Some(direction) = Direction::parse(verb) {
        if rest.is_empty() {
            return Command::Move {
                direction,
                word: verb.to_string(),
            };
        }
        return Command::Unknown {
            word: words.join(" "),
        };
    }

    if MOVE_VERBS.contains(&verb) {
        return parse_move(rest);
    }
    if LOOK_VERBS.contains(&verb) {
        return Command::Look;
    }
    if INVENTORY_VERBS.contains(&verb) {
        return Command::Inventory;
    }
    if OPEN_VERBS.contains(&verb) {
        return targeted(verb, rest, |target| Command::Open { target });
    }
    if TAKE_VERBS.contains(&verb) {
        return targeted(verb, rest, |target| Command::Take { target });
    }
    if READ_VERBS.contains(&verb) {
        return targeted(verb, rest, |target| Command::Read { target });
    }
    if EXAMINE_VERBS.contains(&verb) {
        return targeted(verb, rest, |target| Command::Examine { target });
    }
    if SWITCH_VERBS.contains(&verb) {
        return parse_switch(rest);
    }

    Command::Unknown {
        word: verb.to_string(),
    }
}

fn targeted(verb: &str, rest: &str, make: impl FnOnce(String) -> Command) -> Command {
    if rest.is_empty() {
        Command::Incomplete {
            verb: verb.to_string(),
        }
    } else {
        make(rest.to_string())
    }
}

fn parse_move(rest: &str) -> Command {
    if rest.is_empty() {
        return Command::Nowhere;
    }

    match Direction::parse(rest) {
        Some(direction) => Command::Move {
            direction,
            word: rest.to_string(),
        },
        None => Command::Unknown {
            word: rest.to_string(),
        },
    }
}

fn parse_switch(rest: &str) -> Command {
    let (state, target) = match rest.split_once(char::is_whitespace) {
        Some((state, target)) => (state, target.trim()),
        None => (rest, ""),
    };

    let on = match state {
        "on" => true,
        "off" => false,
        "" => {
            return Command::Incomplete {
                verb: "turn".to_string(),
            };
        }
        other => {
            return Command::Unknown {
                word: other.to_string(),
            };
        }
    };

    targeted(&format!("turn {state}"), target, |target| Command::Switch {
        on,
        target,
    })
}
