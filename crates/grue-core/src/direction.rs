use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction label of an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
}

impl Direction {
    /// Every direction, in display order.
    pub const ALL: [Direction; 10] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
        Self::Northeast,
        Self::Northwest,
        Self::Southeast,
        Self::Southwest,
    ];

    /// Parse a direction from a full name or its abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "ne" | "northeast" => Some(Self::Northeast),
            "nw" | "northwest" => Some(Self::Northwest),
            "se" | "southeast" => Some(Self::Southeast),
            "sw" | "southwest" => Some(Self::Southwest),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_names_and_abbreviations() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("n"), Some(Direction::North));
        assert_eq!(Direction::parse("UP"), Some(Direction::Up));
        assert_eq!(Direction::parse("sw"), Some(Direction::Southwest));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn name_round_trips_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(Direction::parse(dir.name()), Some(dir));
        }
    }

    proptest::proptest! {
        #[test]
        fn parse_ignores_case(idx in 0usize..10, upper in proptest::bool::ANY) {
            let dir = Direction::ALL[idx];
            let word = if upper { dir.name().to_uppercase() } else { dir.name().to_string() };
            proptest::prop_assert_eq!(Direction::parse(&word), Some(dir));
        }

        #[test]
        fn parse_never_panics(s in "\\PC*") {
            let _ = Direction::parse(&s);
        }
    }

    #[test]
    fn serializes_as_lowercase_map_key() {
        let mut exits = std::collections::BTreeMap::new();
        exits.insert(Direction::West, "forest");
        let json = serde_json::to_string(&exits).unwrap();
        assert_eq!(json, r#"{"west":"forest"}"#);
    }
}
