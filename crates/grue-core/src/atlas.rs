//! The built-in world: the land around the white house, the forest, the
//! canyon, and the ground floor and attic of the house itself.
//!
//! Exits are authored per area and are not symmetric: Canyon View leads west
//! into the southern forest, which has no way back east. Several forests loop
//! onto themselves. Behind House refuses north, and nothing leads out of the
//! End of Rainbow.

use crate::blueprint::{
    AreaBlueprint, ContainerBlueprint, DoorBlueprint, ItemBlueprint, WorldBlueprint,
};
use crate::direction::Direction::{Down, East, North, South, Up, West};
use crate::entity::AreaText;
use crate::error::CoreResult;
use crate::world::World;

/// Key of the area the player starts in.
pub const START: &str = "west_of_house";

/// Text of the leaflet found in the mailbox.
pub const LEAFLET_TEXT: &str = "\"WELCOME TO ZORK!\n\n\
ZORK is a game of adventure, danger, and low cunning. In it you will explore some of the most \
amazing territory ever seen by mortals. No computer should be without one!\"";

/// Build the built-in world.
pub fn build_world() -> CoreResult<World> {
    above_ground().build()
}

/// The built-in world as a blueprint.
pub fn above_ground() -> WorldBlueprint {
    WorldBlueprint::new("Above Ground", START)
        .area(west_of_house())
        .area(north_of_house())
        .area(south_of_house())
        .area(behind_house())
        .area(forest())
        .area(forest_path())
        .area(up_a_tree())
        .area(forest_northeast())
        .area(clearing())
        .area(forest_south())
        .area(clearing_east())
        .area(canyon_view())
        .area(rocky_ledge())
        .area(canyon_bottom())
        .area(end_of_rainbow())
        .area(kitchen())
        .area(living_room())
        .area(attic())
}

fn west_of_house() -> AreaBlueprint {
    AreaBlueprint::new(
        START,
        "West of House",
        "You are standing in an open field west of a white house, with a boarded front door.\n\
         There is a small mailbox here.",
    )
    .exit(North, "north_of_house")
    .exit(West, "forest")
    .exit(South, "south_of_house")
    .blocked(East, "The door is boarded and you can't remove the boards.")
    .no_way(Up)
    .no_way(Down)
    .container(ContainerBlueprint::new("small mailbox").holding(
        ItemBlueprint::new("leaflet", LEAFLET_TEXT).examine(LEAFLET_TEXT),
    ))
}

fn north_of_house() -> AreaBlueprint {
    AreaBlueprint::new(
        "north_of_house",
        "North of House",
        "You are facing the north side of a white house. There is no door here, and all the \
         windows are boarded up. To the north a narrow path winds through the trees.",
    )
    .exit(West, START)
    .exit(East, "behind_house")
    .exit(North, "forest_path")
    .blocked(South, "The windows are all boarded.")
    .no_way(Up)
    .no_way(Down)
}

fn south_of_house() -> AreaBlueprint {
    AreaBlueprint::new(
        "south_of_house",
        "South of House",
        "You are facing the south side of a white house. There is no door here, and all the \
         windows are boarded.",
    )
    .exit(West, START)
    .exit(East, "behind_house")
    .exit(South, "forest_south")
    .blocked(North, "The windows are all boarded.")
    .no_way(Up)
    .no_way(Down)
}

fn behind_house() -> AreaBlueprint {
    AreaBlueprint::new(
        "behind_house",
        "Behind House",
        "You are behind the white house. A path leads into the forest to the east. In one corner \
         of the house there is a small window which is slightly ajar.",
    )
    .exit(South, "south_of_house")
    .exit(East, "clearing_east")
    .exit(West, "kitchen")
    .blocked(North, "The forest becomes impenetrable to the north.")
    .no_way(Up)
    .no_way(Down)
    .door(DoorBlueprint::new(
        "window",
        West,
        "The kitchen window is closed.",
        "With great effort, you open the window far enough to allow entry.",
    ))
}

fn forest() -> AreaBlueprint {
    AreaBlueprint::new(
        "forest",
        "Forest",
        "This is a forest. Trees in all directions. To the east, there appears to be sunlight.",
    )
    .exit(West, "forest")
    .exit(East, "forest_path")
    .exit(North, "clearing")
    .blocked(Up, "There is no tree here suitable for climbing.")
    .no_way(Down)
}

fn forest_path() -> AreaBlueprint {
    AreaBlueprint::new(
        "forest_path",
        "Forest Path",
        "This is a path winding through a dimly lit forest. The path heads north-south here. One \
         particularly large tree with some low branches stands at the edge of the path.",
    )
    .exit(South, "north_of_house")
    .exit(West, "forest")
    .exit(East, "forest_northeast")
    .exit(North, "clearing")
    .exit(Up, "up_a_tree")
    .no_way(Down)
}

fn up_a_tree() -> AreaBlueprint {
    AreaBlueprint::new(
        "up_a_tree",
        "Up a Tree",
        "You are about 10 feet above the ground nestled among some large branches. The nearest \
         branch above you is above your reach. Beside you on the branch is a small bird's nest. \
         In the bird's nest is a large egg encrusted with precious jewels, apparently scavenged \
         by a childless songbird. The egg is covered with fine gold inlay, and ornamented in \
         lapis lazuli and mother-of-pearl. Unlike most eggs, this one is hinged and closed with \
         a delicate looking clasp. The egg appears extremely fragile.",
    )
    .exit(Down, "forest_path")
    .blocked(Up, "You cannot climb any higher.")
    .no_way(West)
    .no_way(South)
    .no_way(East)
    .blocked(
        North,
        "You can't go that way.\nYou hear in the distance the chirping of a song bird.",
    )
    .item(
        ItemBlueprint::new(
            "jewel-encrusted egg",
            "How does one read a jewel-encrusted egg?",
        )
        .examine("The jewel-encrusted egg is closed."),
    )
}

fn forest_northeast() -> AreaBlueprint {
    AreaBlueprint::new(
        "forest_northeast",
        "Forest",
        "You hear the chirping of birds.",
    )
    .exit(West, "forest_path")
    .exit(East, "forest_northeast")
    .exit(South, "clearing_east")
    .no_way(Up)
    .no_way(Down)
}

fn clearing() -> AreaBlueprint {
    AreaBlueprint::new(
        "clearing",
        "Clearing",
        "You are in a clearing, with a forest surrounding you on all sides. A path leads south.\n\
         On the ground is a pile of leaves.",
    )
    .exit(South, "forest_path")
    .exit(East, "forest_northeast")
    .exit(West, "forest")
    .blocked(North, "The forest becomes impenetrable to the north.")
    .no_way(Up)
    .no_way(Down)
}

fn forest_south() -> AreaBlueprint {
    AreaBlueprint::new(
        "forest_south",
        "Forest",
        "This is a dimly lit forest, with large trees all around.",
    )
    .exit(West, "forest")
    .exit(North, "clearing_east")
    .blocked(East, "The rank undergrowth prevents eastward movement.")
    .blocked(Up, "There is no tree here suitable for climbing.")
    .no_way(Down)
}

fn clearing_east() -> AreaBlueprint {
    AreaBlueprint::new(
        "clearing_east",
        "Clearing",
        "You are in a small clearing in a well marked forest path that extends to the east and \
         west.",
    )
    .exit(North, "forest_northeast")
    .exit(South, "forest_south")
    .exit(West, "behind_house")
    .exit(East, "canyon_view")
    .no_way(Up)
    .no_way(Down)
}

fn canyon_view() -> AreaBlueprint {
    AreaBlueprint::new(
        "canyon_view",
        "Canyon View",
        "You are at the top of the Great Canyon on its west wall. From here there is a marvelous \
         view of the canyon and parts of the Frigid River upstream. Across the canyon, the walls \
         of the White Cliffs join the mighty ramparts of the Flathead Mountains to the east. \
         Following the canyon upstream to the north, Aragain Falls may be seen, complete with \
         rainbow. The mighty Frigid River flows out from a great dark cavern. To the west and \
         south can be seen an immense forest, stretching for miles around. A path leads \
         northwest. It is possible to climb down into the canyon from here.",
    )
    .exit(West, "forest_south")
    .exit(East, "rocky_ledge")
    .exit(Down, "rocky_ledge")
    .no_way(North)
    .blocked(South, "Storm-tossed trees block the way.")
    .no_way(Up)
}

fn rocky_ledge() -> AreaBlueprint {
    AreaBlueprint::new(
        "rocky_ledge",
        "Rocky Ledge",
        "You are on a ledge about halfway up the wall of the river canyon. You can see from here \
         that the main flow from Aragain Falls twists along a passage which is impossible for you \
         to enter. Below you is the canyon bottom. Above you is more cliff, which appears \
         climbable.",
    )
    .exit(Up, "canyon_view")
    .exit(Down, "canyon_bottom")
    .no_way(West)
    .no_way(East)
}

fn canyon_bottom() -> AreaBlueprint {
    AreaBlueprint::new(
        "canyon_bottom",
        "Canyon Bottom",
        "You are beneath the walls of the river canyon which may be climbable here. The lesser \
         part of the runoff of Aragain Falls flows by below. To the north is a narrow passage.",
    )
    .exit(Up, "rocky_ledge")
    .exit(North, "end_of_rainbow")
    .no_way(East)
    .no_way(West)
    .no_way(South)
    .no_way(Down)
}

fn end_of_rainbow() -> AreaBlueprint {
    AreaBlueprint::new(
        "end_of_rainbow",
        "End of Rainbow",
        "You are on a small, rocky beach on the continuation of the Frigid River past the Falls. \
         The beach is narrow due to the presence of the White Cliffs. The river canyon opens here \
         and sunlight shines in from above. A rainbow crosses over the falls to the east and a \
         narrow passage continues to the southwest.",
    )
    .no_way(North)
    .no_way(South)
    .no_way(East)
    .no_way(Up)
}

fn kitchen() -> AreaBlueprint {
    AreaBlueprint::new(
        "kitchen",
        "Kitchen",
        "You are in the kitchen of the white house. A table seems to have been used recently for \
         the preparation of food. A passage leads to the west and a dark stairway can be seen \
         leading upwards. A dark chimney leads down and to the east is a small window which is \
         open.",
    )
    .exit(East, "behind_house")
    .exit(West, "living_room")
    .exit(Up, "attic")
    .no_way(South)
    .blocked(Down, "Only Santa Claus climbs down chimneys.")
    .container(
        ContainerBlueprint::new("brown sack")
            .holding(ItemBlueprint::new("lunch", "You can't read a lunch."))
            .holding(ItemBlueprint::new(
                "clove of garlic",
                "You can't read a clove of garlic.",
            )),
    )
}

fn living_room() -> AreaBlueprint {
    AreaBlueprint::new(
        "living_room",
        "Living Room",
        "You are in the living room. There is a doorway to the east, a wooden door with strange \
         gothic lettering to the west, which appears to be nailed shut, a trophy case, and a \
         large oriental rug in the center of the room. Above the trophy case hangs an elvish \
         sword of great antiquity. A battery-powered brass lantern is on the trophy case.",
    )
    .exit(East, "kitchen")
    .no_way(North)
    .no_way(Up)
    .no_way(Down)
    .item(ItemBlueprint::new("sword", "How does one read a sword?"))
    .item(
        ItemBlueprint::new("brass lantern", "How does one read a brass lantern?")
            .switchable("The lantern is turned on.", "The lantern is turned off."),
    )
}

fn attic() -> AreaBlueprint {
    AreaBlueprint::new(
        "attic",
        "Attic",
        AreaText::lit(
            "lantern",
            "This is the attic. The only exit is a stairway leading down. A large coil of rope is \
             lying in the corner. On a table is a nasty-looking knife.",
        ),
    )
    .exit(Down, "kitchen")
    .no_way(North)
    .no_way(Up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::entity::AreaKey;
    use crate::world::Passage;

    fn key(k: &str) -> AreaKey {
        AreaKey::from(k)
    }

    #[test]
    fn built_in_world_is_valid() {
        let world = build_world().unwrap();
        assert_eq!(world.area_count(), 18);
        assert_eq!(world.item_count(), 6);
        assert_eq!(world.container_count(), 2);
        assert_eq!(world.door_count(), 1);
        assert_eq!(world.start().as_str(), START);
    }

    #[test]
    fn several_areas_share_a_display_name() {
        let world = build_world().unwrap();
        let forests = world.areas().filter(|a| a.name == "Forest").count();
        assert_eq!(forests, 3);
    }

    #[test]
    fn asymmetric_exits_are_preserved() {
        let world = build_world().unwrap();
        // canyon_view leads west to forest_south, which never leads back east.
        assert_eq!(
            world.passage(&key("canyon_view"), Direction::West).unwrap(),
            Some(Passage::Open(&key("forest_south")))
        );
        assert_eq!(
            world.passage(&key("forest_south"), Direction::East).unwrap(),
            Some(Passage::Blocked(
                "The rank undergrowth prevents eastward movement."
            ))
        );
    }

    #[test]
    fn forests_loop_onto_themselves() {
        let world = build_world().unwrap();
        assert_eq!(
            world.passage(&key("forest"), Direction::West).unwrap(),
            Some(Passage::Open(&key("forest")))
        );
        assert_eq!(
            world
                .passage(&key("forest_northeast"), Direction::East)
                .unwrap(),
            Some(Passage::Open(&key("forest_northeast")))
        );
    }

    #[test]
    fn kitchen_window_gates_west_behind_house() {
        let world = build_world().unwrap();
        assert_eq!(
            world.passage(&key("behind_house"), Direction::West).unwrap(),
            Some(Passage::Blocked("The kitchen window is closed."))
        );
    }

    #[test]
    fn refusals_shadow_the_way_back() {
        let world = build_world().unwrap();
        assert_eq!(
            world.passage(&key("behind_house"), Direction::North).unwrap(),
            Some(Passage::Blocked(
                "The forest becomes impenetrable to the north."
            ))
        );
        assert_eq!(
            world.passage(&key("end_of_rainbow"), Direction::South).unwrap(),
            Some(Passage::Blocked(crate::blueprint::NO_WAY))
        );
        let rainbow = world.travelable(&key("end_of_rainbow")).unwrap();
        assert!(rainbow.exits.is_empty());
    }

    #[test]
    fn blueprint_survives_json() {
        let bp = above_ground();
        let json = bp.to_json_pretty().unwrap();
        assert_eq!(WorldBlueprint::from_json(&json).unwrap(), bp);
    }
}
