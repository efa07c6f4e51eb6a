//! Turn resolution and game sessions.

use grue_core::{Area, AreaKey, Direction, OpenOutcome, Passage, World};

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};
use crate::narrator::{describe_area, list_inventory, reveal, to_lines};
use crate::parser::{Command, find_container, find_door, find_item, parse_command, suggest_word};
use crate::player::PlayerState;

/// Resolve one line of player input against the world.
///
/// Returns the lines to show for the turn. Misses such as unknown words or
/// absent targets come back as ordinary lines; an `Err` means the world or
/// player state is broken.
pub fn resolve(
    input: &str,
    world: &mut World,
    player: &mut PlayerState,
    config: &GameConfig,
) -> FictionResult<Vec<String>> {
    let command = parse_command(input);
    tracing::debug!(?command, location = %player.location, "resolving command");

    let hint = match &command {
        Command::Unknown { word } if config.suggestions => {
            suggest_word(word, config.suggestion_threshold)
        }
        _ => None,
    };

    let mut interpreter = Interpreter { world, player };
    match interpreter.execute(command) {
        Ok(lines) => Ok(lines),
        Err(miss) if miss.is_miss() => {
            let mut lines = vec![miss.to_string()];
            if let Some(word) = hint {
                lines.push(format!("Did you mean \"{word}\"?"));
            }
            Ok(lines)
        }
        Err(err) => Err(err),
    }
}

struct Interpreter<'a> {
    world: &'a mut World,
    player: &'a mut PlayerState,
}

impl Interpreter<'_> {
    fn execute(&mut self, command: Command) -> FictionResult<Vec<String>> {
        match command {
            Command::Empty => Err(FictionError::Pardon),
            Command::Move { direction, word } => self.do_move(direction, word),
            Command::Look => self.do_look(),
            Command::Inventory => Ok(list_inventory(self.world, &self.player.inventory)),
            Command::Open { target } => self.do_open(&target),
            Command::Take { target } => self.do_take(&target),
            Command::Read { target } => self.do_read(&target),
            Command::Examine { target } => self.do_examine(&target),
            Command::Switch { on, target } => self.do_switch(on, &target),
            Command::Nowhere => Err(FictionError::NoDirection),
            Command::Incomplete { verb } => Err(FictionError::Incomplete(verb)),
            Command::Unknown { word } => Err(FictionError::UnknownWord(word)),
        }
    }

    fn here(&self) -> FictionResult<&Area> {
        self.world
            .area(&self.player.location)
            .ok_or_else(|| FictionError::AreaNotFound(self.player.location.to_string()))
    }

    fn do_look(&self) -> FictionResult<Vec<String>> {
        let area = self.here()?;
        Ok(describe_area(self.world, area, &self.player.inventory))
    }

    fn do_move(&mut self, direction: Direction, word: String) -> FictionResult<Vec<String>> {
        let here = self.player.location.clone();
        let destination = match self.world.passage(&here, direction)? {
            Some(Passage::Open(destination)) => destination.clone(),
            Some(Passage::Blocked(message)) => return Ok(to_lines(message).collect()),
            None => return Err(FictionError::UnknownWord(word)),
        };

        tracing::info!(from = %here, to = %destination, "area entered");
        self.player.location = destination;
        self.do_look()
    }

    fn do_open(&mut self, target: &str) -> FictionResult<Vec<String>> {
        let area = self.here()?;
        let key = area.key.clone();
        let container = find_container(self.world, &area.containers, target);
        let door = find_door(self.world, &area.doors, target);

        if let Some(id) = container {
            return match self.world.open_container(&key, id)? {
                OpenOutcome::Revealed(items) => {
                    let container = self.world.container(id);
                    tracing::info!(
                        container = %container.name,
                        revealed = items.len(),
                        "container opened"
                    );
                    let names: Vec<&str> = items
                        .iter()
                        .map(|&item| self.world.item(item).name.as_str())
                        .collect();
                    Ok(vec![reveal(&container.name, &names)])
                }
                OpenOutcome::AlreadyOpen => Err(FictionError::AlreadyOpen),
            };
        }

        if let Some(id) = door {
            if !self.world.open_door(id) {
                return Err(FictionError::TooLate);
            }
            let door = self.world.door(id);
            tracing::info!(door = %door.name, area = %key, "door opened");
            return Ok(to_lines(&door.opening).collect());
        }

        Err(FictionError::NothingToOpen(target.to_string()))
    }

    fn do_take(&mut self, target: &str) -> FictionResult<Vec<String>> {
        let area = self.here()?;
        let key = area.key.clone();
        let lying: Vec<_> = area
            .items
            .iter()
            .copied()
            .filter(|&id| !self.world.item(id).carried)
            .collect();

        let id = find_item(self.world, &lying, target)
            .ok_or_else(|| FictionError::UnknownWord(target.to_string()))?;
        if !self.world.take_item(&key, id)? {
            return Err(FictionError::UnknownWord(target.to_string()));
        }
        self.player.add_item(id);
        tracing::info!(item = %self.world.item(id).name, area = %key, "item taken");

        Ok(vec!["Taken.".to_string()])
    }

    fn do_read(&self, target: &str) -> FictionResult<Vec<String>> {
        let id = find_item(self.world, &self.player.inventory, target)
            .ok_or_else(|| FictionError::NotHere(target.to_string()))?;
        Ok(to_lines(&self.world.item(id).description).collect())
    }

    fn do_examine(&self, target: &str) -> FictionResult<Vec<String>> {
        let area = self.here()?;
        let id = find_item(self.world, &self.player.inventory, target)
            .or_else(|| find_item(self.world, &area.items, target))
            .ok_or_else(|| FictionError::NotHere(target.to_string()))?;
        Ok(to_lines(self.world.item(id).examine_text()).collect())
    }

    fn do_switch(&mut self, on: bool, target: &str) -> FictionResult<Vec<String>> {
        let state = if on { "on" } else { "off" };
        let id = find_item(self.world, &self.player.inventory, target)
            .ok_or_else(|| FictionError::NotHere(target.to_string()))?;

        let item = self.world.item_mut(id);
        if !item.is_switchable() {
            return Err(FictionError::NotSwitchable(state));
        }
        if item.on == on {
            return Err(FictionError::AlreadySwitched(state));
        }
        item.on = on;
        tracing::info!(item = %item.name, on, "item switched");

        Ok(vec![format!("The {} is now {state}.", item.name)])
    }
}

/// A running game: one world, one player, one configuration.
#[derive(Debug, Clone)]
pub struct GameSession {
    world: World,
    player: PlayerState,
    config: GameConfig,
}

impl GameSession {
    /// Start a session with the player in the world's start area.
    pub fn new(world: World) -> Self {
        let player = PlayerState::new(world.start().clone());
        Self {
            world,
            player,
            config: GameConfig::default(),
        }
    }

    /// Start a session with the player in a specific area.
    pub fn at_area(world: World, key: &str) -> FictionResult<Self> {
        let key = AreaKey::from(key);
        if world.area(&key).is_none() {
            return Err(FictionError::AreaNotFound(key.to_string()));
        }

        Ok(Self {
            world,
            player: PlayerState::new(key),
            config: GameConfig::default(),
        })
    }

    /// Replace the session configuration.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get the session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Describe the player's current area.
    pub fn look(&self) -> FictionResult<Vec<String>> {
        let area = self
            .world
            .area(&self.player.location)
            .ok_or_else(|| FictionError::AreaNotFound(self.player.location.to_string()))?;
        Ok(describe_area(&self.world, area, &self.player.inventory))
    }

    /// Process one line of player input.
    pub fn process(&mut self, input: &str) -> FictionResult<Vec<String>> {
        resolve(input, &mut self.world, &mut self.player, &self.config)
    }
}
