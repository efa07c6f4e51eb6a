//! Interactive play: read one command per line, print the turn's lines.

use std::io::{BufRead, IsTerminal};
use std::path::Path;

use colored::Colorize;
use grue_fiction::{GameConfig, GameSession};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Run a game until input ends.
pub fn run(
    world: Option<&Path>,
    start: Option<&str>,
    suggest: bool,
    prompt: &str,
) -> Result<(), String> {
    let world = super::load_world(world)?;
    let session = match start {
        Some(key) => GameSession::at_area(world, key).map_err(|e| e.to_string())?,
        None => GameSession::new(world),
    };
    let mut session = session.with_config(GameConfig::default().with_suggestions(suggest));

    let opening = session.look().map_err(|e| e.to_string())?;
    print_lines(&session, &opening);

    if std::io::stdin().is_terminal() {
        interactive(&mut session, prompt)
    } else {
        piped(&mut session)
    }
}

fn interactive(session: &mut GameSession, prompt: &str) -> Result<(), String> {
    let mut editor = DefaultEditor::new().map_err(|e| format!("cannot start line editor: {e}"))?;
    loop {
        match editor.readline(prompt) {
            Ok(line) => {
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    tracing::debug!(error = %e, "history entry not recorded");
                }
                turn(session, &line)?;
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(e) => return Err(format!("cannot read input: {e}")),
        }
    }
}

fn piped(session: &mut GameSession) -> Result<(), String> {
    for line in std::io::stdin().lock().lines() {
        let line = line.map_err(|e| format!("cannot read input: {e}"))?;
        turn(session, &line)?;
    }
    Ok(())
}

fn turn(session: &mut GameSession, line: &str) -> Result<(), String> {
    let lines = session.process(line).map_err(|e| e.to_string())?;
    print_lines(session, &lines);
    Ok(())
}

// Area names stand out from the rest of the text.
fn print_lines(session: &GameSession, lines: &[String]) {
    let here = session
        .world()
        .area(&session.player().location)
        .map(|area| area.name.as_str());
    for line in lines {
        if Some(line.as_str()) == here {
            println!("{}", line.bold());
        } else {
            println!("{line}");
        }
    }
}
