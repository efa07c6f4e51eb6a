//! Command-line shell for the grue text adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "grue",
    about = "grue: explore the land around the white house",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world interactively, one command per line
    Play {
        /// World description in JSON (default: the built-in world)
        #[arg(short, long)]
        world: Option<PathBuf>,

        /// Key of the area to start in (default: the world's start area)
        #[arg(short, long)]
        start: Option<String>,

        /// Suggest a known word after a likely typo
        #[arg(long)]
        suggest: bool,

        /// Prompt shown before each command on a terminal
        #[arg(long, default_value = "> ")]
        prompt: String,
    },

    /// Validate a world and print a summary
    Check {
        /// World description in JSON (default: the built-in world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// List the areas of a world with their exits
    List {
        /// World description in JSON (default: the built-in world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Export the built-in world as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Play {
            world,
            start,
            suggest,
            prompt,
        } => commands::play::run(world.as_deref(), start.as_deref(), suggest, &prompt),
        Commands::Check { world } => commands::check::run(world.as_deref()),
        Commands::List { world } => commands::list::run(world.as_deref()),
        Commands::Export { output } => commands::export::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
