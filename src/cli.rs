//! Command-line interface for sliding_tiles.

use clap::{Parser, Subcommand};

/// Sliding Tiles - mouse-driven sliding-tile puzzle for the terminal
#[derive(Parser, Debug)]
#[command(name = "sliding_tiles")]
#[command(about = "Mouse-driven sliding-tile puzzle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the puzzle in the terminal (drag tiles with the mouse)
    Play {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for the scramble RNG (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Scramble a board and print it, without starting the UI
    Scramble {
        /// Exact number of random-walk steps (drawn from the configured
        /// bound if omitted)
        #[arg(long)]
        steps: Option<u32>,

        /// Seed for the scramble RNG (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
