//! Sliding Tiles - Unified CLI
//!
//! Mouse-driven sliding-tile puzzle with a pure, invariant-checked core.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sliding_tiles::config::GameConfig;
use sliding_tiles::puzzle::{Grid, scramble, shuffle};
use sliding_tiles::tui;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, seed } => {
            let config = load_config(config)?;
            tui::run(config, seed)
        }
        Command::Scramble {
            steps,
            seed,
            config,
        } => run_scramble(steps, seed, config),
    }
}

/// Loads the configuration file, falling back to defaults.
fn load_config(path: Option<std::path::PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => Ok(GameConfig::from_file(path)?),
        None => Ok(GameConfig::default()),
    }
}

/// Scrambles a fresh board and prints it to stdout.
fn run_scramble(
    steps: Option<u32>,
    seed: Option<u64>,
    config: Option<std::path::PathBuf>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config(config)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut grid = Grid::solved(*config.grid_dim());
    let steps = match steps {
        Some(steps) => {
            shuffle(&mut grid, steps, &mut rng);
            steps
        }
        None => scramble(&mut grid, *config.shuffle_bound(), &mut rng),
    };

    info!(steps, solved = grid.is_solved(), "board scrambled");
    println!("{}", grid);

    Ok(())
}
