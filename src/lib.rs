//! Sliding Tiles library - a mouse-driven sliding-tile puzzle.
//!
//! The logical engine is pure and synchronous: a [`puzzle::Grid`] holds
//! the board (every tile id exactly once plus a single empty cell), a
//! random-walk shuffler produces solvable start states, and a
//! [`puzzle::MoveResolver`] turns pointer gestures into single legal
//! moves. The terminal UI in [`tui`] is a thin adapter that captures
//! mouse events and draws the derived tile placements each frame.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sliding_tiles::{Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default());
//! let mut rng = StdRng::seed_from_u64(42);
//! let steps = game.scramble(&mut rng);
//! assert!(steps < 200);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Public module declarations
pub mod config;
pub mod puzzle;
pub mod tui;

// Crate-level exports - configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - puzzle core
pub use puzzle::{
    Cell, Direction, DragPhase, DragState, Game, Grid, GridError, MoveResolver, Point, TileId,
    TilePlacement,
};
