//! The puzzle core: board model, shuffler, move resolver, win detection.

mod direction;
mod drag;
mod error;
mod grid;
mod placement;
mod rules;
pub mod shuffle;

pub use direction::Direction;
pub use drag::{DragPhase, DragState, MoveResolver, Point};
pub use error::GridError;
pub use grid::{Cell, Grid, TileId};
pub use placement::{cell_at, cell_center, placements, TilePlacement};
pub use rules::Game;
pub use shuffle::{scramble, shuffle};
