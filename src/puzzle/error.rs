//! Error types for the puzzle core.

use derive_more::{Display, Error};

use super::grid::TileId;

/// Errors raised by grid queries and mutations.
///
/// Neither variant is reachable through the normal play path: the move
/// resolver pre-checks adjacency before permitting any displacement, and
/// the inverse index is updated on every swap. A raised `GridError`
/// therefore signals a desynchronization bug. Tests treat it as fatal;
/// the game engine logs it and leaves the grid untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// `swap_with_empty` was called on a cell that is not orthogonally
    /// adjacent to the empty cell.
    #[display("illegal move: cell ({col}, {row}) is not adjacent to the empty cell")]
    IllegalMove {
        /// Column of the offending cell.
        col: u16,
        /// Row of the offending cell.
        row: u16,
    },

    /// A queried tile id is absent from the grid.
    #[display("tile {tile} is not on the grid")]
    NotFound {
        /// The missing tile id.
        tile: TileId,
    },
}
