//! Board model: the logical grid of tiles and the single empty cell.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::error::GridError;

/// Identifier of a tile, equal to its canonical solved position:
/// `col + row * dim + 1`. Valid ids run from 1 to `dim * dim - 1`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct TileId(pub u16);

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Column index, 0-based from the left.
    pub col: u16,
    /// Row index, 0-based from the top.
    pub row: u16,
}

impl Cell {
    /// True iff `other` is exactly one orthogonal step away.
    pub fn is_orthogonal_neighbor(self, other: Cell) -> bool {
        let dc = (self.col as i32 - other.col as i32).abs();
        let dr = (self.row as i32 - other.row as i32).abs();
        dc + dr == 1
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The logical board: a `dim` x `dim` grid holding every tile id exactly
/// once plus a single empty cell.
///
/// Two invariants hold after every mutation:
/// 1. exactly one cell is empty;
/// 2. each tile id in `1..dim*dim` occupies exactly one cell.
///
/// Both are preserved by construction: [`Grid::swap_with_empty`] is the
/// only mutator, and a swap with the empty cell can neither duplicate a
/// tile nor create a second hole. An inverse index (tile id to cell) is
/// maintained incrementally on every swap, so [`Grid::locate`] is
/// constant time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dim: u16,
    /// Cell contents, indexed `col + row * dim`.
    cells: Vec<Option<TileId>>,
    /// Inverse index: `lookup[id - 1]` is the cell holding tile `id`.
    lookup: Vec<Cell>,
    empty: Cell,
}

impl Grid {
    /// Creates the canonical solved grid: ascending tile ids with the
    /// empty cell at the bottom-right corner.
    ///
    /// # Panics
    ///
    /// Panics if `dim < 2`; a grid that small has no legal moves.
    #[instrument]
    pub fn solved(dim: u16) -> Self {
        assert!(dim >= 2, "grid dimension must be at least 2");
        let total = dim as usize * dim as usize;
        let mut cells = Vec::with_capacity(total);
        let mut lookup = Vec::with_capacity(total - 1);
        for row in 0..dim {
            for col in 0..dim {
                let id = col + row * dim + 1;
                if id as usize == total {
                    cells.push(None);
                } else {
                    cells.push(Some(TileId(id)));
                    lookup.push(Cell { col, row });
                }
            }
        }
        Self {
            dim,
            cells,
            lookup,
            empty: Cell {
                col: dim - 1,
                row: dim - 1,
            },
        }
    }

    /// Grid dimension (tiles per side).
    pub fn dim(&self) -> u16 {
        self.dim
    }

    /// True iff `cell` lies within the grid.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col < self.dim && cell.row < self.dim
    }

    /// Contents of `cell`: a tile id, or `None` for the empty cell and
    /// out-of-bounds coordinates.
    pub fn get(&self, cell: Cell) -> Option<TileId> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.cells[self.index(cell)]
    }

    /// The cell currently holding tile `tile`.
    ///
    /// Constant time via the inverse index. Fails with
    /// [`GridError::NotFound`] only if `tile` is out of range for this
    /// grid, which signals invariant corruption upstream.
    pub fn locate(&self, tile: TileId) -> Result<Cell, GridError> {
        let total = self.dim as usize * self.dim as usize;
        if tile.0 == 0 || tile.0 as usize >= total {
            return Err(GridError::NotFound { tile });
        }
        Ok(self.lookup[tile.0 as usize - 1])
    }

    /// The unique cell currently holding no tile.
    pub fn empty_cell(&self) -> Cell {
        self.empty
    }

    /// True iff `cell` is exactly one orthogonal step from the empty
    /// cell.
    pub fn is_adjacent_to_empty(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && cell.is_orthogonal_neighbor(self.empty)
    }

    /// Moves the tile at `cell` into the empty cell and marks `cell` as
    /// the new empty cell. Returns the tile that moved.
    ///
    /// This is the only mutator on the grid; both invariants are
    /// preserved by construction.
    ///
    /// # Errors
    ///
    /// [`GridError::IllegalMove`] if `cell` is out of bounds or not
    /// adjacent to the empty cell.
    #[instrument(skip(self), fields(empty = %self.empty))]
    pub fn swap_with_empty(&mut self, cell: Cell) -> Result<TileId, GridError> {
        if !self.is_adjacent_to_empty(cell) {
            return Err(GridError::IllegalMove {
                col: cell.col,
                row: cell.row,
            });
        }
        let from = self.index(cell);
        let Some(tile) = self.cells[from].take() else {
            // Adjacent to the empty cell, so it cannot itself be empty.
            return Err(GridError::IllegalMove {
                col: cell.col,
                row: cell.row,
            });
        };
        let to = self.index(self.empty);
        self.cells[to] = Some(tile);
        self.lookup[tile.0 as usize - 1] = self.empty;
        self.empty = cell;
        Ok(tile)
    }

    /// True iff every cell holds its canonical tile id
    /// (`col + row * dim + 1`) and the empty cell sits at the
    /// bottom-right corner.
    pub fn is_solved(&self) -> bool {
        for row in 0..self.dim {
            for col in 0..self.dim {
                let cell = Cell { col, row };
                let canonical = col + row * self.dim + 1;
                match self.get(cell) {
                    Some(tile) => {
                        if tile.0 != canonical {
                            return false;
                        }
                    }
                    None => {
                        if canonical as usize != self.dim as usize * self.dim as usize {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    fn index(&self, cell: Cell) -> usize {
        cell.col as usize + cell.row as usize * self.dim as usize
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (self.dim as usize * self.dim as usize - 1).to_string().len();
        for row in 0..self.dim {
            for col in 0..self.dim {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Cell { col, row }) {
                    Some(tile) => write!(f, "{:>width$}", tile.0, width = width)?,
                    None => write!(f, "{:>width$}", ".", width = width)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts both grid invariants: one empty cell, every id once.
    fn assert_invariants(grid: &Grid) {
        let dim = grid.dim();
        let total = dim as usize * dim as usize;
        let mut seen = vec![0u32; total];
        let mut empties = 0;
        for row in 0..dim {
            for col in 0..dim {
                match grid.get(Cell { col, row }) {
                    Some(tile) => seen[tile.0 as usize] += 1,
                    None => empties += 1,
                }
            }
        }
        assert_eq!(empties, 1, "exactly one empty cell");
        for id in 1..total {
            assert_eq!(seen[id], 1, "tile {} appears exactly once", id);
        }
    }

    #[test]
    fn solved_grid_is_solved() {
        let grid = Grid::solved(4);
        assert!(grid.is_solved());
        assert_eq!(grid.empty_cell(), Cell { col: 3, row: 3 });
        assert_invariants(&grid);
    }

    #[test]
    fn locate_matches_canonical_positions() {
        let grid = Grid::solved(4);
        assert_eq!(grid.locate(TileId(1)).unwrap(), Cell { col: 0, row: 0 });
        assert_eq!(grid.locate(TileId(15)).unwrap(), Cell { col: 2, row: 3 });
        assert!(matches!(
            grid.locate(TileId(16)),
            Err(GridError::NotFound { .. })
        ));
    }

    #[test]
    fn swap_updates_inverse_index_and_empty() {
        let mut grid = Grid::solved(4);
        let moved = grid.swap_with_empty(Cell { col: 2, row: 3 }).unwrap();
        assert_eq!(moved, TileId(15));
        assert_eq!(grid.locate(TileId(15)).unwrap(), Cell { col: 3, row: 3 });
        assert_eq!(grid.empty_cell(), Cell { col: 2, row: 3 });
        assert_invariants(&grid);
    }

    #[test]
    fn non_adjacent_swap_is_rejected() {
        let mut grid = Grid::solved(4);
        let err = grid.swap_with_empty(Cell { col: 0, row: 0 }).unwrap_err();
        assert_eq!(err, GridError::IllegalMove { col: 0, row: 0 });
        assert!(grid.is_solved());
    }

    #[test]
    fn swapping_the_empty_cell_itself_is_rejected() {
        let mut grid = Grid::solved(4);
        let empty = grid.empty_cell();
        assert!(grid.swap_with_empty(empty).is_err());
        assert!(grid.is_solved());
    }
}
