//! Orthogonal move directions.

use serde::{Deserialize, Serialize};

use super::grid::Cell;

/// One of the four orthogonal directions a tile (or the empty cell) can
/// move in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// Column/row offset of a single step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The reverse direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The cell one step in this direction from `cell`, if it lies within
    /// a `dim` x `dim` grid.
    pub fn neighbor(self, cell: Cell, dim: u16) -> Option<Cell> {
        let (dc, dr) = self.offset();
        let col = cell.col as i32 + dc;
        let row = cell.row as i32 + dr;
        if col < 0 || row < 0 || col >= dim as i32 || row >= dim as i32 {
            return None;
        }
        Some(Cell {
            col: col as u16,
            row: row as u16,
        })
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", s)
    }
}
