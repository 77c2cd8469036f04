//! Drag-tracking move resolution.
//!
//! A pointer gesture (down, move*, up) is translated into at most one
//! legal board move. The resolver is an explicit two-state machine:
//! [`DragPhase::Idle`] until a pointer-down lands on a tile, then
//! [`DragPhase::Dragging`] until the pointer is released. While dragging,
//! the tile's rendered position follows the pointer along the dominant
//! gesture axis, but only toward the empty cell and never further than
//! one tile width from where it started; on release the destination cell
//! is read off the tile's final position and committed through
//! [`Grid::swap_with_empty`].

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::direction::Direction;
use super::error::GridError;
use super::grid::{Cell, Grid, TileId};
use super::placement::{cell_at, cell_center};

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, 0 at the left edge.
    pub x: f32,
    /// Vertical coordinate, 0 at the top edge.
    pub y: f32,
}

/// Transient gesture state, created on pointer-down and discarded on
/// pointer-up. At most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    tile: TileId,
    anchor_pointer: Point,
    anchor_tile: Point,
    position: Point,
}

impl DragState {
    /// The tile being dragged.
    pub fn tile(&self) -> TileId {
        self.tile
    }

    /// The tile's current rendered center.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// The resolver's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A tile is being dragged.
    Dragging(DragState),
}

/// Translates pointer gestures into grid moves.
#[derive(Debug, Clone, Default)]
pub struct MoveResolver {
    phase: DragPhase,
}

impl MoveResolver {
    /// Creates an idle resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// The active drag, if a gesture is in progress.
    pub fn dragging(&self) -> Option<&DragState> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging(drag) => Some(drag),
        }
    }

    /// Handles a pointer-down event.
    ///
    /// Enters [`DragPhase::Dragging`] and returns the grabbed tile if the
    /// pointer falls inside the bounding box of a non-empty tile at rest
    /// (at rest every tile occupies exactly its cell's box). A press over
    /// the empty cell, outside the canvas, or during an active gesture is
    /// a no-op.
    #[instrument(skip(self, grid))]
    pub fn pointer_down(&mut self, grid: &Grid, tile_width: f32, pointer: Point) -> Option<TileId> {
        if matches!(self.phase, DragPhase::Dragging(_)) {
            return None;
        }
        let cell = cell_at(pointer, tile_width, grid.dim())?;
        let tile = grid.get(cell)?;
        let center = cell_center(cell, tile_width);
        debug!(%tile, %cell, "drag started");
        self.phase = DragPhase::Dragging(DragState {
            tile,
            anchor_pointer: pointer,
            anchor_tile: center,
            position: center,
        });
        Some(tile)
    }

    /// Handles a pointer-move event while dragging.
    ///
    /// The gesture delta is projected onto its dominant axis (ties go to
    /// horizontal); the non-dominant coordinate is left untouched this
    /// frame. The tile follows the pointer along that axis only if the
    /// neighboring cell in the move direction currently holds the empty
    /// cell (a query, never a mutation), and its travel is clamped to one
    /// tile width from the anchored position and to the canvas interior.
    pub fn pointer_move(&mut self, grid: &Grid, tile_width: f32, pointer: Point) {
        let DragPhase::Dragging(drag) = &mut self.phase else {
            return;
        };
        let Some(origin) = cell_at(drag.anchor_tile, tile_width, grid.dim()) else {
            return;
        };
        let canvas = tile_width * grid.dim() as f32;
        let dx = pointer.x - drag.anchor_pointer.x;
        let dy = pointer.y - drag.anchor_pointer.y;
        if dx.abs() >= dy.abs() {
            if dx == 0.0 {
                return;
            }
            let dir = if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            };
            if !empty_lies(grid, origin, dir) {
                return;
            }
            let lo = (drag.anchor_tile.x - tile_width).max(tile_width / 2.0);
            let hi = (drag.anchor_tile.x + tile_width).min(canvas - tile_width / 2.0);
            drag.position.x = (drag.anchor_tile.x + dx).clamp(lo, hi);
        } else {
            let dir = if dy > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            };
            if !empty_lies(grid, origin, dir) {
                return;
            }
            let lo = (drag.anchor_tile.y - tile_width).max(tile_width / 2.0);
            let hi = (drag.anchor_tile.y + tile_width).min(canvas - tile_width / 2.0);
            drag.position.y = (drag.anchor_tile.y + dy).clamp(lo, hi);
        }
    }

    /// Handles a pointer-up event, returning to [`DragPhase::Idle`].
    ///
    /// The destination cell is computed purely from the tile's final
    /// rendered position (per-axis floor division by the tile width),
    /// never from distance traveled. Releasing over the origin cell
    /// abandons the gesture; otherwise the move is committed through the
    /// grid's single mutator. Since travel is clamped to one legal step,
    /// any other destination signals a resolver/grid desynchronization
    /// and is surfaced as an error with the grid left untouched.
    #[instrument(skip(self, grid))]
    pub fn pointer_up(&mut self, grid: &mut Grid, tile_width: f32) -> Result<Option<TileId>, GridError> {
        let DragPhase::Dragging(drag) = std::mem::take(&mut self.phase) else {
            return Ok(None);
        };
        let dim = grid.dim();
        let Some(origin) = cell_at(drag.anchor_tile, tile_width, dim) else {
            return Ok(None);
        };
        let Some(dest) = cell_at(drag.position, tile_width, dim) else {
            // Travel is clamped to the canvas interior; landing outside
            // means the clamp and the grid disagree.
            return Err(GridError::IllegalMove { col: dim, row: dim });
        };
        if dest == origin {
            debug!(tile = %drag.tile, "drag abandoned on origin cell");
            return Ok(None);
        }
        if dest != grid.empty_cell() {
            return Err(GridError::IllegalMove {
                col: dest.col,
                row: dest.row,
            });
        }
        let tile = grid.swap_with_empty(origin)?;
        debug!(%tile, %dest, "move committed");
        Ok(Some(tile))
    }
}

/// True iff the empty cell sits one step from `origin` in direction
/// `dir`.
fn empty_lies(grid: &Grid, origin: Cell, dir: Direction) -> bool {
    dir.neighbor(origin, grid.dim())
        .is_some_and(|cell| cell == grid.empty_cell())
}
