//! Derived render view: logical grid positions mapped to pixel space.
//!
//! The grid is the single source of truth; the placement list is
//! recomputed from grid + drag state every frame and never stored. The
//! board model itself holds no pixel coordinates.

use serde::{Deserialize, Serialize};

use super::drag::{MoveResolver, Point};
use super::grid::{Cell, Grid, TileId};

/// Render-ready description of one tile for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TilePlacement {
    /// The tile.
    pub tile: TileId,
    /// Continuous pixel center. Grid-aligned except for a tile that is
    /// mid-drag.
    pub center: Point,
    /// True for the tile currently being dragged.
    pub selected: bool,
}

/// Pixel center of `cell`.
pub fn cell_center(cell: Cell, tile_width: f32) -> Point {
    Point {
        x: cell.col as f32 * tile_width + tile_width / 2.0,
        y: cell.row as f32 * tile_width + tile_width / 2.0,
    }
}

/// The cell containing pixel point `point`, if it lies on the canvas.
pub fn cell_at(point: Point, tile_width: f32, dim: u16) -> Option<Cell> {
    let col = (point.x / tile_width).floor();
    let row = (point.y / tile_width).floor();
    if col < 0.0 || row < 0.0 || col >= dim as f32 || row >= dim as f32 {
        return None;
    }
    Some(Cell {
        col: col as u16,
        row: row as u16,
    })
}

/// Computes the placement of every tile for the current frame.
///
/// Tiles at rest sit on their cell centers; the dragged tile (if any)
/// sits at its continuous drag position and is listed last so it renders
/// on top.
pub fn placements(grid: &Grid, resolver: &MoveResolver, tile_width: f32) -> Vec<TilePlacement> {
    let total = grid.dim() as usize * grid.dim() as usize;
    let drag = resolver.dragging();
    let mut out = Vec::with_capacity(total - 1);
    for id in 1..total as u16 {
        let tile = TileId(id);
        if drag.is_some_and(|d| d.tile() == tile) {
            continue;
        }
        let Ok(cell) = grid.locate(tile) else {
            continue;
        };
        out.push(TilePlacement {
            tile,
            center: cell_center(cell, tile_width),
            selected: false,
        });
    }
    if let Some(drag) = drag {
        out.push(TilePlacement {
            tile: drag.tile(),
            center: drag.position(),
            selected: true,
        });
    }
    out
}
