//! Gesture tests: pointer events through the game engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sliding_tiles::{Cell, Game, GameConfig, Point, TileId};

/// A fresh engine over the default config (4x4, 500px canvas, 125px
/// tiles) with the grid left solved so positions are deterministic.
fn game() -> Game {
    Game::new(GameConfig::default())
}

#[test]
fn test_press_and_release_in_place_changes_nothing() {
    // Pointer-down at the center of tile 1 (cell (0, 0), pixel center
    // (62.5, 62.5)) enters Dragging; releasing without movement must
    // leave the grid unchanged and return the resolver to Idle.
    let mut game = game();
    let before = game.grid().clone();

    let grabbed = game.pointer_down(Point { x: 62.5, y: 62.5 });
    assert_eq!(grabbed, Some(TileId(1)));
    assert!(game.is_dragging());

    assert_eq!(game.pointer_up(), None);
    assert!(!game.is_dragging());
    assert_eq!(game.grid(), &before);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_full_drag_commits_one_move() {
    // Tile 15 rests at (2, 3), center (312.5, 437.5); the empty cell is
    // its right neighbor.
    let mut game = game();
    game.pointer_down(Point { x: 312.5, y: 437.5 });
    game.pointer_move(Point { x: 437.5, y: 437.5 });
    let moved = game.pointer_up();

    assert_eq!(moved, Some(TileId(15)));
    assert_eq!(
        game.grid().locate(TileId(15)).unwrap(),
        Cell { col: 3, row: 3 }
    );
    assert_eq!(game.grid().empty_cell(), Cell { col: 2, row: 3 });
    assert_eq!(game.moves(), 1);
    assert!(!game.is_won());
}

#[test]
fn test_commit_is_read_from_final_position_not_distance() {
    // Dragging just past the cell boundary (70px of a 125px tile) is
    // enough: the destination comes from where the tile ended up, not
    // from how far the pointer traveled.
    let mut game = game();
    game.pointer_down(Point { x: 312.5, y: 437.5 });
    game.pointer_move(Point { x: 382.5, y: 437.5 });
    assert_eq!(game.pointer_up(), Some(TileId(15)));
    assert_eq!(game.grid().empty_cell(), Cell { col: 2, row: 3 });
}

#[test]
fn test_short_drag_snaps_back() {
    // 30px of travel keeps the tile center inside its origin cell, so
    // the gesture is abandoned on release.
    let mut game = game();
    let before = game.grid().clone();
    game.pointer_down(Point { x: 312.5, y: 437.5 });
    game.pointer_move(Point { x: 342.5, y: 437.5 });
    assert_eq!(game.pointer_up(), None);
    assert_eq!(game.grid(), &before);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_drag_away_from_empty_is_pinned() {
    // Tile 15 can only move right (the empty cell is at (3, 3)). A
    // leftward gesture must not displace it, and release must not
    // change the board.
    let mut game = game();
    let before = game.grid().clone();
    game.pointer_down(Point { x: 312.5, y: 437.5 });
    game.pointer_move(Point { x: 100.0, y: 437.5 });
    assert_eq!(game.pointer_up(), None);
    assert_eq!(game.grid(), &before);
}

#[test]
fn test_vertical_drag_commits() {
    // Tile 12 rests at (3, 2), directly above the empty cell.
    let mut game = game();
    game.pointer_down(Point { x: 437.5, y: 312.5 });
    game.pointer_move(Point { x: 437.5, y: 437.5 });
    assert_eq!(game.pointer_up(), Some(TileId(12)));
    assert_eq!(
        game.grid().locate(TileId(12)).unwrap(),
        Cell { col: 3, row: 3 }
    );
    assert_eq!(game.grid().empty_cell(), Cell { col: 3, row: 2 });
}

#[test]
fn test_pointer_down_on_empty_cell_is_a_noop() {
    let mut game = game();
    assert_eq!(game.pointer_down(Point { x: 437.5, y: 437.5 }), None);
    assert!(!game.is_dragging());
}

#[test]
fn test_pointer_down_off_canvas_is_a_noop() {
    let mut game = game();
    assert_eq!(game.pointer_down(Point { x: 600.0, y: 50.0 }), None);
    assert_eq!(game.pointer_down(Point { x: -10.0, y: 50.0 }), None);
    assert!(!game.is_dragging());
}

#[test]
fn test_pointer_up_while_idle_is_a_noop() {
    let mut game = game();
    assert_eq!(game.pointer_up(), None);
    assert_eq!(game.moves(), 0);
}

#[test]
fn test_drag_there_and_back_restores_the_win() {
    // Slide tile 15 into the gap, then slide it home again: the board
    // must be solved once more and both moves counted.
    let mut game = game();
    game.pointer_down(Point { x: 312.5, y: 437.5 });
    game.pointer_move(Point { x: 437.5, y: 437.5 });
    game.pointer_up();
    assert!(!game.is_won());

    game.pointer_down(Point { x: 437.5, y: 437.5 });
    game.pointer_move(Point { x: 312.5, y: 437.5 });
    assert_eq!(game.pointer_up(), Some(TileId(15)));
    assert!(game.is_won());
    assert_eq!(game.moves(), 2);
}

#[test]
fn test_scramble_then_restart_resets_move_counter() {
    let mut game = game();
    let mut rng = StdRng::seed_from_u64(9);
    game.scramble(&mut rng);

    // Commit one move if the scramble left one available; either way
    // restart must zero the counter.
    game.pointer_down(Point { x: 312.5, y: 437.5 });
    game.pointer_move(Point { x: 437.5, y: 437.5 });
    game.pointer_up();

    game.restart(&mut rng);
    assert_eq!(game.moves(), 0);
    assert!(!game.is_dragging());
}

#[test]
fn test_placements_track_an_active_drag() {
    let mut game = game();
    game.pointer_down(Point { x: 312.5, y: 437.5 });
    game.pointer_move(Point { x: 352.5, y: 437.5 });

    let placements = game.placements();
    assert_eq!(placements.len(), 15);
    let dragged = placements.last().unwrap();
    assert_eq!(dragged.tile, TileId(15));
    assert!(dragged.selected);
    assert_eq!(dragged.center.x, 352.5);
    assert_eq!(dragged.center.y, 437.5);
    assert_eq!(placements.iter().filter(|p| p.selected).count(), 1);
}
