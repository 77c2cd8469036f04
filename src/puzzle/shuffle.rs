//! Random-walk scrambling.
//!
//! A start state is produced by walking the empty cell through a bounded
//! number of uniformly random legal moves from the solved position. Every
//! step goes through [`Grid::swap_with_empty`], so any scrambled grid is
//! reachable from solved by exactly the recorded walk; solvability is an
//! invariant of the algorithm, not a property that needs checking.

use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

use super::direction::Direction;
use super::grid::{Cell, Grid};

/// Performs `steps` uniformly random legal moves on `grid` and returns
/// the cells that were moved, in order.
///
/// Each step collects the empty cell's in-bounds orthogonal neighbors
/// (two in a corner, three on an edge, four in the interior) and swaps a
/// uniformly chosen one into the empty cell. The selection does not
/// exclude the previously moved tile, so a walk may undo its own last
/// step; the returned walk records what actually happened.
///
/// `steps == 0` leaves the grid untouched.
#[instrument(skip(grid, rng), fields(dim = grid.dim()))]
pub fn shuffle<R: Rng + ?Sized>(grid: &mut Grid, steps: u32, rng: &mut R) -> Vec<Cell> {
    let mut walk = Vec::with_capacity(steps as usize);
    for _ in 0..steps {
        let empty = grid.empty_cell();
        let candidates: Vec<Cell> = Direction::iter()
            .filter_map(|dir| dir.neighbor(empty, grid.dim()))
            .collect();
        let Some(&target) = candidates.choose(rng) else {
            break;
        };
        // Always legal: `target` is orthogonally adjacent to the empty
        // cell by construction.
        if grid.swap_with_empty(target).is_err() {
            break;
        }
        walk.push(target);
    }
    walk
}

/// Scrambles `grid` with a step count drawn uniformly from `[0, bound)`
/// and returns the drawn count.
///
/// `bound == 0` (and a drawn count of 0) yields an already-solved,
/// trivial puzzle; that is valid, not an error.
#[instrument(skip(grid, rng))]
pub fn scramble<R: Rng + ?Sized>(grid: &mut Grid, bound: u32, rng: &mut R) -> u32 {
    let steps = if bound == 0 {
        0
    } else {
        rng.gen_range(0..bound)
    };
    info!(steps, "scrambling with random walk");
    shuffle(grid, steps, rng);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_steps_leaves_grid_solved() {
        let mut grid = Grid::solved(4);
        let mut rng = StdRng::seed_from_u64(7);
        let walk = shuffle(&mut grid, 0, &mut rng);
        assert!(walk.is_empty());
        assert!(grid.is_solved());
    }

    #[test]
    fn walk_length_matches_step_count() {
        let mut grid = Grid::solved(4);
        let mut rng = StdRng::seed_from_u64(7);
        let walk = shuffle(&mut grid, 50, &mut rng);
        assert_eq!(walk.len(), 50);
    }

    #[test]
    fn scramble_respects_bound() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let mut grid = Grid::solved(4);
            let steps = scramble(&mut grid, 200, &mut rng);
            assert!(steps < 200);
        }
    }
}
