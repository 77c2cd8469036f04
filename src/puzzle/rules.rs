//! Game engine: a single puzzle session.

use derive_getters::Getters;
use rand::Rng;
use tracing::{error, info, instrument};

use crate::config::GameConfig;

use super::drag::{MoveResolver, Point};
use super::grid::{Grid, TileId};
use super::placement::{self, TilePlacement};
use super::shuffle;

/// A puzzle session: the grid, the drag resolver, and the configuration,
/// owned together so no game state lives in ambient globals.
///
/// All mutation funnels through the pointer handlers and the scramble;
/// both only ever touch the grid through [`Grid::swap_with_empty`].
#[derive(Debug, Getters)]
pub struct Game {
    /// Startup constants.
    config: GameConfig,
    /// The logical board.
    grid: Grid,
    #[getter(skip)]
    resolver: MoveResolver,
    #[getter(skip)]
    moves: u32,
}

impl Game {
    /// Creates a session with a solved grid. Call [`Game::scramble`]
    /// before handing it to a player.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        let grid = Grid::solved(*config.grid_dim());
        Self {
            config,
            grid,
            resolver: MoveResolver::new(),
            moves: 0,
        }
    }

    /// Scrambles the grid with a random walk whose length is drawn from
    /// `[0, shuffle_bound)`. Returns the drawn step count.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        self.moves = 0;
        shuffle::scramble(&mut self.grid, *self.config.shuffle_bound(), rng)
    }

    /// Discards the current grid and starts a freshly scrambled one.
    /// Returns the drawn step count.
    #[instrument(skip(self, rng))]
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        info!("restarting session");
        self.grid = Grid::solved(*self.config.grid_dim());
        self.resolver = MoveResolver::new();
        self.scramble(rng)
    }

    /// Forwards a pointer-down event to the resolver. Returns the
    /// grabbed tile, if any.
    pub fn pointer_down(&mut self, pointer: Point) -> Option<TileId> {
        self.resolver
            .pointer_down(&self.grid, self.config.tile_width(), pointer)
    }

    /// Forwards a pointer-move event to the resolver.
    pub fn pointer_move(&mut self, pointer: Point) {
        self.resolver
            .pointer_move(&self.grid, self.config.tile_width(), pointer);
    }

    /// Forwards a pointer-up event to the resolver and commits the move,
    /// if any. Returns the tile that moved.
    ///
    /// A resolver failure here means the drag logic and the grid fell
    /// out of sync. That is never the player's fault, so it is logged
    /// and swallowed; the grid stays untouched and the tile snaps back.
    pub fn pointer_up(&mut self) -> Option<TileId> {
        match self
            .resolver
            .pointer_up(&mut self.grid, self.config.tile_width())
        {
            Ok(Some(tile)) => {
                self.moves += 1;
                Some(tile)
            }
            Ok(None) => None,
            Err(err) => {
                error!(%err, "move resolution failed; board left unchanged");
                None
            }
        }
    }

    /// Per-frame render view of every tile.
    pub fn placements(&self) -> Vec<TilePlacement> {
        placement::placements(&self.grid, &self.resolver, self.config.tile_width())
    }

    /// Win detector: true iff the grid is back in ascending order with
    /// the empty cell at the bottom-right. Pure; intended to be polled
    /// once per frame.
    pub fn is_won(&self) -> bool {
        self.grid.is_solved()
    }

    /// Number of committed player moves since the last scramble.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// True iff a drag gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        self.resolver.dragging().is_some()
    }
}
