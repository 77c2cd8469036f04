//! Application state and logic.

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::puzzle::Game;

/// Main application state.
pub struct App {
    game: Game,
    status_message: String,
    won: bool,
}

impl App {
    /// Creates a new application with a solved, unscrambled board.
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            status_message: "Scrambling...".to_string(),
            won: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets mutable access to the game for pointer event forwarding.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the win detector has fired for the current board.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Scrambles the board at startup.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let steps = self.game.scramble(rng);
        debug!(steps, "initial scramble");
        self.won = false;
        self.status_message = format!(
            "Scrambled with {} permutations. Drag a tile next to the gap; 'r' restarts, 'q' quits.",
            steps
        );
    }

    /// Restarts with a freshly scrambled board.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let steps = self.game.restart(rng);
        self.won = false;
        self.status_message = format!(
            "New puzzle: {} permutations. Drag a tile next to the gap; 'r' restarts, 'q' quits.",
            steps
        );
    }

    /// Polls the win detector; called once per frame.
    pub fn refresh(&mut self) {
        let won = self.game.is_won();
        if won && !self.won {
            info!(moves = self.game.moves(), "puzzle solved");
            self.status_message = format!(
                "Winner! Solved in {} moves. Press 'r' for a new puzzle or 'q' to quit.",
                self.game.moves()
            );
        }
        self.won = won;
    }
}
