//! GameSession: one game from first spawn to game over.

use crate::core::{ConfigError, Grid, GridConfig, RandomSource, SimpleRng};
use crate::types::Direction;

/// What a single turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub direction: Direction,
    /// Whether the move itself (before spawning) changed any tile
    pub moved: bool,
    /// Tiles actually placed after the move
    pub spawned: usize,
    pub score: u64,
    pub game_over: bool,
}

/// A running game. Owns the grid for its whole lifetime.
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng> {
    grid: Grid<R>,
    turns: u32,
}

impl GameSession<SimpleRng> {
    /// Start a game with the default LCG seeded from `seed`.
    pub fn new(config: GridConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn with_rng(config: GridConfig, rng: R) -> Result<Self, ConfigError> {
        let grid = Grid::new(config, rng)?;
        tracing::info!(
            size = grid.size(),
            render = grid.render_mode().as_str(),
            "session started"
        );
        Ok(Self::from_grid(grid))
    }

    /// Continue from an already built grid.
    pub fn from_grid(grid: Grid<R>) -> Self {
        Self { grid, turns: 0 }
    }

    /// Play one turn: move in `direction`, then spawn.
    ///
    /// New tiles are spawned even when the move changed nothing.
    pub fn play_turn(&mut self, direction: Direction) -> TurnReport {
        let before = self.grid.values();
        self.grid.shift_and_collapse(direction);
        let moved = self.grid.values() != before;

        let count = self.grid.roll_spawn_count();
        let spawned = self.grid.make_new_blocks(count);
        self.turns += 1;

        let report = TurnReport {
            direction,
            moved,
            spawned,
            score: self.grid.get_score(),
            game_over: self.grid.is_game_over(),
        };
        tracing::debug!(
            turn = self.turns,
            direction = direction.as_str(),
            moved,
            spawned,
            score = report.score,
            "turn played"
        );
        if report.game_over {
            tracing::info!(turns = self.turns, score = report.score, "game over");
        }
        report
    }

    pub fn is_over(&self) -> bool {
        self.grid.is_game_over()
    }

    pub fn score(&self) -> u64 {
        self.grid.get_score()
    }

    pub fn display(&self) -> String {
        self.grid.get_display()
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn grid(&self) -> &Grid<R> {
        &self.grid
    }
}
