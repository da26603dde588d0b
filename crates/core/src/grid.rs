//! Grid module - the n x n board and its move rules
//!
//! Tiles are stored flat in row-major order (`row * n + col`). A player move
//! is always `shift -> collapse -> shift`:
//!
//! 1. shift packs tiles against the destination edge so equal tiles touch
//! 2. collapse merges touching equal pairs, each tile at most once
//! 3. shift closes the gaps the merges left
//!
//! All direction-specific behavior comes from the [`MotionTable`].

use crate::config::{ConfigError, GridConfig};
use crate::direction::MotionTable;
use crate::display::renderer_for;
use crate::rng::{RandomSource, SimpleRng};
use crate::tile::Tile;
use crate::types::{Direction, RenderMode};

/// The game grid. Owns its tiles and its random source.
#[derive(Debug, Clone)]
pub struct Grid<R = SimpleRng> {
    size: usize,
    cells: Vec<Tile>,
    spawn_counts: Vec<usize>,
    render_mode: RenderMode,
    motions: MotionTable,
    rng: R,
}

impl<R: RandomSource> Grid<R> {
    /// Create a grid and place `config.init_blocks` random tiles on it.
    pub fn new(config: GridConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let init_blocks = config.init_blocks;
        let mut grid = Self::empty(config, rng);
        grid.make_new_blocks(init_blocks);
        tracing::debug!(
            size = grid.size,
            tiles = grid.occupied_count(),
            "grid created"
        );
        Ok(grid)
    }

    /// Create a grid with exactly the given row-major values; nothing is spawned.
    ///
    /// `values` must hold `size * size` entries, each 0 or a power of two >= 2.
    pub fn from_values(config: GridConfig, values: &[u32], rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let expected = config.cell_count();
        if values.len() != expected {
            return Err(ConfigError::CellCount {
                expected,
                actual: values.len(),
            });
        }
        let mut grid = Self::empty(config, rng);
        for (index, (&value, cell)) in values.iter().zip(grid.cells.iter_mut()).enumerate() {
            *cell = Tile::from_value(value).ok_or(ConfigError::InvalidTile { index, value })?;
        }
        Ok(grid)
    }

    fn empty(config: GridConfig, rng: R) -> Self {
        Self {
            size: config.size,
            cells: vec![Tile::EMPTY; config.cell_count()],
            spawn_counts: config.spawn_counts,
            render_mode: config.render_mode,
            motions: MotionTable::new(config.size),
            rng,
        }
    }

    /// Side length n
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Row-major tiles
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// Row-major tile values (0 for empty)
    pub fn values(&self) -> Vec<u32> {
        self.cells.iter().map(Tile::value).collect()
    }

    /// Tile at (row, col), `None` if out of bounds
    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    pub fn spawn_counts(&self) -> &[usize] {
        &self.spawn_counts
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|t| t.is_empty()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// Largest tile value on the grid (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().map(Tile::value).max().unwrap_or(0)
    }

    /// Slide every tile as far as it goes in `direction` without merging.
    pub fn shift(&mut self, direction: Direction) {
        let motion = *self.motions.get(direction);
        for i in motion.traversal() {
            if self.cells[i].is_empty() {
                continue;
            }
            let mut pos = i;
            while let Some(next) = motion.neighbor(pos) {
                if !self.cells[next].is_empty() {
                    break;
                }
                self.cells[next] = self.cells[pos];
                self.cells[pos].clear();
                pos = next;
            }
        }
    }

    /// Merge each tile into its neighbor in `direction` when both hold the same value.
    ///
    /// A single pass: a tile that just doubled is never a merge source again in
    /// the same call, so `2 2 4` becomes `4 _ 4`, not `8`.
    pub fn collapse(&mut self, direction: Direction) {
        let motion = *self.motions.get(direction);
        for i in motion.traversal() {
            let Some(next) = motion.neighbor(i) else {
                continue;
            };
            if self.cells[i].can_merge_with(&self.cells[next]) {
                self.cells[next].double();
                self.cells[i].clear();
            }
        }
    }

    /// One full player move: shift, collapse, shift.
    pub fn shift_and_collapse(&mut self, direction: Direction) {
        self.shift(direction);
        self.collapse(direction);
        self.shift(direction);
    }

    /// Spawn up to `count` tiles on random empty cells.
    ///
    /// Stops quietly once the grid is full. Returns how many tiles were placed.
    pub fn make_new_blocks(&mut self, count: usize) -> usize {
        let mut placed = 0;
        for _ in 0..count {
            let empty: Vec<usize> = self
                .cells
                .iter()
                .enumerate()
                .filter(|(_, t)| t.is_empty())
                .map(|(i, _)| i)
                .collect();
            let Some(&pos) = self.rng.choose(&empty) else {
                break;
            };
            debug_assert!(self.cells[pos].is_empty(), "spawn onto occupied cell {pos}");
            self.cells[pos].spawn_value(&mut self.rng);
            tracing::trace!(pos, value = self.cells[pos].value(), "tile spawned");
            placed += 1;
        }
        placed
    }

    /// Pick this turn's spawn count from the distribution.
    pub fn roll_spawn_count(&mut self) -> usize {
        self.rng.choose(&self.spawn_counts).copied().unwrap_or(0)
    }

    /// True iff every cell is occupied and no two orthogonal neighbors can merge.
    ///
    /// Neighbors merge when equal, except at [`Tile::MAX_VALUE`].
    pub fn is_game_over(&self) -> bool {
        for (i, tile) in self.cells.iter().enumerate() {
            if tile.is_empty() {
                return false;
            }
            for dir in Direction::ALL {
                if let Some(n) = self.motions.get(dir).neighbor(i) {
                    if tile.can_merge_with(&self.cells[n]) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Sum of all tile values
    pub fn get_score(&self) -> u64 {
        self.cells.iter().map(|t| t.value() as u64).sum()
    }

    /// The grid as a bordered text block in the current render mode.
    pub fn get_display(&self) -> String {
        renderer_for(self.render_mode).render(&self.cells, self.size)
    }
}
