//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid simulation: tiles, directional shifting and
//! merging, random spawning, and the game-over check. It has **zero
//! dependencies** on terminals or input handling, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule can be checked headlessly
//! - **Portable**: Rendering is a string producer, the caller decides where it goes
//!
//! # Module Structure
//!
//! - [`tile`]: A single cell's content (empty or a power of two)
//! - [`grid`]: The n x n board with shift, collapse, spawn and game-over logic
//! - [`direction`]: Per-direction step, traversal order and bound check
//! - [`display`]: Plain and ANSI-colored text renderers
//! - [`rng`]: Injectable, seedable randomness
//! - [`config`]: Grid settings and their validation
//!
//! # Game Rules
//!
//! - **Move**: shift, then merge equal neighbors once each, then shift again
//! - **Spawn**: after every move, 1 or 2 tiles (from the spawn-count distribution)
//!   appear on random empty cells, each a 2 or a 4 with equal odds
//! - **Game over**: the grid is full and no two orthogonal neighbors are equal
//! - **Score**: sum of all tile values
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Grid, GridConfig, SimpleRng};
//! use tui_2048_types::{Direction, RenderMode};
//!
//! let config = GridConfig::new(4, 0, vec![1], RenderMode::Plain).unwrap();
//! let mut grid = Grid::from_values(
//!     config,
//!     &[2, 2, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
//!     SimpleRng::new(1),
//! )
//! .unwrap();
//!
//! grid.shift_and_collapse(Direction::Left);
//! assert_eq!(&grid.values()[..4], &[4, 4, 0, 0]);
//! assert_eq!(grid.get_score(), 8);
//! assert!(!grid.is_game_over());
//! ```

pub mod config;
pub mod direction;
pub mod display;
pub mod grid;
pub mod rng;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GridConfig};
pub use direction::{Motion, MotionTable};
pub use display::{renderer_for, ColorRenderer, GridRenderer, PlainRenderer};
pub use grid::Grid;
pub use rng::{RandomSource, SimpleRng};
pub use tile::Tile;
