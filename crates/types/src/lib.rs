//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Side length of the square grid |
//! | `MAX_GRID_SIZE` | 64 | Largest side length a configuration accepts |
//! | `DEFAULT_INIT_BLOCKS` | 2 | Tiles placed when a game starts |
//! | `DEFAULT_SPAWN_COUNTS` | `[1, 1, 1, 2]` | Candidate spawn counts, one picked per turn |
//!
//! # Rendering Constants
//!
//! - `TILE_WIDTH`: 6 columns per tile; a tile row is drawn `TILE_WIDTH / 2` lines tall
//! - `COLOR_SHIFT`: 40, the ANSI background code used for an empty tile
//! - `MAX_COLOR`: 46, the highest background code a tile can map to
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, RenderMode, DEFAULT_GRID_SIZE};
//!
//! // Keyboard letters map onto directions (case-insensitive)
//! assert_eq!(Direction::from_char('W'), Some(Direction::Up));
//! assert_eq!(Direction::from_char('x'), None);
//!
//! // Full names parse too
//! assert_eq!(Direction::from_str("right"), Some(Direction::Right));
//!
//! assert_eq!(RenderMode::from_str("plain"), Some(RenderMode::Plain));
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Width of one rendered tile in terminal columns
pub const TILE_WIDTH: usize = 6;

/// ANSI background code for an empty tile; tile colors count up from here by log2(value)
pub const COLOR_SHIFT: u32 = 40;

/// Highest ANSI background code a tile maps to (values >= 64 share it)
pub const MAX_COLOR: u32 = 46;

/// Default side length of the grid
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Largest accepted side length
pub const MAX_GRID_SIZE: usize = 64;

/// Tiles placed on a fresh grid
pub const DEFAULT_INIT_BLOCKS: usize = 2;

/// Candidate number of tiles spawned after a move.
///
/// One entry is picked uniformly per turn, so a single spawn is three times
/// as likely as a double spawn.
pub const DEFAULT_SPAWN_COUNTS: [usize; 4] = [1, 1, 1, 2];

/// Render mode used when nothing else is configured
pub const DEFAULT_RENDER_MODE: RenderMode = RenderMode::Color;

/// The four directions a move can slide tiles in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions, in table order (see [`Direction::index`])
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Map a single keyboard letter to a direction (WASD, case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_char('a'), Some(Direction::Left));
    /// assert_eq!(Direction::from_char('S'), Some(Direction::Down));
    /// assert_eq!(Direction::from_char('q'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse a direction from its name or its WASD letter (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "left" | "a" => Some(Direction::Left),
            "down" | "s" => Some(Direction::Down),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        }
    }

    /// Stable position of this direction in [`Direction::ALL`]
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }
}

/// How the grid is turned into text. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// ASCII borders, no escape codes
    Plain,
    /// ANSI background colors derived from tile magnitude
    Color,
}

impl RenderMode {
    /// Parse a render mode (case-insensitive)
    ///
    /// Boolean spellings are accepted as "is color on?".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::RenderMode;
    ///
    /// assert_eq!(RenderMode::from_str("COLOR"), Some(RenderMode::Color));
    /// assert_eq!(RenderMode::from_str("0"), Some(RenderMode::Plain));
    /// assert_eq!(RenderMode::from_str("sepia"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "0" | "false" | "off" => Some(RenderMode::Plain),
            "color" | "colour" | "1" | "true" | "on" => Some(RenderMode::Color),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Plain => "plain",
            RenderMode::Color => "color",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_rendering_constants() {
        assert_eq!(TILE_WIDTH, 6);
        assert_eq!(COLOR_SHIFT, 40);
        assert_eq!(MAX_COLOR, 46);
        assert_eq!(DEFAULT_SPAWN_COUNTS, [1, 1, 1, 2]);
        assert_eq!(DEFAULT_RENDER_MODE, RenderMode::Color);
    }

    #[test]
    fn test_direction_index_matches_all_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn test_direction_name_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str(" Down "), Some(Direction::Down));
        assert_eq!(Direction::from_str("north"), None);
    }

    #[test]
    fn test_render_mode_names() {
        assert_eq!(RenderMode::from_str("plain"), Some(RenderMode::Plain));
        assert_eq!(RenderMode::from_str("colour"), Some(RenderMode::Color));
        assert_eq!(RenderMode::from_str("true"), Some(RenderMode::Color));
        assert_eq!(RenderMode::Plain.as_str(), "plain");
    }
}
