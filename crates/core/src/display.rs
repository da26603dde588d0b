//! Display module - turns grid tiles into a bordered text block
//!
//! This is the only place that knows about borders and escape codes. The grid
//! hands its tiles to a [`GridRenderer`] and gets a `String` back.
//!
//! Each grid row is drawn `TILE_WIDTH / 2` lines tall with the number on line
//! `TILE_WIDTH / 4`, so a 6-wide tile is a 6x3 box with the value on the
//! middle line.

use std::fmt::Write as _;

use crate::tile::Tile;
use crate::types::{RenderMode, COLOR_SHIFT, MAX_COLOR, TILE_WIDTH};

const LINES_PER_ROW: usize = TILE_WIDTH / 2;
const VALUE_LINE: usize = TILE_WIDTH / 4;

const WHITE_BG: &str = "\x1b[107m";
const RESET: &str = "\x1b[0m";

/// Renders a row-major slice of `size * size` tiles.
pub trait GridRenderer {
    fn render(&self, tiles: &[Tile], size: usize) -> String;
}

/// ASCII box drawing with `+`, `-` and `|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

/// White gutters with each tile's background picked from its magnitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorRenderer;

/// Renderer for a render mode.
pub fn renderer_for(mode: RenderMode) -> &'static dyn GridRenderer {
    match mode {
        RenderMode::Plain => &PlainRenderer,
        RenderMode::Color => &ColorRenderer,
    }
}

/// ANSI background code for a tile: `40 + log2(value)`, clamped to `MAX_COLOR`.
///
/// Empty tiles get `COLOR_SHIFT` itself.
pub fn tile_color(tile: &Tile) -> u32 {
    (COLOR_SHIFT + tile.exponent()).min(MAX_COLOR)
}

fn tile_text(tile: &Tile, line: usize) -> String {
    if line == VALUE_LINE {
        tile.render()
    } else {
        " ".repeat(TILE_WIDTH)
    }
}

impl GridRenderer for PlainRenderer {
    fn render(&self, tiles: &[Tile], size: usize) -> String {
        let mut border = String::from("+");
        for _ in 0..size {
            border.push_str(&"-".repeat(TILE_WIDTH));
            border.push('+');
        }
        border.push('\n');

        let mut out = border.clone();
        for row in tiles.chunks(size.max(1)) {
            for line in 0..LINES_PER_ROW {
                for tile in row {
                    out.push('|');
                    out.push_str(&tile_text(tile, line));
                }
                out.push_str("|\n");
            }
            out.push_str(&border);
        }
        out
    }
}

impl GridRenderer for ColorRenderer {
    fn render(&self, tiles: &[Tile], size: usize) -> String {
        let mut border = format!("{WHITE_BG} ");
        for _ in 0..size {
            border.push_str(&" ".repeat(TILE_WIDTH + 1));
        }
        border.push_str(RESET);
        border.push('\n');

        let mut out = border.clone();
        for row in tiles.chunks(size.max(1)) {
            for line in 0..LINES_PER_ROW {
                for tile in row {
                    // Writing into a String cannot fail.
                    let _ = write!(
                        out,
                        "{WHITE_BG} \x1b[0;37;{}m{}{RESET}",
                        tile_color(tile),
                        tile_text(tile, line)
                    );
                }
                out.push_str(WHITE_BG);
                out.push(' ');
                out.push_str(RESET);
                out.push('\n');
            }
            out.push_str(&border);
        }
        out
    }
}
