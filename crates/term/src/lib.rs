//! Terminal output module.
//!
//! Two halves:
//! - [`GameView`] composes the text of a frame (board, score, status). Pure, no I/O.
//! - [`TerminalRenderer`] owns raw mode and the alternate screen and writes frames.
//!
//! The board text itself comes from the core's display renderers, so this
//! crate never inspects tiles.

pub mod game_view;
pub mod renderer;

pub use game_view::{game_over_line, GameView, Status};
pub use renderer::{encode_frame_into, TerminalRenderer};
