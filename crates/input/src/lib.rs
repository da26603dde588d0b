//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Direction`]s and the quit
//! command. Unmapped keys yield `None`; the caller keeps waiting for the next
//! key.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
