//! Turn driver.
//!
//! A [`GameSession`] runs the rules in the order a game needs them: move,
//! roll a spawn count, spawn. It does no I/O; the binary feeds it directions
//! and prints what it renders.

pub mod config;
pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use config::SessionConfig;
pub use session::{GameSession, TurnReport};
