//! TUI 2048 (workspace facade crate).
//!
//! This package exposes the `tui_2048::{core,engine,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
