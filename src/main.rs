//! Terminal 2048 runner (default binary).
//!
//! Reads one key per turn, plays it, redraws. Configuration comes from
//! `TUI2048_*` environment variables (see `SessionConfig::from_env`).

use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use tui_2048::engine::{GameSession, SessionConfig};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{game_over_line, GameView, Status, TerminalRenderer};
use tui_2048::types::Direction;

enum Outcome {
    Quit,
    GameOver,
}

enum Input {
    Move(Direction),
    Redraw,
    Quit,
}

fn main() -> Result<()> {
    let config = SessionConfig::from_env().context("invalid TUI2048_* environment")?;

    // The TUI owns stdout and stderr, so logs only ever go to a file.
    let _log_guard = match &config.log_path {
        Some(path) => Some(setup_logging(path)?),
        None => None,
    };

    let seed = config.resolve_seed();
    tracing::info!(seed, "seed resolved");
    let mut session = GameSession::new(config.grid, seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Outcome::Quit => {
            tracing::info!(turns = session.turns(), "quit requested");
        }
        Outcome::GameOver => {
            print!("{}", session.display());
            print!("{}", game_over_line(session.score()));
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<Outcome> {
    let view = GameView::default();

    while !session.is_over() {
        term.draw(&view.render(&session.display(), session.score(), Status::Playing))?;

        match next_input()? {
            Input::Move(direction) => {
                session.play_turn(direction);
            }
            Input::Redraw => {}
            Input::Quit => return Ok(Outcome::Quit),
        }
    }

    Ok(Outcome::GameOver)
}

/// Block until a key we act on arrives. Unmapped keys are skipped.
fn next_input() -> Result<Input> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(Input::Quit);
                }
                if let Some(direction) = handle_key_event(key) {
                    return Ok(Input::Move(direction));
                }
            }
            Event::Resize(_, _) => return Ok(Input::Redraw),
            _ => {}
        }
    }
}

fn setup_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(guard)
}
