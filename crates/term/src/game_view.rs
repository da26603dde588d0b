//! GameView: lays out the board display and the status lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

/// Where the game stands, as far as the status line cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    GameOver,
}

/// Frame layout for the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    show_hint: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_hint: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the key hint under the board.
    pub fn without_hint(mut self) -> Self {
        self.show_hint = false;
        self
    }

    /// Compose one frame: board, score, then a hint or the game-over line.
    pub fn render(&self, board: &str, score: u64, status: Status) -> String {
        let mut out = String::with_capacity(board.len() + 64);
        out.push_str(board);
        if !board.is_empty() && !board.ends_with('\n') {
            out.push('\n');
        }
        match status {
            Status::Playing => {
                out.push_str(&format!("Score: {}\n", score));
                if self.show_hint {
                    out.push_str("Move: w/a/s/d or arrows   Quit: q\n");
                }
            }
            Status::GameOver => out.push_str(&game_over_line(score)),
        }
        out
    }
}

/// The closing line printed when no moves are left.
pub fn game_over_line(score: u64) -> String {
    format!("GAME OVER! score = {}\n", score)
}
