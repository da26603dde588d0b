//! TerminalRenderer: writes composed frames to a real terminal.
//!
//! Frames are small, so every draw is a full redraw. Raw mode turns off the
//! terminal's newline translation, so lines are written with `\r\n`.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            active: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.active = false;
        Ok(())
    }

    /// Clear the screen and draw `frame` from the top-left corner.
    pub fn draw(&mut self, frame: &str) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(frame: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    for line in frame.lines() {
        out.queue(Print(line))?;
        out.queue(Print("\r\n"))?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_lines_end_with_carriage_return() {
        let mut out = Vec::new();
        encode_frame_into("ab\ncd\n", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ab\r\ncd\r\n"));
        assert!(!text.contains("cd\n\n"));
    }

    #[test]
    fn test_frame_starts_with_clear_and_home() {
        let mut out = Vec::new();
        encode_frame_into("x", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let x_at = text.find('x').unwrap();
        // ESC[2J clears, ESC[1;1H homes the cursor; both precede the content.
        assert!(text[..x_at].contains("\x1b[2J"));
        assert!(text[..x_at].contains("\x1b[1;1H"));
    }
}
