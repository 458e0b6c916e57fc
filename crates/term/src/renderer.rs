//! TerminalRenderer: writes game frames and notices to a terminal.
//!
//! Frames are full redraws: clear, cursor home, then the lines from
//! [`crate::game_view`]. Lines end in `\r\n` because raw mode disables the
//! terminal's newline translation.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::GameStatus;
use crate::game_view::render_lines;

/// Output side of the game loop.
pub trait Renderer {
    /// Draw the board and the turn/result line.
    fn render(&mut self, status: &GameStatus) -> Result<()>;

    /// Show a one-line message below the current frame.
    fn notice(&mut self, message: &str) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, status: &GameStatus) -> Result<()> {
        (**self).render(status)
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        (**self).notice(message)
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Switch the terminal into raw mode so single keystrokes arrive unbuffered.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. The last frame stays on screen.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, status: &GameStatus) -> Result<()> {
        self.buf.clear();
        encode_frame_into(status, &mut self.buf)?;
        self.flush_buf()
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(message))?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(status: &GameStatus, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    for line in render_lines(status) {
        out.queue(Print(line))?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn output(renderer: &TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(renderer.writer()).into_owned()
    }

    #[test]
    fn frame_contains_board_and_turn_with_crlf() {
        let mut status = GameStatus {
            current_player: "bob".to_string(),
            ..GameStatus::default()
        };
        status.moves[0] = Mark::X;

        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.render(&status).unwrap();

        let text = output(&renderer);
        assert!(text.contains("X| | \r\n | | \r\n | | \r\n\r\nbob's turn\r\n"));
    }

    #[test]
    fn each_frame_starts_with_a_clear() {
        let status = GameStatus::default();
        let mut single = Vec::new();
        encode_frame_into(&status, &mut single).unwrap();

        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.render(&status).unwrap();
        renderer.render(&status).unwrap();

        let written = renderer.into_writer();
        assert_eq!(written.len(), single.len() * 2);
        assert!(written.starts_with(&single));
    }

    #[test]
    fn notice_is_one_line() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.notice("Illegal move entered!").unwrap();
        assert_eq!(output(&renderer), "Illegal move entered!\r\n");
    }
}
