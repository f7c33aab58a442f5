//! Character-cell drawing over a terminal writer.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Thin wrapper that queues text at `(row, col)` cells and flushes whole
/// frames at once.
pub struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Queues a screen clear.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    /// Queues `text` starting at cell `(row, col)`.
    pub fn put(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row), Print(text))
    }

    /// Parks the visible cursor at `(row, col)`.
    pub fn park(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row))
    }

    /// Flushes everything queued so far.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
