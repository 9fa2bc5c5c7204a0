// Mon Oct 19 2026 - Alex

use super::io::Io;

pub const DEFAULT_WIDTH: usize = 80;

pub trait Canvas {
    fn width(&self) -> usize;
    fn io(&mut self) -> &mut dyn Io;
}

pub struct TerminalCanvas<I: Io> {
    io: I,
    width: usize,
}

impl<I: Io> TerminalCanvas<I> {
    /// Sized to the terminal behind stderr, where the trace is written.
    pub fn new(io: I) -> Self {
        Self {
            io,
            width: stderr_width(),
        }
    }

    pub fn with_width(io: I, width: usize) -> Self {
        Self { io, width }
    }

    pub fn inner(&self) -> &I {
        &self.io
    }

    pub fn into_inner(self) -> I {
        self.io
    }
}

fn stderr_width() -> usize {
    terminal_size::terminal_size_of(std::io::stderr())
        .map(|(w, _)| w.0 as usize)
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

impl<I: Io> Canvas for TerminalCanvas<I> {
    fn width(&self) -> usize {
        self.width
    }

    fn io(&mut self) -> &mut dyn Io {
        &mut self.io
    }
}
