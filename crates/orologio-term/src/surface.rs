//! Terminal display surface — one overwritable line.

use std::io::{self, IsTerminal, Stdout, Write};

use orologio_core::updater::{ClockResult, DisplayTarget};

const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";
/// Erase from the cursor to the end of the line.
const CLEAR_TO_EOL: &str = "\x1b[K";

/// A single terminal line that the clock overwrites in place.
///
/// The cursor is hidden while the surface is alive; `Drop` restores it
/// and moves to the next line so the shell prompt lands cleanly.
pub struct TermSurface {
    out: Stdout,
}

impl TermSurface {
    /// Creates the surface, hiding the cursor.
    ///
    /// Fails when stdout is not a terminal: there is no display line to
    /// overwrite, and running anyway would stream one line per tick
    /// into a pipe. Repeated calls fail the same way.
    pub fn new() -> ClockResult<Self> {
        let out = io::stdout();
        if !out.is_terminal() {
            return Err("stdout is not a terminal".into());
        }
        let mut surface = Self { out };
        let _ = surface.out.write_all(HIDE_CURSOR.as_bytes());
        let _ = surface.out.flush();
        Ok(surface)
    }
}

impl DisplayTarget for TermSurface {
    fn set_text(&mut self, text: &str) -> ClockResult<()> {
        write!(self.out, "\r{text}{CLEAR_TO_EOL}")?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "{SHOW_CURSOR}");
        let _ = self.out.flush();
    }
}
