#![forbid(unsafe_code)]

//! RAII terminal session lifecycle.
//!
//! Entering a session switches the terminal into raw mode, the alternate
//! screen, and (optionally) mouse capture; dropping the session restores
//! everything in reverse order. Restoration must never be skipped - the
//! guard runs on panic unwinding as well - so a crashed page leaves the
//! user's shell intact.

use crossterm::{cursor, event, execute, terminal};
use std::io::{self, Stdout, Write};

/// Options for entering a terminal session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Use the alternate screen (restores the shell's scrollback on exit).
    pub alt_screen: bool,
    /// Capture mouse movement and buttons.
    pub mouse: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            alt_screen: true,
            mouse: true,
        }
    }
}

/// An entered terminal session. Dropping restores the terminal.
#[derive(Debug)]
pub struct TerminalSession {
    stdout: Stdout,
    options: SessionOptions,
}

impl TerminalSession {
    /// Enter raw mode and set up the screen per `options`.
    pub fn enter(options: SessionOptions) -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        if options.alt_screen {
            execute!(stdout, terminal::EnterAlternateScreen)?;
        }
        if options.mouse {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        execute!(stdout, cursor::Hide, event::EnableFocusChange)?;
        Ok(Self { stdout, options })
    }

    /// Current terminal size in cells.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// The output handle frames are presented to.
    pub fn writer(&mut self) -> &mut Stdout {
        &mut self.stdout
    }

    /// Flush pending output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Best effort: each step is independent so one failure cannot stop
        // the rest of the restore sequence.
        let _ = execute!(self.stdout, event::DisableFocusChange, cursor::Show);
        if self.options.mouse {
            let _ = execute!(self.stdout, event::DisableMouseCapture);
        }
        if self.options.alt_screen {
            let _ = execute!(self.stdout, terminal::LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        let _ = self.stdout.flush();
    }
}
