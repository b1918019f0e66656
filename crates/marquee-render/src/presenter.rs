#![forbid(unsafe_code)]

//! Stateful ANSI emitter.
//!
//! The presenter turns a [`Buffer`] into terminal bytes. It repaints the
//! whole grid every frame (home cursor, row by row) but tracks the active
//! SGR state so runs of identically-styled cells cost one escape sequence,
//! not one per cell.
//!
//! # Determinism
//!
//! Given identical buffers, `present` always emits identical bytes. Tests
//! rely on this to snapshot frames without a terminal.

use crate::buffer::Buffer;
use crate::cell::{Cell, PackedRgba, attr};
use std::io::{self, Write};

/// Terminal presenter with SGR state tracking.
#[derive(Debug, Default)]
pub struct Presenter {
    current: Option<(PackedRgba, PackedRgba, u16)>,
    scratch: String,
}

impl Presenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the full buffer to `out`. The cursor is parked at the home
    /// position first; each row ends with clear-to-end-of-line so stale
    /// content from a larger previous frame cannot survive a resize.
    pub fn present<W: Write>(&mut self, buffer: &Buffer, out: &mut W) -> io::Result<()> {
        self.scratch.clear();
        self.current = None;
        self.scratch.push_str("\x1b[H");

        for y in 0..buffer.height() {
            if y > 0 {
                self.scratch.push_str("\r\n");
            }
            for cell in buffer.row(y) {
                self.apply_style(cell);
                self.scratch.push(cell.ch);
            }
            self.scratch.push_str("\x1b[K");
        }
        self.scratch.push_str("\x1b[0m");

        out.write_all(self.scratch.as_bytes())
    }

    fn apply_style(&mut self, cell: &Cell) {
        let wanted = (cell.fg, cell.bg, cell.attrs);
        if self.current == Some(wanted) {
            return;
        }
        self.current = Some(wanted);

        // Reset then rebuild: attrs have no individual "off" codes that are
        // reliable across terminals, so a fresh SGR run is the portable path.
        self.scratch.push_str("\x1b[0m");
        if cell.attrs & attr::BOLD != 0 {
            self.scratch.push_str("\x1b[1m");
        }
        if cell.attrs & attr::DIM != 0 {
            self.scratch.push_str("\x1b[2m");
        }
        if cell.attrs & attr::ITALIC != 0 {
            self.scratch.push_str("\x1b[3m");
        }
        if cell.attrs & attr::UNDERLINE != 0 {
            self.scratch.push_str("\x1b[4m");
        }
        if cell.attrs & attr::REVERSE != 0 {
            self.scratch.push_str("\x1b[7m");
        }
        if !cell.fg.is_transparent() {
            self.push_color(38, cell.fg);
        }
        if !cell.bg.is_transparent() {
            self.push_color(48, cell.bg);
        }
    }

    fn push_color(&mut self, plane: u8, color: PackedRgba) {
        use std::fmt::Write as _;
        let _ = write!(
            self.scratch,
            "\x1b[{plane};2;{};{};{}m",
            color.r(),
            color.g(),
            color.b()
        );
    }
}
