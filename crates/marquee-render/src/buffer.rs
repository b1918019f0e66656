#![forbid(unsafe_code)]

//! Row-major cell grid with bounds-checked access.
//!
//! Out-of-bounds writes are silent no-ops: widgets clip naturally instead of
//! panicking when an area is smaller than expected.

use crate::cell::Cell;
use marquee_core::geometry::Rect;

/// A 2D grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a cleared buffer of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full area of this buffer as a rect at the origin.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Read a cell; `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write a cell; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Mutate a cell in place; out-of-bounds positions are skipped.
    pub fn update(&mut self, x: u16, y: u16, f: impl FnOnce(&mut Cell)) {
        if let Some(i) = self.index(x, y) {
            f(&mut self.cells[i]);
        }
    }

    /// Fill a rect (clipped to the buffer) with one cell value.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let rect = rect.intersection(self.area());
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize to a fresh, cleared grid. Content is not preserved; the next
    /// render pass redraws everything anyway.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::EMPTY);
    }

    /// Iterate one row of cells.
    pub fn row(&self, y: u16) -> impl Iterator<Item = &Cell> {
        let start = y.min(self.height) as usize * self.width as usize;
        let end = if y < self.height {
            start + self.width as usize
        } else {
            start
        };
        self.cells[start..end].iter()
    }

    /// Plain-text contents of a row, for assertions in tests.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PackedRgba;

    #[test]
    fn set_get_roundtrip() {
        let mut buf = Buffer::new(4, 2);
        let cell = Cell {
            ch: 'x',
            fg: PackedRgba::WHITE,
            bg: PackedRgba::BLACK,
            attrs: 0,
        };
        buf.set(3, 1, cell);
        assert_eq!(buf.get(3, 1), Some(&cell));
    }

    #[test]
    fn out_of_bounds_is_silent() {
        let mut buf = Buffer::new(2, 2);
        buf.set(2, 0, Cell::from_char('x'));
        buf.set(0, 2, Cell::from_char('x'));
        assert_eq!(buf.get(5, 5), None);
        assert!(buf.row_text(0).chars().all(|c| c == ' '));
    }

    #[test]
    fn fill_clips_to_buffer() {
        let mut buf = Buffer::new(3, 3);
        buf.fill(Rect::new(1, 1, 10, 10), Cell::from_char('#'));
        assert_eq!(buf.row_text(0), "   ");
        assert_eq!(buf.row_text(1), " ##");
        assert_eq!(buf.row_text(2), " ##");
    }

    #[test]
    fn resize_discards_content() {
        let mut buf = Buffer::new(2, 1);
        buf.set(0, 0, Cell::from_char('a'));
        buf.resize(3, 2);
        assert_eq!(buf.width(), 3);
        assert!(buf.get(0, 0).unwrap().is_empty());
    }
}
