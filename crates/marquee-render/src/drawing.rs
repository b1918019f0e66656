#![forbid(unsafe_code)]

//! Border character sets and low-level paint helpers.

use crate::buffer::Buffer;
use crate::cell::Cell;
use marquee_core::geometry::Rect;

/// The eight characters that make up a box border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    pub const PLAIN: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    pub const THICK: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };
}

/// Draw a border along the edge of `area`. Degenerate areas (under 2x2) are
/// skipped.
pub fn draw_border(buffer: &mut Buffer, area: Rect, chars: BorderChars, template: Cell) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let (left, right) = (area.left(), area.right() - 1);
    let (top, bottom) = (area.top(), area.bottom() - 1);

    let mut put = |x: u16, y: u16, ch: char| {
        let mut cell = template;
        cell.ch = ch;
        buffer.set(x, y, cell);
    };

    for x in left + 1..right {
        put(x, top, chars.horizontal);
        put(x, bottom, chars.horizontal);
    }
    for y in top + 1..bottom {
        put(left, y, chars.vertical);
        put(right, y, chars.vertical);
    }
    put(left, top, chars.top_left);
    put(right, top, chars.top_right);
    put(left, bottom, chars.bottom_left);
    put(right, bottom, chars.bottom_right);
}

/// Draw a horizontal rule across a single row.
pub fn draw_hline(buffer: &mut Buffer, x: u16, y: u16, width: u16, template: Cell) {
    let mut cell = template;
    if cell.ch == ' ' {
        cell.ch = '─';
    }
    for dx in 0..width {
        buffer.set(x.saturating_add(dx), y, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_corners_land_on_edges() {
        let mut buf = Buffer::new(5, 4);
        draw_border(
            &mut buf,
            Rect::new(0, 0, 5, 4),
            BorderChars::PLAIN,
            Cell::EMPTY,
        );
        assert_eq!(buf.get(0, 0).unwrap().ch, '┌');
        assert_eq!(buf.get(4, 0).unwrap().ch, '┐');
        assert_eq!(buf.get(0, 3).unwrap().ch, '└');
        assert_eq!(buf.get(4, 3).unwrap().ch, '┘');
        assert_eq!(buf.get(2, 0).unwrap().ch, '─');
        assert_eq!(buf.get(0, 1).unwrap().ch, '│');
        // interior untouched
        assert!(buf.get(2, 1).unwrap().is_empty());
    }

    #[test]
    fn degenerate_border_is_skipped() {
        let mut buf = Buffer::new(4, 4);
        draw_border(
            &mut buf,
            Rect::new(0, 0, 1, 4),
            BorderChars::PLAIN,
            Cell::EMPTY,
        );
        assert!(buf.get(0, 0).unwrap().is_empty());
    }

    #[test]
    fn hline_defaults_to_rule_char() {
        let mut buf = Buffer::new(4, 1);
        draw_hline(&mut buf, 0, 0, 4, Cell::EMPTY);
        assert_eq!(buf.row_text(0), "────");
    }
}
