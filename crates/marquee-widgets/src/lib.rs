#![forbid(unsafe_code)]

//! Widget trait and base widgets.
//!
//! # Role in Marquee
//! `marquee-widgets` defines the rendering contract ([`Widget`]) plus the
//! small set of building blocks every screen needs: bordered panels and
//! styled text paragraphs. Decorative widgets live in `marquee-fx`; page
//! composition lives in the site crate.

pub mod block;
pub mod paragraph;

pub use block::{Alignment, Block};
pub use paragraph::Paragraph;

use marquee_core::geometry::Rect;
use marquee_render::buffer::Buffer;
use marquee_render::cell::Cell;
use marquee_render::frame::Frame;
use marquee_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Something that can draw itself into a frame area.
pub trait Widget {
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// Apply a style's set properties to a cell, leaving unset ones alone.
pub fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs = attrs.0;
    }
}

/// Restyle every cell in an area without touching its content.
pub fn set_style_area(buffer: &mut Buffer, area: Rect, style: Style) {
    let area = area.intersection(buffer.area());
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buffer.update(x, y, |cell| apply_style(cell, style));
        }
    }
}

/// Draw a styled text span at `(x, y)`, clipping at column `clip_right`.
///
/// Iterates grapheme clusters: one cell per cluster, so combining marks do
/// not consume columns of their own. Wide clusters occupy two cells (the
/// continuation cell is a styled space); zero-width clusters are dropped.
/// Returns the column after the last cell written.
pub fn draw_text_span(
    frame: &mut Frame,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
    clip_right: u16,
) -> u16 {
    let mut col = x;
    for grapheme in text.graphemes(true) {
        let width = grapheme.width() as u16;
        if width == 0 {
            continue;
        }
        if col >= clip_right || clip_right - col < width {
            break;
        }
        let Some(ch) = grapheme.chars().next() else {
            continue;
        };
        let mut cell = Cell::from_char(ch);
        apply_style(&mut cell, style);
        frame.buffer.set(col, y, cell);
        if width == 2 {
            let mut cont = Cell::from_char(' ');
            apply_style(&mut cont, style);
            frame.buffer.set(col + 1, y, cont);
        }
        col += width;
    }
    col
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_render::cell::PackedRgba;

    #[test]
    fn span_clips_at_right_edge() {
        let mut frame = Frame::new(5, 1);
        let end = draw_text_span(&mut frame, 0, 0, "hello world", Style::new(), 5);
        assert_eq!(end, 5);
        assert_eq!(frame.buffer.row_text(0), "hello");
    }

    #[test]
    fn span_applies_style() {
        let mut frame = Frame::new(4, 1);
        let style = Style::new().fg(PackedRgba::rgb(9, 9, 9));
        draw_text_span(&mut frame, 0, 0, "ab", style, 4);
        assert_eq!(frame.buffer.get(0, 0).unwrap().fg, PackedRgba::rgb(9, 9, 9));
        assert_eq!(frame.buffer.get(2, 0).unwrap().fg, PackedRgba::TRANSPARENT);
    }

    #[test]
    fn wide_char_takes_two_cells() {
        let mut frame = Frame::new(4, 1);
        let end = draw_text_span(&mut frame, 0, 0, "日x", Style::new(), 4);
        assert_eq!(end, 3);
        assert_eq!(frame.buffer.get(0, 0).unwrap().ch, '日');
        assert_eq!(frame.buffer.get(2, 0).unwrap().ch, 'x');
    }

    #[test]
    fn combining_marks_share_a_cell() {
        let mut frame = Frame::new(4, 1);
        // 'e' + combining acute is one grapheme cluster: one cell.
        let end = draw_text_span(&mut frame, 0, 0, "e\u{0301}x", Style::new(), 4);
        assert_eq!(end, 2);
        assert_eq!(frame.buffer.get(1, 0).unwrap().ch, 'x');
    }

    #[test]
    fn wide_char_never_splits_at_clip() {
        let mut frame = Frame::new(4, 1);
        // Width-2 char at col 3 with clip at 4 cannot fit whole: dropped.
        let end = draw_text_span(&mut frame, 3, 0, "日", Style::new(), 4);
        assert_eq!(end, 3);
        assert!(frame.buffer.get(3, 0).unwrap().is_empty());
    }

    #[test]
    fn set_style_area_preserves_content() {
        let mut frame = Frame::new(3, 1);
        frame.buffer.set(1, 0, Cell::from_char('z'));
        set_style_area(
            &mut frame.buffer,
            Rect::new(0, 0, 3, 1),
            Style::new().bg(PackedRgba::BLACK),
        );
        let cell = frame.buffer.get(1, 0).unwrap();
        assert_eq!(cell.ch, 'z');
        assert_eq!(cell.bg, PackedRgba::BLACK);
    }
}
