#![forbid(unsafe_code)]

//! Styled multi-line text widget with optional word wrapping.

use crate::block::Alignment;
use crate::{Widget, draw_text_span};
use marquee_core::geometry::Rect;
use marquee_render::frame::Frame;
use marquee_style::Style;
use unicode_width::UnicodeWidthStr;

/// A paragraph of text.
///
/// Without wrapping, each input line is clipped at the area's right edge.
/// With wrapping, lines break greedily at word boundaries; a single word
/// wider than the area is hard-broken rather than lost.
#[derive(Debug, Clone, Default)]
pub struct Paragraph<'a> {
    text: &'a str,
    style: Style,
    alignment: Alignment,
    wrap: bool,
}

impl<'a> Paragraph<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn wrapped(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Number of rows this paragraph occupies at the given width.
    #[must_use]
    pub fn line_count(&self, width: u16) -> u16 {
        self.layout_lines(width).len().min(u16::MAX as usize) as u16
    }

    fn layout_lines(&self, width: u16) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }
        let mut lines = Vec::new();
        for raw in self.text.split('\n') {
            if !self.wrap {
                lines.push(raw.to_string());
                continue;
            }
            let mut current = String::new();
            for word in raw.split_whitespace() {
                let word_width = word.width();
                let current_width = current.width();
                if current.is_empty() {
                    if word_width <= width as usize {
                        current.push_str(word);
                    } else {
                        // Hard-break an overlong word.
                        hard_break(word, width, &mut lines, &mut current);
                    }
                } else if current_width + 1 + word_width <= width as usize {
                    current.push(' ');
                    current.push_str(word);
                } else {
                    lines.push(std::mem::take(&mut current));
                    if word_width <= width as usize {
                        current.push_str(word);
                    } else {
                        hard_break(word, width, &mut lines, &mut current);
                    }
                }
            }
            lines.push(current);
        }
        lines
    }
}

fn hard_break(word: &str, width: u16, lines: &mut Vec<String>, current: &mut String) {
    let mut chunk = String::new();
    for ch in word.chars() {
        if chunk.width() + ch.to_string().width() > width as usize {
            lines.push(std::mem::take(&mut chunk));
        }
        chunk.push(ch);
    }
    *current = chunk;
}

impl Widget for Paragraph<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Paragraph",
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        for (row, line) in self.layout_lines(area.width).iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let y = area.top() + row as u16;
            let width = (line.width() as u16).min(area.width);
            let x = self.alignment.start_x(area, width);
            draw_text_span(frame, x, y, line, self.style, area.right());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrapped_lines_clip() {
        let p = Paragraph::new("abcdefgh\nxy");
        let mut frame = Frame::new(4, 2);
        p.render(Rect::new(0, 0, 4, 2), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "abcd");
        assert_eq!(frame.buffer.row_text(1), "xy  ");
    }

    #[test]
    fn wrap_breaks_at_word_boundaries() {
        let p = Paragraph::new("one two three").wrapped();
        assert_eq!(p.line_count(7), 2);
        let mut frame = Frame::new(7, 3);
        p.render(Rect::new(0, 0, 7, 3), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "one two");
        assert_eq!(frame.buffer.row_text(1), "three  ");
    }

    #[test]
    fn overlong_word_hard_breaks() {
        let p = Paragraph::new("abcdefghij").wrapped();
        let mut frame = Frame::new(4, 3);
        p.render(Rect::new(0, 0, 4, 3), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "abcd");
        assert_eq!(frame.buffer.row_text(1), "efgh");
        assert_eq!(frame.buffer.row_text(2), "ij  ");
    }

    #[test]
    fn centered_render() {
        let p = Paragraph::new("ab").alignment(Alignment::Center);
        let mut frame = Frame::new(6, 1);
        p.render(Rect::new(0, 0, 6, 1), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "  ab  ");
    }

    #[test]
    fn height_overflow_is_dropped() {
        let p = Paragraph::new("a\nb\nc");
        let mut frame = Frame::new(2, 2);
        p.render(Rect::new(0, 0, 2, 2), &mut frame);
        assert_eq!(frame.buffer.row_text(0), "a ");
        assert_eq!(frame.buffer.row_text(1), "b ");
    }
}
