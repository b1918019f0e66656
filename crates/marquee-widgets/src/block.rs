#![forbid(unsafe_code)]

//! Bordered panel widget.

use crate::{Widget, draw_text_span, set_style_area};
use marquee_core::geometry::Rect;
use marquee_render::cell::Cell;
use marquee_render::drawing::{BorderChars, draw_border};
use marquee_render::frame::Frame;
use marquee_style::Style;
use unicode_width::UnicodeWidthStr;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Starting column for a span of `width` cells inside `area`.
    #[must_use]
    pub fn start_x(self, area: Rect, width: u16) -> u16 {
        match self {
            Self::Left => area.left(),
            Self::Center => area.left() + area.width.saturating_sub(width) / 2,
            Self::Right => area.left() + area.width.saturating_sub(width),
        }
    }
}

/// A container with an optional border and title.
#[derive(Debug, Clone, Default)]
pub struct Block<'a> {
    bordered: bool,
    border_chars: Option<BorderChars>,
    title: Option<&'a str>,
    title_alignment: Alignment,
    style: Style,
    border_style: Style,
}

impl<'a> Block<'a> {
    /// A block with no border and no title.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A block with a plain border on all sides.
    #[must_use]
    pub fn bordered() -> Self {
        Self {
            bordered: true,
            ..Self::default()
        }
    }

    /// Set the border character set (implies bordered).
    #[must_use]
    pub fn border_chars(mut self, chars: BorderChars) -> Self {
        self.bordered = true;
        self.border_chars = Some(chars);
        self
    }

    /// Set the title, drawn on the top border row.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the title alignment.
    #[must_use]
    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    /// Set the fill style for the whole block area.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style for border cells and the title.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// The content area remaining inside the border.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        if self.bordered { area.inset(1) } else { area }
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }

        set_style_area(&mut frame.buffer, area, self.style);

        if self.bordered {
            let mut template = Cell::EMPTY;
            crate::apply_style(&mut template, self.style.patch(self.border_style));
            draw_border(
                &mut frame.buffer,
                area,
                self.border_chars.unwrap_or(BorderChars::PLAIN),
                template,
            );
        }

        if let Some(title) = self.title {
            let row = area.top();
            // Keep clear of the corner cells when bordered.
            let usable = if self.bordered { area.inset(1) } else { area };
            if usable.width == 0 {
                return;
            }
            let width = (title.width() as u16).min(usable.width);
            let x = self.title_alignment.start_x(
                Rect::new(usable.x, row, usable.width, 1),
                width,
            );
            draw_text_span(
                frame,
                x,
                row,
                title,
                self.style.patch(self.border_style),
                usable.right(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_insets_only_when_bordered() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(Block::new().inner(area), area);
        assert_eq!(Block::bordered().inner(area), Rect::new(1, 1, 8, 2));
    }

    #[test]
    fn title_lands_on_top_border() {
        let block = Block::bordered().title("hi");
        let mut frame = Frame::new(8, 3);
        block.render(Rect::new(0, 0, 8, 3), &mut frame);
        assert_eq!(frame.buffer.get(1, 0).unwrap().ch, 'h');
        assert_eq!(frame.buffer.get(2, 0).unwrap().ch, 'i');
        // corner survives
        assert_eq!(frame.buffer.get(0, 0).unwrap().ch, '┌');
    }

    #[test]
    fn centered_title() {
        let block = Block::bordered()
            .title("ab")
            .title_alignment(Alignment::Center);
        let mut frame = Frame::new(8, 3);
        block.render(Rect::new(0, 0, 8, 3), &mut frame);
        assert_eq!(frame.buffer.get(3, 0).unwrap().ch, 'a');
    }

    #[test]
    fn empty_area_is_noop() {
        let block = Block::bordered().title("x");
        let mut frame = Frame::new(4, 2);
        block.render(Rect::default(), &mut frame);
        assert!(frame.buffer.get(0, 0).unwrap().is_empty());
    }
}
