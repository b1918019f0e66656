#![forbid(unsafe_code)]

//! Footer: organizer line and the closing note.

use crate::content;
use crate::sections::{Section, content_column, text_width};
use crate::theme;
use marquee_core::geometry::Rect;
use marquee_render::cell::Cell;
use marquee_render::drawing::draw_hline;
use marquee_render::frame::Frame;
use marquee_widgets::Widget;
use marquee_widgets::block::Alignment;
use marquee_widgets::paragraph::Paragraph;
use marquee_widgets::{apply_style, draw_text_span};

pub struct Footer;

impl Footer {
    fn organizer_rows(width: u16) -> u16 {
        Paragraph::new(content::ORGANIZER)
            .wrapped()
            .line_count(text_width(width))
    }
}

impl Section for Footer {
    fn height(&self, width: u16) -> u16 {
        Self::organizer_rows(width) + 5
    }

    fn render(&self, area: Rect, frame: &mut Frame) {
        let column = content_column(area);
        let mut y = area.top() + 1;

        let mut rule = Cell::EMPTY;
        apply_style(&mut rule, theme::border());
        draw_hline(&mut frame.buffer, column.left(), y, column.width, rule);
        y += 2;

        let rows = Self::organizer_rows(area.width);
        Paragraph::new(content::ORGANIZER)
            .wrapped()
            .style(theme::muted())
            .alignment(Alignment::Center)
            .render(Rect::new(column.left(), y, column.width, rows), frame);
        y += rows + 1;

        let x = Alignment::Center.start_x(column, content::FOOTER_NOTE.len() as u16);
        draw_text_span(frame, x, y, content::FOOTER_NOTE, theme::muted(), column.right());
    }
}
