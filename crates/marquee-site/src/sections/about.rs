#![forbid(unsafe_code)]

//! About: what the event is, plus the ownership/hardware cards.

use crate::content;
use crate::sections::{Section, SectionHeading, card_height, content_column, draw_card, text_width};
use crate::theme;
use marquee_core::geometry::{Position, Rect};
use marquee_render::frame::Frame;
use marquee_widgets::Widget;
use marquee_widgets::paragraph::Paragraph;
use std::time::Duration;

pub struct About {
    heading: SectionHeading,
}

impl About {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            heading: SectionHeading::new(content::ABOUT_TITLE, seed),
        }
    }

    fn body_rows(width: u16) -> u16 {
        Paragraph::new(content::ABOUT_BODY)
            .wrapped()
            .line_count(text_width(width))
    }
}

impl Section for About {
    fn height(&self, width: u16) -> u16 {
        let cards: u16 = content::ABOUT_CARDS
            .iter()
            .map(|(_, _, body)| card_height(body, text_width(width)) + 1)
            .sum();
        4 + Self::body_rows(width) + 1 + cards + 1
    }

    fn step(&mut self, now: Duration, visible: f64) {
        self.heading.step(now, visible);
    }

    fn pointer(&mut self, pos: Option<Position>, area: Rect) {
        self.heading.pointer(pos, SectionHeading::title_rect(area));
    }

    fn render(&self, area: Rect, frame: &mut Frame) {
        let column = content_column(area);
        let mut y = self.heading.render(area, content::ABOUT_EYEBROW, frame);

        let body_rows = Self::body_rows(area.width);
        Paragraph::new(content::ABOUT_BODY)
            .wrapped()
            .style(theme::muted())
            .render(Rect::new(column.left(), y, column.width, body_rows), frame);
        y += body_rows + 1;

        for (label, title, body) in content::ABOUT_CARDS {
            let rows = card_height(body, column.width);
            draw_card(
                frame,
                Rect::new(column.left(), y, column.width, rows),
                label,
                title,
                body,
            );
            y += rows + 1;
        }
    }
}
