#![forbid(unsafe_code)]

//! Problem statements: the coming-soon card.

use crate::content;
use crate::sections::{Section, SectionHeading, content_column, text_width};
use crate::theme;
use marquee_core::geometry::{Position, Rect};
use marquee_render::frame::Frame;
use marquee_widgets::Widget;
use marquee_widgets::block::Block;
use marquee_widgets::paragraph::Paragraph;
use marquee_widgets::draw_text_span;
use std::time::Duration;

pub struct Problems {
    heading: SectionHeading,
}

impl Problems {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            heading: SectionHeading::new(content::PROBLEMS_TITLE, seed),
        }
    }

    fn body_rows(width: u16) -> u16 {
        Paragraph::new(content::PROBLEMS_BODY)
            .wrapped()
            .line_count(text_width(width).saturating_sub(4))
    }
}

impl Section for Problems {
    fn height(&self, width: u16) -> u16 {
        // Heading block, then a bordered card: status, gap, body, hint row.
        4 + (4 + Self::body_rows(width) + 2) + 1
    }

    fn step(&mut self, now: Duration, visible: f64) {
        self.heading.step(now, visible);
    }

    fn pointer(&mut self, pos: Option<Position>, area: Rect) {
        self.heading.pointer(pos, SectionHeading::title_rect(area));
    }

    fn render(&self, area: Rect, frame: &mut Frame) {
        let column = content_column(area);
        let y = self.heading.render(area, content::PROBLEMS_EYEBROW, frame);

        let card = Rect::new(
            column.left(),
            y,
            column.width,
            4 + Self::body_rows(area.width) + 2,
        );
        let block = Block::bordered().border_style(theme::border());
        block.render(card, frame);
        let bordered = block.inner(card);
        let inner = Rect::new(
            bordered.x + 1,
            bordered.y,
            bordered.width.saturating_sub(2),
            bordered.height,
        );
        if inner.is_empty() {
            return;
        }

        draw_text_span(
            frame,
            inner.left(),
            inner.top(),
            content::PROBLEMS_STATUS,
            theme::title(),
            inner.right(),
        );
        let body_rows = Self::body_rows(area.width);
        Paragraph::new(content::PROBLEMS_BODY)
            .wrapped()
            .style(theme::muted())
            .render(
                Rect::new(inner.left(), inner.top() + 2, inner.width, body_rows),
                frame,
            );
        draw_text_span(
            frame,
            inner.left(),
            inner.top() + 2 + body_rows + 1,
            "PRESS g TO RETURN TO TOP",
            theme::kicker(),
            inner.right(),
        );
    }
}
