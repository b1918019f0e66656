#![forbid(unsafe_code)]

//! Tracks: the two-lane grid with numbered badges.

use crate::content;
use crate::sections::{Section, SectionHeading, content_column, text_width};
use crate::theme;
use marquee_core::geometry::{Position, Rect};
use marquee_render::frame::Frame;
use marquee_widgets::Widget;
use marquee_widgets::block::Block;
use marquee_widgets::draw_text_span;
use marquee_widgets::paragraph::Paragraph;
use std::time::Duration;

/// Side-by-side cards need at least this much page width; below it the grid
/// stacks vertically.
const TWO_COLUMN_MIN_WIDTH: u16 = 72;

pub struct Tracks {
    heading: SectionHeading,
}

impl Tracks {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            heading: SectionHeading::new(content::TRACKS_TITLE, seed),
        }
    }

    fn intro_rows(width: u16) -> u16 {
        Paragraph::new(content::TRACKS_INTRO)
            .wrapped()
            .line_count(text_width(width))
    }

    fn two_column(width: u16) -> bool {
        width >= TWO_COLUMN_MIN_WIDTH
    }

    fn card_rows(page_width: u16) -> u16 {
        let per_card_width = Self::card_width(page_width);
        let body_rows = content::TRACKS
            .iter()
            .map(|(_, desc, _)| {
                Paragraph::new(desc)
                    .wrapped()
                    .line_count(per_card_width.saturating_sub(4))
            })
            .max()
            .unwrap_or(0);
        // Borders, title, gap, body.
        4 + body_rows
    }

    fn card_width(page_width: u16) -> u16 {
        let column = text_width(page_width);
        if Self::two_column(page_width) {
            column.saturating_sub(2) / 2
        } else {
            column
        }
    }
}

impl Section for Tracks {
    fn height(&self, width: u16) -> u16 {
        let grid = if Self::two_column(width) {
            Self::card_rows(width)
        } else {
            (Self::card_rows(width) + 1) * content::TRACKS.len() as u16
        };
        4 + Self::intro_rows(width) + 1 + grid + 1
    }

    fn step(&mut self, now: Duration, visible: f64) {
        self.heading.step(now, visible);
    }

    fn pointer(&mut self, pos: Option<Position>, area: Rect) {
        self.heading.pointer(pos, SectionHeading::title_rect(area));
    }

    fn render(&self, area: Rect, frame: &mut Frame) {
        let column = content_column(area);
        let mut y = self.heading.render(area, content::TRACKS_EYEBROW, frame);

        let intro_rows = Self::intro_rows(area.width);
        Paragraph::new(content::TRACKS_INTRO)
            .wrapped()
            .style(theme::muted())
            .render(Rect::new(column.left(), y, column.width, intro_rows), frame);
        y += intro_rows + 1;

        let rows = Self::card_rows(area.width);
        let card_width = Self::card_width(column.width);
        for (i, (title, desc, badge)) in content::TRACKS.iter().enumerate() {
            let rect = if Self::two_column(area.width) {
                Rect::new(
                    column.left() + (card_width + 2) * i as u16,
                    y,
                    card_width,
                    rows,
                )
            } else {
                Rect::new(column.left(), y + (rows + 1) * i as u16, card_width, rows)
            };
            draw_track_card(frame, rect, title, desc, badge);
        }
    }
}

fn draw_track_card(frame: &mut Frame, area: Rect, title: &str, desc: &str, badge: &str) {
    let block = Block::bordered().border_style(theme::border());
    block.render(area, frame);
    let bordered = block.inner(area);
    let inner = Rect::new(
        bordered.x + 1,
        bordered.y,
        bordered.width.saturating_sub(2),
        bordered.height,
    );
    if inner.is_empty() {
        return;
    }

    // Badge hugs the right edge of the title row.
    let tag = format!("TRACK {badge}");
    let badge_x = inner.right().saturating_sub(tag.len() as u16);
    draw_text_span(frame, badge_x, inner.top(), &tag, theme::kicker(), inner.right());

    let title_clip = badge_x.saturating_sub(1);
    draw_text_span(frame, inner.left(), inner.top(), title, theme::title(), title_clip);

    Paragraph::new(desc).wrapped().style(theme::muted()).render(
        Rect::new(
            inner.left(),
            inner.top() + 2,
            inner.width,
            inner.height.saturating_sub(2),
        ),
        frame,
    );
}
