#![forbid(unsafe_code)]

//! Page sections, top to bottom.
//!
//! Every section renders in **page space**: a long virtual column the app
//! owns. The app blits the visible rows into the terminal frame under the
//! sticky nav, so sections never deal with scroll offsets; they just draw at
//! the area they are given and react to the pointer/visibility signals the
//! app forwards.

pub mod about;
pub mod footer;
pub mod hero;
pub mod history;
pub mod problems;
pub mod tracks;

use crate::theme;
use marquee_core::geometry::{Position, Rect};
use marquee_render::frame::Frame;
use marquee_widgets::draw_text_span;
use std::time::Duration;

/// One vertical slice of the long page.
pub trait Section {
    /// Rows this section occupies at the given page width.
    fn height(&self, width: u16) -> u16;

    /// Advance animations. `now` is page time since start; `visible` is the
    /// fraction of this section's rows currently inside the viewport.
    fn step(&mut self, _now: Duration, _visible: f64) {}

    /// Pointer position in page space (`None` when the pointer is gone or
    /// over another part of the page).
    fn pointer(&mut self, _pos: Option<Position>, _area: Rect) {}

    /// Render into page space.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// Content margin inside every section.
pub const SIDE_PADDING: u16 = 3;

/// Widest a text column gets, regardless of terminal width.
pub const MAX_TEXT_WIDTH: u16 = 76;

/// The padded content column for a section area.
#[must_use]
pub fn content_column(area: Rect) -> Rect {
    let width = area.width.saturating_sub(SIDE_PADDING * 2).min(MAX_TEXT_WIDTH);
    Rect::new(area.x + SIDE_PADDING, area.y, width, area.height)
}

/// Text width used for wrapping calculations at a given page width.
#[must_use]
pub fn text_width(page_width: u16) -> u16 {
    page_width.saturating_sub(SIDE_PADDING * 2).min(MAX_TEXT_WIDTH)
}

/// Draw the standard `// EYEBROW` kicker row. Returns the row consumed.
pub fn draw_eyebrow(frame: &mut Frame, column: Rect, y: u16, eyebrow: &str) {
    let text = format!("// {eyebrow}");
    draw_text_span(frame, column.left(), y, &text, theme::kicker(), column.right());
}

/// A section heading that scrambles in on first view and replays on hover.
pub struct SectionHeading {
    title: marquee_fx::reveal::ScrambleText,
}

impl SectionHeading {
    #[must_use]
    pub fn new(title: &str, seed: u64) -> Self {
        use marquee_fx::reveal::{RevealParams, ScrambleAlphabet, ScrambleText};
        use marquee_fx::trigger::ActivationPolicy;
        Self {
            title: ScrambleText::new(title)
                .policy(ActivationPolicy::Both)
                .params(RevealParams {
                    alphabet: ScrambleAlphabet::SourceChars,
                    ..RevealParams::default()
                })
                .settled_style(theme::title())
                .scrambled_style(theme::scrambled())
                .seed(seed),
        }
    }

    pub fn step(&mut self, now: Duration, visible: f64) {
        self.title.notify_visibility(visible);
        self.title.step(now);
    }

    /// Forward pointer containment for the heading's own row.
    pub fn pointer(&mut self, pos: Option<Position>, title_rect: Rect) {
        self.title
            .notify_pointer(pos.is_some_and(|p| title_rect.contains(p)));
    }

    /// Standard heading placement: eyebrow on row 1, title on row 2 of the
    /// section area.
    #[must_use]
    pub fn title_rect(area: Rect) -> Rect {
        let column = content_column(area);
        Rect::new(column.left(), area.top() + 2, column.width, 1)
    }

    /// Draw eyebrow + title; returns the next free row.
    pub fn render(&self, area: Rect, eyebrow: &str, frame: &mut Frame) -> u16 {
        let column = content_column(area);
        draw_eyebrow(frame, column, area.top() + 1, eyebrow);
        use marquee_widgets::Widget as _;
        self.title.render(Self::title_rect(area), frame);
        area.top() + 4
    }
}

/// Rows a labeled card occupies: borders, label, title, wrapped body.
#[must_use]
pub fn card_height(body: &str, width: u16) -> u16 {
    use marquee_widgets::paragraph::Paragraph;
    let inner = width.saturating_sub(4);
    4 + Paragraph::new(body).wrapped().line_count(inner)
}

/// Draw a bordered card with a kicker label, a title row, and body text.
pub fn draw_card(frame: &mut Frame, area: Rect, label: &str, title: &str, body: &str) {
    use marquee_widgets::Widget as _;
    use marquee_widgets::block::Block;
    use marquee_widgets::paragraph::Paragraph;

    let block = Block::bordered().border_style(theme::border());
    block.render(area, frame);
    let bordered = block.inner(area);
    // One extra column of breathing room against the vertical borders.
    let inner = Rect::new(
        bordered.x + 1,
        bordered.y,
        bordered.width.saturating_sub(2),
        bordered.height,
    );
    if inner.is_empty() {
        return;
    }
    draw_text_span(frame, inner.left(), inner.top(), label, theme::kicker(), inner.right());
    draw_text_span(frame, inner.left(), inner.top() + 1, title, theme::title(), inner.right());
    Paragraph::new(body).wrapped().style(theme::muted()).render(
        Rect::new(
            inner.left(),
            inner.top() + 2,
            inner.width,
            inner.height.saturating_sub(2),
        ),
        frame,
    );
}
