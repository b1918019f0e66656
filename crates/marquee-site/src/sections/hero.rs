#![forbid(unsafe_code)]

//! Hero: tagline, title, prize reveal, description, CTA buttons, stats row.

use crate::content;
use crate::sections::{Section, content_column, text_width};
use crate::theme;
use marquee_core::geometry::{Position, Rect};
use marquee_fx::magnet::Magnet;
use marquee_fx::reveal::{RevealParams, ScrambleAlphabet, ScrambleText};
use marquee_fx::trigger::ActivationPolicy;
use marquee_render::frame::Frame;
use marquee_style::Style;
use marquee_widgets::block::{Alignment, Block};
use marquee_widgets::paragraph::Paragraph;
use marquee_widgets::{Widget, draw_text_span, set_style_area};
use std::time::Duration;

pub const REGISTER_LABEL: &str = " REGISTER NOW ";
pub const LEARN_LABEL: &str = " LEARN MORE ";

/// Rows: padding, tagline, gap, title, gap, prize, caption, gap.
const PREAMBLE_ROWS: u16 = 8;
/// Rows reserved for the CTA band (the magnet needs headroom to drift).
const BUTTON_BAND_ROWS: u16 = 3;
/// Bordered stats box: border + label row + value row + border.
const STATS_ROWS: u16 = 4;

pub struct Hero {
    prize: ScrambleText,
    stats: Vec<ScrambleText>,
    register_magnet: Magnet,
    learn_magnet: Magnet,
}

impl Hero {
    #[must_use]
    pub fn new(seed: u64, reduced_motion: bool) -> Self {
        let digits = |tick_ms: u64| RevealParams {
            alphabet: ScrambleAlphabet::Digits,
            tick_interval: Duration::from_millis(tick_ms),
            duration: None,
        };
        let prize = ScrambleText::new(content::PRIZE_AMOUNT)
            .policy(ActivationPolicy::View)
            .params(digits(60))
            .settled_style(theme::accent())
            .scrambled_style(theme::scrambled())
            .seed(seed);
        let stats = content::STATS
            .iter()
            .enumerate()
            .map(|(i, (_, value))| {
                ScrambleText::new(*value)
                    .policy(ActivationPolicy::View)
                    .params(digits(55))
                    .settled_style(theme::body())
                    .scrambled_style(theme::scrambled())
                    .seed(seed ^ (i as u64 + 1))
            })
            .collect();
        Self {
            prize,
            stats,
            register_magnet: Magnet::new().padding(4).strength(4.0).disabled(reduced_motion),
            learn_magnet: Magnet::new().padding(4).strength(5.0).disabled(reduced_motion),
        }
    }

    fn desc_rows(width: u16) -> u16 {
        Paragraph::new(content::DESCRIPTION)
            .wrapped()
            .line_count(text_width(width))
    }

    /// Base (un-displaced) CTA button rects for hit testing.
    #[must_use]
    pub fn button_rects(area: Rect) -> (Rect, Rect) {
        let column = content_column(area);
        let y = area.top() + PREAMBLE_ROWS + Self::desc_rows(area.width) + 1 + 1;
        let register = Rect::new(column.left(), y, REGISTER_LABEL.len() as u16, 1);
        let learn = Rect::new(register.right() + 3, y, LEARN_LABEL.len() as u16, 1);
        (register, learn)
    }

    fn stats_y(area: Rect) -> u16 {
        area.top() + PREAMBLE_ROWS + Self::desc_rows(area.width) + 1 + BUTTON_BAND_ROWS + 1
    }
}

impl Section for Hero {
    fn height(&self, width: u16) -> u16 {
        PREAMBLE_ROWS + Self::desc_rows(width) + 1 + BUTTON_BAND_ROWS + 1 + STATS_ROWS + 1
    }

    fn step(&mut self, now: Duration, visible: f64) {
        self.prize.notify_visibility(visible);
        self.prize.step(now);
        for stat in &mut self.stats {
            stat.notify_visibility(visible);
            stat.step(now);
        }
    }

    fn pointer(&mut self, pos: Option<Position>, area: Rect) {
        let (register, learn) = Self::button_rects(area);
        match pos {
            Some(pos) => {
                self.register_magnet.pointer_move(pos, register);
                self.learn_magnet.pointer_move(pos, learn);
            }
            None => {
                self.register_magnet.pointer_leave();
                self.learn_magnet.pointer_leave();
            }
        }
    }

    fn render(&self, area: Rect, frame: &mut Frame) {
        let column = content_column(area);
        let mut y = area.top() + 1;

        draw_text_span(frame, column.left(), y, content::TAGLINE, theme::muted(), column.right());
        y += 2;

        let after_name = draw_text_span(
            frame,
            column.left(),
            y,
            content::EVENT_NAME,
            theme::accent(),
            column.right(),
        );
        draw_text_span(frame, after_name + 1, y, content::EVENT_YEAR, theme::title(), column.right());
        y += 2;

        self.prize.render(Rect::new(column.left(), y, column.width, 1), frame);
        y += 1;
        draw_text_span(frame, column.left(), y, content::PRIZE_CAPTION, theme::muted(), column.right());
        y += 2;

        let desc_rows = Self::desc_rows(area.width);
        Paragraph::new(content::DESCRIPTION)
            .wrapped()
            .style(theme::muted())
            .render(Rect::new(column.left(), y, column.width, desc_rows), frame);
        y += desc_rows + 1;

        // CTA band: buttons drift inside it under the magnets.
        let (register, learn) = Self::button_rects(area);
        let band_bottom = y + BUTTON_BAND_ROWS - 1;
        for (magnet, rect, label, style) in [
            (&self.register_magnet, register, REGISTER_LABEL, theme::button()),
            (&self.learn_magnet, learn, LEARN_LABEL, theme::button_secondary()),
        ] {
            let mut target = magnet.displaced(rect);
            target.y = target.y.clamp(y, band_bottom);
            draw_button(frame, target, label, style);
        }

        let stats_area = Rect::new(column.left(), Self::stats_y(area), column.width, STATS_ROWS);
        self.render_stats(stats_area, frame);
    }
}

impl Hero {
    fn render_stats(&self, area: Rect, frame: &mut Frame) {
        let block = Block::bordered().border_style(theme::border());
        block.render(area, frame);
        let inner = block.inner(area);
        if inner.is_empty() || self.stats.is_empty() {
            return;
        }

        let slot_width = inner.width / content::STATS.len() as u16;
        for (i, (&(label, _), value)) in content::STATS.iter().zip(&self.stats).enumerate() {
            let x = inner.left() + slot_width * i as u16;
            let slot = Rect::new(x, inner.top(), slot_width, 1);
            let lx = Alignment::Center.start_x(slot, label.len() as u16);
            draw_text_span(frame, lx, inner.top(), label, theme::muted(), slot.right());

            let vx = Alignment::Center.start_x(slot, value.text().len() as u16);
            value.render(
                Rect::new(vx, inner.top() + 1, slot_width, 1),
                frame,
            );
        }
    }
}

fn draw_button(frame: &mut Frame, rect: Rect, label: &str, style: Style) {
    set_style_area(&mut frame.buffer, rect, style);
    draw_text_span(frame, rect.left(), rect.top(), label, style, rect.right());
}
