#![forbid(unsafe_code)]

//! The page model: scroll state, nav, section orchestration, and backdrop.
//!
//! One long page in **page space** (a virtual column of rows), blitted into
//! the terminal under a sticky nav. All animation advances on `Tick`; the
//! `view` pass is read-only composition of three layers: background +
//! starfield backdrop, the visible page rows, and the nav chrome.

use crate::content;
use crate::sections::about::About;
use crate::sections::footer::Footer;
use crate::sections::hero::Hero;
use crate::sections::history::History;
use crate::sections::problems::Problems;
use crate::sections::tracks::Tracks;
use crate::sections::Section;
use crate::theme::{self, palette};
use marquee_core::event::{Event, KeyCode, MouseEventKind};
use marquee_core::geometry::{Position, Rect};
use marquee_fx::quality::QualityProfile;
use marquee_fx::scroll_spy::{HEADER_GAP_ROWS, ScrollSpy, SectionBounds};
use marquee_fx::starfield::{BackdropFx, FxContext, StarfieldFx, star_glyph};
use marquee_render::cell::{Cell, PackedRgba};
use marquee_render::frame::Frame;
use marquee_runtime::{Cmd, Model};
use marquee_widgets::{apply_style, draw_text_span};
use std::time::Duration;
use tracing::debug;

/// Rows of the sticky nav: links row, indicator row, rule row.
pub const HEADER_HEIGHT: u16 = 3;

/// How far a wheel notch scrolls, in rows.
const WHEEL_STEP: f64 = 3.0;

/// Per-tick approach factor for smooth scrolling.
const SCROLL_EASE: f64 = 0.3;

// ---------------------------------------------------------------------------
// SectionId
// ---------------------------------------------------------------------------

/// Sections that participate in the nav and scroll spy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    About,
    History,
    Tracks,
    Problems,
}

impl SectionId {
    /// Nav display order.
    pub const ALL: &[SectionId] = &[Self::About, Self::History, Self::Tracks, Self::Problems];

    /// Stable id used by the scroll spy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::History => "history",
            Self::Tracks => "tracks",
            Self::Problems => "problems",
        }
    }

    /// Nav label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "ABOUT",
            Self::History => "HISTORY",
            Self::Tracks => "TRACKS",
            Self::Problems => "PROBLEMS",
        }
    }

    #[must_use]
    fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    Quit,
    ScrollBy(f64),
    ScrollPage(i8),
    ScrollTop,
    ScrollBottom,
    ScrollTo(SectionId),
    NextSection,
    PrevSection,
    PointerMoved(Position),
    PointerLeft,
    Click(Position),
    Resize { width: u16, height: u16 },
    Tick,
    Noop,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(k) if k.is_char('q') => Self::Quit,
            Event::Key(k) if k.is_press() && k.code == KeyCode::Esc => Self::Quit,
            Event::Key(k) if k.is_char('j') => Self::ScrollBy(2.0),
            Event::Key(k) if k.is_char('k') => Self::ScrollBy(-2.0),
            Event::Key(k) if k.is_press() && k.code == KeyCode::Down => Self::ScrollBy(2.0),
            Event::Key(k) if k.is_press() && k.code == KeyCode::Up => Self::ScrollBy(-2.0),
            Event::Key(k) if k.is_press() && k.code == KeyCode::PageDown => Self::ScrollPage(1),
            Event::Key(k) if k.is_press() && k.code == KeyCode::PageUp => Self::ScrollPage(-1),
            Event::Key(k) if k.is_char('g') => Self::ScrollTop,
            Event::Key(k) if k.is_char('G') => Self::ScrollBottom,
            Event::Key(k) if k.is_press() && k.code == KeyCode::Tab => Self::NextSection,
            Event::Key(k) if k.is_press() && k.code == KeyCode::BackTab => Self::PrevSection,
            Event::Key(k) => match k.code {
                KeyCode::Char(c @ '1'..='4') if k.is_press() => {
                    let idx = (c as usize) - ('1' as usize);
                    SectionId::ALL.get(idx).map_or(Self::Noop, |&id| Self::ScrollTo(id))
                }
                _ => Self::Noop,
            },
            Event::Mouse(m) => match m.kind {
                MouseEventKind::Moved => Self::PointerMoved(m.pos),
                MouseEventKind::Down(_) => Self::Click(m.pos),
                MouseEventKind::ScrollUp => Self::ScrollBy(-WHEEL_STEP),
                MouseEventKind::ScrollDown => Self::ScrollBy(WHEEL_STEP),
                MouseEventKind::Up(_) => Self::Noop,
            },
            Event::Resize { width, height } => Self::Resize { width, height },
            Event::FocusLost => Self::PointerLeft,
            Event::FocusGained => Self::Noop,
            Event::Tick => Self::Tick,
        }
    }
}

// ---------------------------------------------------------------------------
// PageModel
// ---------------------------------------------------------------------------

/// Startup options resolved by the CLI.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub quality: QualityProfile,
    /// Disable the backdrop entirely (`--no-fx`).
    pub no_fx: bool,
    pub seed: u64,
    /// Tick cadence, used to advance page time deterministically.
    pub frame_step: Duration,
}

pub struct PageModel {
    width: u16,
    height: u16,
    now: Duration,
    frame_step: Duration,
    scroll: f64,
    scroll_target: f64,
    quality: QualityProfile,
    no_fx: bool,
    spy: ScrollSpy,
    backdrop: StarfieldFx,
    backdrop_buf: Vec<PackedRgba>,
    page_frame: Frame,
    pointer: Option<Position>,
    hero: Hero,
    about: About,
    history: History,
    tracks: Tracks,
    problems: Problems,
    footer: Footer,
}

impl PageModel {
    #[must_use]
    pub fn new(options: PageOptions) -> Self {
        let seed = options.seed;
        Self {
            width: 0,
            height: 0,
            now: Duration::ZERO,
            frame_step: options.frame_step,
            scroll: 0.0,
            scroll_target: 0.0,
            quality: options.quality,
            no_fx: options.no_fx,
            spy: ScrollSpy::new(SectionId::ALL.iter().map(|id| id.as_str())),
            backdrop: StarfieldFx::new(seed).color(palette::STAR),
            backdrop_buf: Vec::new(),
            page_frame: Frame::new(0, 0),
            pointer: None,
            hero: Hero::new(seed, options.quality.reduced_motion),
            about: About::new(seed ^ 0xA0),
            history: History::new(seed ^ 0xB0),
            tracks: Tracks::new(seed ^ 0xC0),
            problems: Problems::new(seed ^ 0xD0),
            footer: Footer,
        }
    }

    /// Page time advanced so far (one frame step per tick).
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn active_section(&self) -> Option<SectionId> {
        self.spy.active().and_then(SectionId::from_str)
    }

    /// Page-space layout: every section's rect, top to bottom.
    fn layout(&self) -> Vec<(Option<SectionId>, Rect)> {
        let width = self.width;
        let mut y = 0u16;
        let mut out = Vec::with_capacity(6);
        let mut push = |id: Option<SectionId>, height: u16, y: &mut u16| {
            out.push((id, Rect::new(0, *y, width, height)));
            *y = y.saturating_add(height);
        };
        push(None, self.hero.height(width), &mut y);
        push(Some(SectionId::About), self.about.height(width), &mut y);
        push(Some(SectionId::History), self.history.height(width), &mut y);
        push(Some(SectionId::Tracks), self.tracks.height(width), &mut y);
        push(Some(SectionId::Problems), self.problems.height(width), &mut y);
        push(None, self.footer.height(width), &mut y);
        out
    }

    fn page_height(&self) -> u16 {
        self.layout().iter().map(|(_, r)| r.height).sum()
    }

    /// Rows of page content visible below the nav.
    fn content_rows(&self) -> u16 {
        self.height.saturating_sub(HEADER_HEIGHT)
    }

    fn max_scroll(&self) -> f64 {
        f64::from(self.page_height().saturating_sub(self.content_rows()))
    }

    fn section_rect(&self, id: SectionId) -> Option<Rect> {
        self.layout()
            .into_iter()
            .find_map(|(sid, rect)| (sid == Some(id)).then_some(rect))
    }

    fn set_scroll_target(&mut self, target: f64) {
        self.scroll_target = target.clamp(0.0, self.max_scroll());
        self.spy.request_recompute();
    }

    fn scroll_to_section(&mut self, id: SectionId) {
        if let Some(rect) = self.section_rect(id) {
            // Land the section just under the header, minus breathing room.
            let target = f64::from(rect.y.saturating_sub(HEADER_GAP_ROWS));
            self.set_scroll_target(target);
            debug!(section = id.as_str(), target, "scroll to section");
        }
    }

    fn step_by_section(&mut self, delta: i32) {
        let current = self.active_section().unwrap_or(SectionId::About);
        let idx = SectionId::ALL
            .iter()
            .position(|&id| id == current)
            .unwrap_or(0) as i32;
        let len = SectionId::ALL.len() as i32;
        let next = (idx + delta).rem_euclid(len) as usize;
        self.scroll_to_section(SectionId::ALL[next]);
    }

    /// Viewport-space bounds for the scroll spy.
    fn spy_bounds(&self) -> Vec<(SectionId, SectionBounds)> {
        self.layout()
            .into_iter()
            .filter_map(|(id, rect)| {
                id.map(|id| {
                    let top = f64::from(rect.y) - self.scroll + f64::from(HEADER_HEIGHT);
                    (id, SectionBounds::new(top, f64::from(rect.height)))
                })
            })
            .collect()
    }

    /// Pointer position translated into page space, if over the content.
    fn pointer_in_page(&self) -> Option<Position> {
        self.pointer_in_page_at(self.pointer?)
    }

    fn tick(&mut self) {
        self.now += self.frame_step;

        // Smooth scroll: exponential approach, snapping when close.
        let diff = self.scroll_target - self.scroll;
        if diff.abs() > 0.25 {
            self.scroll += diff * SCROLL_EASE;
            self.spy.request_recompute();
        } else if self.scroll != self.scroll_target {
            self.scroll = self.scroll_target;
            self.spy.request_recompute();
        }

        self.step_sections();
        self.render_page();
        self.render_backdrop();

        let bounds = self.spy_bounds();
        self.spy.on_frame(HEADER_HEIGHT, self.content_rows(), |id| {
            bounds
                .iter()
                .find(|(sid, _)| sid.as_str() == id)
                .map(|&(_, b)| b)
        });
    }

    fn step_sections(&mut self) {
        let layout = self.layout();
        let now = self.now;
        let view_top = self.scroll;
        let view_bottom = self.scroll + f64::from(self.content_rows());
        let pointer = self.pointer_in_page();

        let mut apply = |section: &mut dyn Section, rect: Rect| {
            let top = f64::from(rect.top());
            let bottom = f64::from(rect.bottom());
            let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
            let fraction = if rect.height == 0 {
                0.0
            } else {
                overlap / f64::from(rect.height)
            };
            let local = pointer.filter(|p| rect.contains(*p));
            section.pointer(local, rect);
            section.step(now, fraction);
        };

        for (id, rect) in layout {
            match id {
                None if rect.y == 0 => apply(&mut self.hero, rect),
                None => apply(&mut self.footer, rect),
                Some(SectionId::About) => apply(&mut self.about, rect),
                Some(SectionId::History) => apply(&mut self.history, rect),
                Some(SectionId::Tracks) => apply(&mut self.tracks, rect),
                Some(SectionId::Problems) => apply(&mut self.problems, rect),
            }
        }
    }

    /// Render every section into the page-space scratch frame.
    fn render_page(&mut self) {
        let page_height = self.page_height();
        if self.page_frame.width() != self.width || self.page_frame.height() != page_height {
            self.page_frame.resize(self.width, page_height);
        }
        self.page_frame.reset();

        // Split borrows: sections read-only, frame mutable.
        let layout = self.layout();
        for (id, rect) in layout {
            match id {
                None if rect.y == 0 => self.hero.render(rect, &mut self.page_frame),
                None => self.footer.render(rect, &mut self.page_frame),
                Some(SectionId::About) => self.about.render(rect, &mut self.page_frame),
                Some(SectionId::History) => self.history.render(rect, &mut self.page_frame),
                Some(SectionId::Tracks) => self.tracks.render(rect, &mut self.page_frame),
                Some(SectionId::Problems) => self.problems.render(rect, &mut self.page_frame),
            }
        }
    }

    fn backdrop_enabled(&self) -> bool {
        !self.no_fx && !self.quality.reduced_motion
    }

    fn render_backdrop(&mut self) {
        let rows = self.content_rows();
        let len = self.width as usize * rows as usize;
        self.backdrop_buf.clear();
        self.backdrop_buf.resize(len, PackedRgba::TRANSPARENT);
        if !self.backdrop_enabled() || len == 0 {
            return;
        }

        let pointer = self.pointer.map(|p| {
            (
                f64::from(p.x) / f64::from(self.width.max(1)),
                f64::from(p.y) / f64::from(self.height.max(1)),
            )
        });
        let ctx = FxContext {
            width: self.width,
            height: rows,
            time_seconds: self.now.as_secs_f64(),
            tuning: &self.quality.tuning,
            pointer,
        };
        self.backdrop.render(ctx, &mut self.backdrop_buf);
    }

    fn handle_click(&mut self, pos: Position) -> Option<()> {
        if pos.y < HEADER_HEIGHT {
            // Nav links, then the CTA.
            for (id, rect) in self.nav_items() {
                if rect.contains(pos) {
                    self.scroll_to_section(id);
                    return Some(());
                }
            }
            if self.nav_cta_rect().contains(pos) {
                self.scroll_to_section(SectionId::Problems);
            }
            return Some(());
        }

        // Hero CTA buttons, in page space.
        let page_pos = self.pointer_in_page_at(pos)?;
        let hero_rect = self.layout().first().map(|&(_, r)| r)?;
        let (register, learn) = Hero::button_rects(hero_rect);
        if register.contains(page_pos) {
            self.scroll_to_section(SectionId::Problems);
        } else if learn.contains(page_pos) {
            self.scroll_to_section(SectionId::About);
        }
        Some(())
    }

    fn pointer_in_page_at(&self, pos: Position) -> Option<Position> {
        if pos.y < HEADER_HEIGHT {
            return None;
        }
        let page_y = i64::from(pos.y) - i64::from(HEADER_HEIGHT) + self.scroll.round() as i64;
        u16::try_from(page_y).ok().map(|y| Position::new(pos.x, y))
    }

    /// Nav link rects (screen space, row 0).
    fn nav_items(&self) -> Vec<(SectionId, Rect)> {
        let mut x = 2 + content::EVENT_NAME.len() as u16 + 4;
        let mut out = Vec::with_capacity(SectionId::ALL.len());
        for &id in SectionId::ALL {
            let width = id.label().len() as u16;
            out.push((id, Rect::new(x, 0, width, 1)));
            x += width + 3;
        }
        out
    }

    fn nav_cta_rect(&self) -> Rect {
        let label_width = NAV_CTA.len() as u16;
        Rect::new(self.width.saturating_sub(label_width + 2), 0, label_width, 1)
    }
}

const NAV_CTA: &str = "[ REGISTER ]";

impl Model for PageModel {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Quit => return Cmd::quit(),
            Msg::ScrollBy(delta) => {
                let target = self.scroll_target + delta;
                self.set_scroll_target(target);
            }
            Msg::ScrollPage(dir) => {
                let page = f64::from(self.content_rows().max(1));
                let target = self.scroll_target + page * f64::from(dir);
                self.set_scroll_target(target);
            }
            Msg::ScrollTop => self.set_scroll_target(0.0),
            Msg::ScrollBottom => {
                let max = self.max_scroll();
                self.set_scroll_target(max);
            }
            Msg::ScrollTo(id) => self.scroll_to_section(id),
            Msg::NextSection => self.step_by_section(1),
            Msg::PrevSection => self.step_by_section(-1),
            Msg::PointerMoved(pos) => self.pointer = Some(pos),
            Msg::PointerLeft => self.pointer = None,
            Msg::Click(pos) => {
                let _ = self.handle_click(pos);
            }
            Msg::Resize { width, height } => {
                self.width = width;
                self.height = height;
                let max = self.max_scroll();
                self.scroll = self.scroll.clamp(0.0, max);
                self.scroll_target = self.scroll_target.clamp(0.0, max);
                self.spy.request_recompute();
            }
            Msg::Tick => self.tick(),
            Msg::Noop => {}
        }
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame) {
        let mut base = Cell::EMPTY;
        base.bg = palette::BG_BASE;
        frame.buffer.fill(frame.area(), base);

        // Layer 1: starfield glyphs under the content.
        let rows = self.content_rows().min(frame.height().saturating_sub(HEADER_HEIGHT));
        for y in 0..rows {
            for x in 0..self.width.min(frame.width()) {
                let idx = y as usize * self.width as usize + x as usize;
                let Some(&color) = self.backdrop_buf.get(idx) else {
                    continue;
                };
                if color.a() == 0 {
                    continue;
                }
                let mut cell = Cell::from_char(star_glyph(color.a()));
                cell.fg = color.blend_over(palette::BG_BASE);
                cell.bg = palette::BG_BASE;
                frame.buffer.set(x, y + HEADER_HEIGHT, cell);
            }
        }

        // Layer 2: visible page rows.
        let scroll = self.scroll.round().max(0.0) as u16;
        for y in 0..rows {
            let page_y = scroll.saturating_add(y);
            for x in 0..self.width.min(frame.width()) {
                let Some(&cell) = self.page_frame.buffer.get(x, page_y) else {
                    continue;
                };
                if cell.is_empty() {
                    continue;
                }
                let mut out = cell;
                if out.bg.is_transparent() {
                    out.bg = palette::BG_BASE;
                }
                frame.buffer.set(x, y + HEADER_HEIGHT, out);
            }
        }

        // The page's true content rides along for assistive consumers.
        for announcement in self.page_frame.announcements() {
            frame.announce(announcement.clone());
        }

        self.render_nav(frame);
    }
}

impl PageModel {
    fn render_nav(&self, frame: &mut Frame) {
        let area = Rect::new(0, 0, frame.width(), HEADER_HEIGHT.min(frame.height()));
        let mut bar = Cell::EMPTY;
        bar.bg = palette::BG_BASE;
        frame.buffer.fill(area, bar);

        draw_text_span(frame, 2, 0, content::EVENT_NAME, theme::accent(), frame.width());

        let active = self.active_section();
        for (id, rect) in self.nav_items() {
            let style = if active == Some(id) {
                theme::nav_active()
            } else {
                theme::nav_idle()
            };
            draw_text_span(frame, rect.left(), 0, id.label(), style, rect.right());
            // Underline indicator tracks the active link.
            if active == Some(id) {
                for x in rect.left()..rect.right() {
                    let mut cell = Cell::from_char('─');
                    apply_style(&mut cell, theme::nav_indicator());
                    frame.buffer.set(x, 1, cell);
                }
            }
        }

        let cta = self.nav_cta_rect();
        draw_text_span(frame, cta.left(), 0, NAV_CTA, theme::accent(), frame.width());

        // Rule under the whole header.
        let mut rule = Cell::from_char('─');
        apply_style(&mut rule, theme::border());
        for x in 0..frame.width() {
            frame.buffer.set(x, 2, rule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::capability::CapabilitySnapshot;
    use marquee_fx::quality::QualityTier;

    fn options() -> PageOptions {
        PageOptions {
            quality: QualityProfile::from_snapshot(&CapabilitySnapshot::unconstrained()),
            no_fx: false,
            seed: 7,
            frame_step: Duration::from_millis(20),
        }
    }

    fn model() -> PageModel {
        let mut model = PageModel::new(options());
        model.update(Msg::Resize {
            width: 100,
            height: 30,
        });
        model
    }

    fn settle(model: &mut PageModel, ticks: usize) {
        for _ in 0..ticks {
            model.update(Msg::Tick);
        }
    }

    #[test]
    fn initial_active_section_is_about() {
        let mut model = model();
        settle(&mut model, 2);
        assert_eq!(model.active_section(), Some(SectionId::About));
    }

    #[test]
    fn scrolling_to_bottom_activates_problems() {
        let mut model = model();
        model.update(Msg::ScrollBottom);
        settle(&mut model, 200);
        assert_eq!(model.active_section(), Some(SectionId::Problems));
    }

    #[test]
    fn nav_click_targets_its_section() {
        let mut model = model();
        settle(&mut model, 2);
        let (_, tracks_rect) = model
            .nav_items()
            .into_iter()
            .find(|(id, _)| *id == SectionId::Tracks)
            .unwrap();
        model.update(Msg::Click(Position::new(tracks_rect.left(), 0)));
        settle(&mut model, 200);
        assert_eq!(model.active_section(), Some(SectionId::Tracks));
    }

    #[test]
    fn quit_message_quits() {
        let mut model = model();
        assert!(matches!(model.update(Msg::Quit), Cmd::Quit));
    }

    #[test]
    fn scroll_target_clamps_to_page() {
        let mut model = model();
        model.update(Msg::ScrollBy(1e9));
        assert!(model.scroll_target <= model.max_scroll());
        model.update(Msg::ScrollBy(-1e9));
        assert_eq!(model.scroll_target, 0.0);
    }

    #[test]
    fn view_announces_true_texts() {
        let mut model = model();
        settle(&mut model, 3);
        let mut frame = Frame::new(100, 30);
        model.view(&mut frame);
        assert!(
            frame
                .announcements()
                .iter()
                .any(|a| a == content::PRIZE_AMOUNT),
            "prize figure must always be announced"
        );
    }

    #[test]
    fn reduced_motion_disables_backdrop() {
        let snapshot = CapabilitySnapshot {
            reduced_motion: true,
            ..CapabilitySnapshot::unconstrained()
        };
        let mut model = PageModel::new(PageOptions {
            quality: QualityProfile::from_snapshot(&snapshot),
            no_fx: false,
            seed: 7,
            frame_step: Duration::from_millis(20),
        });
        model.update(Msg::Resize {
            width: 80,
            height: 24,
        });
        settle(&mut model, 3);
        assert!(model.backdrop_buf.iter().all(|c| c.is_transparent()));
        assert_eq!(model.quality.tier, QualityTier::Low);
    }

    #[test]
    fn backdrop_renders_at_high_tier() {
        let mut model = model();
        settle(&mut model, 3);
        assert!(model.backdrop_buf.iter().any(|c| !c.is_transparent()));
    }

    #[test]
    fn tab_cycles_through_sections() {
        let mut model = model();
        settle(&mut model, 2);
        model.update(Msg::NextSection);
        settle(&mut model, 200);
        assert_eq!(model.active_section(), Some(SectionId::History));
    }
}
