#![forbid(unsafe_code)]

//! Active-section tracking against a focus line.
//!
//! The spy owns a list of section ids in registration order. Each recompute
//! resolves every id to its current viewport-space bounds, measures the
//! distance from each section's vertical midpoint to the focus line, and
//! reports the closest section — so the active nav underline feels immediate
//! while scrolling in either direction, without waiting for a section to hit
//! the exact top.
//!
//! Recomputes are coalesced: scroll and resize handlers call
//! [`ScrollSpy::request_recompute`] as often as they like, and the frame
//! loop runs [`ScrollSpy::on_frame`] once per rendered frame. Bursts between
//! frames collapse into a single recompute.
//!
//! # Edge cases
//!
//! - No id resolves to bounds: the active id stays at its current value (the
//!   first registered id initially) and nothing is recomputed.
//! - Distance ties resolve to the first-registered section (stable iteration
//!   order, strict `<` comparison).

use marquee_core::coalescer::FrameCoalescer;

/// Rows of breathing room under the fixed header.
pub const HEADER_GAP_ROWS: u16 = 1;

/// Fraction of the viewport height below the nav offset where the focus
/// line sits. A tunable heuristic, not a derived value.
pub const FOCUS_LINE_FACTOR: f64 = 0.36;

/// The vertical reference line used to judge the active section.
#[must_use]
pub fn focus_line_y(header_height: u16, viewport_height: u16) -> f64 {
    (header_height as f64 + HEADER_GAP_ROWS as f64)
        + FOCUS_LINE_FACTOR * viewport_height as f64
}

/// Viewport-space vertical extent of a section. `top` goes negative once the
/// section scrolls past the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Frame-coalesced closest-section tracker.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    ids: Vec<String>,
    active: Option<String>,
    coalescer: FrameCoalescer,
}

impl ScrollSpy {
    /// Register section ids in display order. The first id is the initial
    /// active section.
    #[must_use]
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let active = ids.first().cloned();
        Self {
            ids,
            active,
            coalescer: FrameCoalescer::new(),
        }
    }

    /// Registered ids in order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The currently active section id.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Called from scroll/resize handlers. Returns `true` on the call that
    /// scheduled work; bursts are absorbed.
    pub fn request_recompute(&mut self) -> bool {
        self.coalescer.mark()
    }

    /// Run at most one pending recompute for this frame. Returns the new
    /// active id only when it changed.
    pub fn on_frame<F>(
        &mut self,
        header_height: u16,
        viewport_height: u16,
        lookup: F,
    ) -> Option<&str>
    where
        F: FnMut(&str) -> Option<SectionBounds>,
    {
        if !self.coalescer.take() {
            return None;
        }
        self.recompute(header_height, viewport_height, lookup)
    }

    /// Immediately recompute the active section (initial placement, tests).
    /// Returns the new active id only when it changed.
    pub fn recompute<F>(
        &mut self,
        header_height: u16,
        viewport_height: u16,
        mut lookup: F,
    ) -> Option<&str>
    where
        F: FnMut(&str) -> Option<SectionBounds>,
    {
        let focus_y = focus_line_y(header_height, viewport_height);

        let mut best: Option<(&String, f64)> = None;
        for id in &self.ids {
            let Some(bounds) = lookup(id) else {
                continue;
            };
            let dist = (bounds.midpoint() - focus_y).abs();
            // Strict < keeps ties on the first-registered section.
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((id, dist));
            }
        }

        let Some((winner, _)) = best else {
            // Nothing resolvable in the page: keep the current indicator.
            return None;
        };

        if self.active.as_deref() == Some(winner.as_str()) {
            return None;
        }
        let winner = winner.clone();
        self.active = Some(winner);
        self.active.as_deref()
    }
}
