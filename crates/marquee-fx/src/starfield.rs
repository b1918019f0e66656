#![forbid(unsafe_code)]

//! Starfield backdrop effect (cell-space).
//!
//! Deterministic, no-allocation in steady state, and tuning-driven: the
//! effect renders exactly what its [`ParticleTuning`] asks for and never
//! reads the environment itself. The page decides whether to render a
//! backdrop at all; the tuner only supplies numbers.
//!
//! # Determinism
//!
//! Star placement derives from the seed; motion derives from the context
//! time. Given identical `(seed, tuning, time, pointer)` inputs the output
//! buffer is identical. No wall-clock reads, no global state.

use crate::quality::ParticleTuning;
use crate::rng::Lcg;
use marquee_render::cell::PackedRgba;

// ---------------------------------------------------------------------------
// Context & trait
// ---------------------------------------------------------------------------

/// Per-frame inputs for a backdrop effect.
#[derive(Debug, Clone, Copy)]
pub struct FxContext<'a> {
    pub width: u16,
    pub height: u16,
    /// Seconds since the page started.
    pub time_seconds: f64,
    /// Session tuning constants.
    pub tuning: &'a ParticleTuning,
    /// Pointer position normalized to `[0, 1]` per axis, when known.
    pub pointer: Option<(f64, f64)>,
}

impl FxContext<'_> {
    /// Cell count of the target buffer.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A full-screen decorative layer rendered beneath the page content.
pub trait BackdropFx {
    fn name(&self) -> &'static str;

    /// Notify the effect of a viewport size change.
    fn resize(&mut self, width: u16, height: u16);

    /// Paint one frame into `out` (row-major, `ctx.len()` cells).
    fn render(&mut self, ctx: FxContext<'_>, out: &mut [PackedRgba]);
}

// ---------------------------------------------------------------------------
// Starfield
// ---------------------------------------------------------------------------

/// Map a backdrop alpha to the glyph the page should draw for it.
#[must_use]
pub const fn star_glyph(alpha: u8) -> char {
    match alpha {
        0..=39 => ' ',
        40..=119 => '·',
        120..=199 => '•',
        _ => '✦',
    }
}

#[derive(Debug, Clone, Copy)]
struct Star {
    x: f64,
    y: f64,
    /// Relative brightness in `(0, 1]`, jittered by size randomness.
    brightness: f64,
    phase: f64,
    drift_jitter: f64,
}

/// Drifting, twinkling star particles.
#[derive(Debug, Clone)]
pub struct StarfieldFx {
    seed: u64,
    color: PackedRgba,
    stars: Vec<Star>,
    seeded_for: (usize, u64),
}

impl StarfieldFx {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            color: PackedRgba::WHITE,
            stars: Vec::new(),
            seeded_for: (0, 0),
        }
    }

    /// Set the base star color.
    #[must_use]
    pub fn color(mut self, color: PackedRgba) -> Self {
        self.color = color;
        self
    }

    /// Particle budget for an area: the tuning count, capped so small
    /// terminals do not drown in stars.
    fn count_for(tuning: &ParticleTuning, width: u16, height: u16) -> usize {
        let cells = width as usize * height as usize;
        (tuning.particle_count as usize).min(cells / 6)
    }

    fn ensure_stars(&mut self, count: usize, tuning: &ParticleTuning) {
        if self.seeded_for == (count, self.seed) && self.stars.len() == count {
            return;
        }
        let mut rng = Lcg::new(self.seed);
        self.stars.clear();
        self.stars.reserve(count);
        for _ in 0..count {
            self.stars.push(Star {
                x: rng.next_f64(),
                y: rng.next_f64(),
                brightness: 1.0 - tuning.size_randomness * rng.next_f64(),
                phase: rng.next_f64() * std::f64::consts::TAU,
                drift_jitter: 0.6 + 0.8 * rng.next_f64(),
            });
        }
        self.seeded_for = (count, self.seed);
    }
}

impl BackdropFx for StarfieldFx {
    fn name(&self) -> &'static str {
        "starfield"
    }

    fn resize(&mut self, width: u16, height: u16) {
        if width == 0 || height == 0 {
            self.stars.clear();
            self.seeded_for = (0, 0);
        }
    }

    fn render(&mut self, ctx: FxContext<'_>, out: &mut [PackedRgba]) {
        if ctx.is_empty() || out.len() != ctx.len() {
            return;
        }

        let tuning = ctx.tuning;
        let count = Self::count_for(tuning, ctx.width, ctx.height);
        self.ensure_stars(count, tuning);

        let t = ctx.time_seconds;
        // Pointer attraction: a gentle whole-field shift toward the pointer,
        // scaled by the tier's hover factor.
        let (hover_dx, hover_dy) = match ctx.pointer {
            Some((px, py)) => (
                (px - 0.5) * 0.04 * tuning.hover_factor,
                (py - 0.5) * 0.04 * tuning.hover_factor,
            ),
            None => (0.0, 0.0),
        };

        let w = ctx.width as f64;
        let h = ctx.height as f64;
        let sway = 0.002 * tuning.spread;

        for star in &self.stars {
            let drift = t * tuning.speed * 0.05 * star.drift_jitter;
            let x = (star.x + hover_dx + sway * (t * tuning.speed + star.phase).sin()).rem_euclid(1.0);
            let y = (star.y + drift + hover_dy).rem_euclid(1.0);

            let cx = (x * w) as usize;
            let cy = (y * h) as usize;
            if cx >= ctx.width as usize || cy >= ctx.height as usize {
                continue;
            }

            let twinkle = 0.55 + 0.45 * (t * 1.7 + star.phase).sin();
            let alpha = (star.brightness * twinkle * 255.0).clamp(0.0, 255.0) as u8;
            let idx = cy * ctx.width as usize + cx;
            // Overlapping stars keep the brighter one.
            if out[idx].a() < alpha {
                out[idx] = PackedRgba::rgba(self.color.r(), self.color.g(), self.color.b(), alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::QualityTier;

    fn render_once(fx: &mut StarfieldFx, tuning: &ParticleTuning, time: f64) -> Vec<PackedRgba> {
        let ctx = FxContext {
            width: 40,
            height: 12,
            time_seconds: time,
            tuning,
            pointer: None,
        };
        let mut out = vec![PackedRgba::TRANSPARENT; ctx.len()];
        fx.render(ctx, &mut out);
        out
    }

    #[test]
    fn identical_inputs_render_identically() {
        let tuning = ParticleTuning::for_tier(QualityTier::Balanced);
        let mut a = StarfieldFx::new(99);
        let mut b = StarfieldFx::new(99);
        assert_eq!(render_once(&mut a, &tuning, 2.5), render_once(&mut b, &tuning, 2.5));
    }

    #[test]
    fn different_seeds_differ() {
        let tuning = ParticleTuning::for_tier(QualityTier::Balanced);
        let mut a = StarfieldFx::new(1);
        let mut b = StarfieldFx::new(2);
        assert_ne!(render_once(&mut a, &tuning, 2.5), render_once(&mut b, &tuning, 2.5));
    }

    #[test]
    fn low_tier_still_renders_particles() {
        let tuning = ParticleTuning::for_tier(QualityTier::Low);
        let mut fx = StarfieldFx::new(7);
        let lit = render_once(&mut fx, &tuning, 1.0)
            .iter()
            .filter(|c| c.a() > 0)
            .count();
        assert!(lit > 0, "low tier renders fewer stars, not zero");
    }

    #[test]
    fn count_scales_with_tier_and_area() {
        let high = ParticleTuning::for_tier(QualityTier::High);
        let low = ParticleTuning::for_tier(QualityTier::Low);
        assert!(StarfieldFx::count_for(&high, 80, 24) > StarfieldFx::count_for(&low, 80, 24));
        // Tiny terminals clamp to the density cap.
        assert_eq!(StarfieldFx::count_for(&high, 6, 2), 2);
    }

    #[test]
    fn empty_or_mismatched_target_is_noop() {
        let tuning = ParticleTuning::for_tier(QualityTier::High);
        let mut fx = StarfieldFx::new(3);
        let ctx = FxContext {
            width: 0,
            height: 0,
            time_seconds: 0.0,
            tuning: &tuning,
            pointer: None,
        };
        let mut out: Vec<PackedRgba> = Vec::new();
        fx.render(ctx, &mut out);

        let ctx = FxContext {
            width: 10,
            height: 10,
            time_seconds: 0.0,
            tuning: &tuning,
            pointer: None,
        };
        let mut short = vec![PackedRgba::TRANSPARENT; 5];
        fx.render(ctx, &mut short);
        assert!(short.iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn glyph_thresholds() {
        assert_eq!(star_glyph(0), ' ');
        assert_eq!(star_glyph(60), '·');
        assert_eq!(star_glyph(150), '•');
        assert_eq!(star_glyph(230), '✦');
    }
}
