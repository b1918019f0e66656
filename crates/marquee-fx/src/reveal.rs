#![forbid(unsafe_code)]

//! Per-character scramble-then-reveal text animation.
//!
//! A [`RevealRun`] drives one activation-to-completion cycle: characters to
//! the left of a monotonically advancing locked index show their final
//! value, everything to the right churns with random picks from the scramble
//! alphabet, and the whole string converges to the original over a fixed
//! total duration.
//!
//! # Invariants
//!
//! 1. The locked index never decreases within one run; it resets to -1 only
//!    when a run restarts.
//! 2. Protected characters (space and punctuation) are never altered at any
//!    point during a run.
//! 3. At completion (`t >= 1`) the displayed text equals the original text
//!    exactly and the run stops.
//!
//! # Timing
//!
//! The reveal loop advances every frame, but visible churn is gated to the
//! tick interval, so the flicker rate is independent of the frame rate. The
//! locked index follows `floor(t * len)` through a monotonic max: a late
//! frame causes a visible jump rather than a smooth catch-up. That is the
//! intended rate limiting, not a bug to interpolate away.
//!
//! # Determinism
//!
//! All randomness comes from the seeded [`Lcg`]; equal seeds and equal tick
//! timings reproduce a run exactly.

use crate::rng::Lcg;
use crate::trigger::{ActivationPolicy, ActivationTrigger};
use marquee_core::geometry::Rect;
use marquee_render::cell::Cell;
use marquee_render::frame::Frame;
use marquee_style::Style;
use marquee_widgets::{Widget, apply_style};
use std::time::Duration;

/// Punctuation that is never scrambled, in addition to the space character.
pub const PROTECTED_PUNCTUATION: &[char] = &['.', ',', ':', ';', '+', '-', '–', '—', '/', '₹'];

/// Default gate between visible churn updates.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Floor for the derived total duration.
pub const MIN_DURATION: Duration = Duration::from_millis(900);

/// Per-character contribution to the derived total duration.
pub const PER_CHAR_DURATION: Duration = Duration::from_millis(55);

/// True for characters the animation must leave untouched.
#[must_use]
pub fn is_protected(ch: char) -> bool {
    ch == ' ' || PROTECTED_PUNCTUATION.contains(&ch)
}

// ---------------------------------------------------------------------------
// Alphabet
// ---------------------------------------------------------------------------

/// Where scramble characters come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleAlphabet {
    /// A caller-supplied character set.
    Custom(String),
    /// Digits only (`0-9`), for numeric figures.
    Digits,
    /// The unique non-protected characters of the source text itself, in
    /// first-appearance order.
    SourceChars,
}

impl Default for ScrambleAlphabet {
    fn default() -> Self {
        Self::Custom("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#$%^&*()_+".into())
    }
}

impl ScrambleAlphabet {
    /// Resolve to the concrete character pool for `text`.
    ///
    /// May be empty (empty custom set, or a source text made entirely of
    /// protected characters); the run then falls back to showing original
    /// characters instead of producing undefined output.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Vec<char> {
        match self {
            Self::Custom(chars) => chars.chars().collect(),
            Self::Digits => ('0'..='9').collect(),
            Self::SourceChars => {
                let mut pool = Vec::new();
                for ch in text.chars() {
                    if !is_protected(ch) && !pool.contains(&ch) {
                        pool.push(ch);
                    }
                }
                pool
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Tuning for one reveal run. All fields have working defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealParams {
    pub alphabet: ScrambleAlphabet,
    /// Minimum wall time between visible churn updates.
    pub tick_interval: Duration,
    /// Total run duration; `None` derives `max(900ms, 55ms x chars)`.
    pub duration: Option<Duration>,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            alphabet: ScrambleAlphabet::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            duration: None,
        }
    }
}

impl RevealParams {
    /// Effective total duration for a text of `chars` characters.
    #[must_use]
    pub fn duration_for(&self, chars: usize) -> Duration {
        match self.duration {
            Some(d) => d,
            None => MIN_DURATION.max(PER_CHAR_DURATION.saturating_mul(chars as u32)),
        }
    }
}

// ---------------------------------------------------------------------------
// RevealRun
// ---------------------------------------------------------------------------

/// One activation-to-completion (or activation-to-cancel) reveal cycle.
#[derive(Debug, Clone)]
pub struct RevealRun {
    text: Vec<char>,
    display: Vec<char>,
    pool: Vec<char>,
    /// Chars at index <= locked are final. -1 before anything locks.
    locked: i64,
    running: bool,
    tick_interval: Duration,
    duration: Duration,
    last_tick: Option<Duration>,
    rng: Lcg,
}

impl RevealRun {
    /// Start a run for `text`. The display begins as the untouched original;
    /// churn appears from the first advance.
    #[must_use]
    pub fn new(text: &str, params: &RevealParams, seed: u64) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let pool = params.alphabet.resolve(text);
        let duration = params.duration_for(chars.len());
        Self {
            display: chars.clone(),
            text: chars,
            pool,
            locked: -1,
            running: true,
            tick_interval: params.tick_interval,
            duration,
            last_tick: None,
            rng: Lcg::new(seed),
        }
    }

    /// Advance to `elapsed` time since activation. Returns `true` when the
    /// visible state changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.running {
            return false;
        }
        let len = self.text.len();
        if len == 0 {
            self.complete();
            return true;
        }

        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };

        let mut changed = false;
        if t < 1.0 && self.tick_due(elapsed) {
            self.last_tick = Some(elapsed);
            let target = (t * len as f64).floor() as i64;
            self.locked = self.locked.max(target);
            self.rescramble();
            changed = true;
        }

        if t >= 1.0 {
            self.complete();
            changed = true;
        }
        changed
    }

    /// Abort the run: display snaps back to the original text and the locked
    /// index resets immediately.
    pub fn cancel(&mut self) {
        self.display.clone_from(&self.text);
        self.locked = -1;
        self.running = false;
        self.last_tick = None;
    }

    /// Begin a fresh cycle on the same text and alphabet.
    pub fn restart(&mut self) {
        self.display.clone_from(&self.text);
        self.locked = -1;
        self.running = true;
        self.last_tick = None;
    }

    fn tick_due(&self, elapsed: Duration) -> bool {
        match self.last_tick {
            None => true,
            Some(prev) => elapsed.saturating_sub(prev) >= self.tick_interval,
        }
    }

    fn rescramble(&mut self) {
        for i in 0..self.text.len() {
            let original = self.text[i];
            self.display[i] = if is_protected(original)
                || (i as i64) <= self.locked
                || self.pool.is_empty()
            {
                original
            } else {
                self.pool[self.rng.next_index(self.pool.len())]
            };
        }
    }

    fn complete(&mut self) {
        self.display.clone_from(&self.text);
        self.locked = self.text.len() as i64;
        self.running = false;
    }

    /// The characters currently shown.
    #[must_use]
    pub fn displayed(&self) -> &[char] {
        &self.display
    }

    /// The displayed characters as a `String`.
    #[must_use]
    pub fn displayed_string(&self) -> String {
        self.display.iter().collect()
    }

    /// The final text this run converges to.
    #[must_use]
    pub fn original(&self) -> &[char] {
        &self.text
    }

    /// Boundary before which characters are guaranteed final.
    #[must_use]
    pub const fn locked_index(&self) -> i64 {
        self.locked
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// True if the character at `index` currently shows its final value for
    /// styling purposes: protected characters and everything at or below the
    /// locked index count as settled, as does the whole string once the run
    /// stops.
    #[must_use]
    pub fn is_settled(&self, index: usize) -> bool {
        !self.running
            || self
                .text
                .get(index)
                .copied()
                .is_none_or(is_protected)
            || (index as i64) <= self.locked
    }
}

// ---------------------------------------------------------------------------
// ScrambleText widget
// ---------------------------------------------------------------------------

/// A single-line text widget that scrambles in on activation.
///
/// Owns its [`ActivationTrigger`] and at most one in-flight [`RevealRun`].
/// The widget always announces the true text through the frame's semantic
/// channel, so assistive consumers never see the scrambled intermediate
/// states.
#[derive(Debug, Clone)]
pub struct ScrambleText {
    text: String,
    params: RevealParams,
    trigger: ActivationTrigger,
    run: Option<RevealRun>,
    activated_at: Option<Duration>,
    settled_style: Style,
    scrambled_style: Style,
    seed: u64,
}

impl ScrambleText {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: RevealParams::default(),
            trigger: ActivationTrigger::new(ActivationPolicy::Hover),
            run: None,
            activated_at: None,
            settled_style: Style::new(),
            scrambled_style: Style::new(),
            seed: 0x6d61_7271,
        }
    }

    #[must_use]
    pub fn policy(mut self, policy: ActivationPolicy) -> Self {
        self.trigger = ActivationTrigger::new(policy);
        self
    }

    #[must_use]
    pub fn params(mut self, params: RevealParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn settled_style(mut self, style: Style) -> Self {
        self.settled_style = style;
        self
    }

    #[must_use]
    pub fn scrambled_style(mut self, style: Style) -> Self {
        self.scrambled_style = style;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The true text, independent of animation state.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Forward a pointer containment change (hover policies).
    pub fn notify_pointer(&mut self, inside: bool) {
        if inside {
            self.trigger.pointer_enter();
        } else {
            self.trigger.pointer_leave();
        }
    }

    /// Forward the currently visible fraction of the widget (view policies).
    pub fn notify_visibility(&mut self, fraction: f64) {
        self.trigger.visibility(fraction);
    }

    /// Reconcile trigger state and advance the run. `now` is monotonic time
    /// since the page started; the widget tracks its own activation instant.
    pub fn step(&mut self, now: Duration) {
        if self.trigger.is_active() {
            if self.run.is_none() {
                self.run = Some(RevealRun::new(&self.text, &self.params, self.seed));
                self.activated_at = Some(now);
            }
        } else if let Some(run) = self.run.as_mut() {
            // Hover left mid-run: snap back and drop the cycle so the next
            // hover starts fresh.
            run.cancel();
            self.run = None;
            self.activated_at = None;
        }

        if let (Some(run), Some(start)) = (self.run.as_mut(), self.activated_at) {
            run.advance(now.saturating_sub(start));
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.as_ref().is_some_and(RevealRun::is_running)
    }
}

impl Widget for ScrambleText {
    fn render(&self, area: Rect, frame: &mut Frame) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "ScrambleText",
            running = self.is_running(),
            w = area.width
        )
        .entered();

        // The announcement carries the real content even while cells churn.
        frame.announce(self.text.clone());

        if area.is_empty() {
            return;
        }

        let mut x = area.left();
        let y = area.top();
        match &self.run {
            Some(run) => {
                for (i, &ch) in run.displayed().iter().enumerate() {
                    if x >= area.right() {
                        break;
                    }
                    let style = if run.is_settled(i) {
                        self.settled_style
                    } else {
                        self.scrambled_style
                    };
                    put_char(frame, x, y, ch, style);
                    x += 1;
                }
            }
            None => {
                for ch in self.text.chars() {
                    if x >= area.right() {
                        break;
                    }
                    put_char(frame, x, y, ch, self.settled_style);
                    x += 1;
                }
            }
        }
    }
}

fn put_char(frame: &mut Frame, x: u16, y: u16, ch: char, style: Style) {
    let mut cell = Cell::from_char(ch);
    apply_style(&mut cell, style);
    frame.buffer.set(x, y, cell);
}
