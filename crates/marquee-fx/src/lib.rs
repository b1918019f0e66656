#![forbid(unsafe_code)]

//! Decorative effects: scramble-reveal text, activation triggers, quality
//! tiers, scroll spy, magnetic hover, and the starfield backdrop.
//!
//! # Role in Marquee
//! `marquee-fx` is where the page's motion lives. Every effect here is
//! deterministic given its inputs (time, seed, events), owns its state
//! exclusively, and degrades to stillness rather than failing: empty
//! alphabets, missing sections, and absent capability signals all fall back
//! to the quiet path.
//!
//! # Components
//! - [`reveal`]: per-character scramble-then-reveal runs and the
//!   [`reveal::ScrambleText`] widget.
//! - [`trigger`]: hover / enters-view activation with a one-shot view latch.
//! - [`quality`]: one-shot environment classification into low / balanced /
//!   high, each mapping to fixed particle tuning constants.
//! - [`scroll_spy`]: frame-coalesced active-section tracking against a
//!   focus line.
//! - [`magnet`]: pointer-following offset for hoverable content.
//! - [`starfield`]: the cell-space particle backdrop consuming a
//!   [`quality::ParticleTuning`].

pub mod magnet;
pub mod quality;
pub mod reveal;
pub mod rng;
pub mod scroll_spy;
pub mod starfield;
pub mod trigger;

pub use magnet::Magnet;
pub use quality::{ParticleTuning, QualityProfile, QualityTier};
pub use reveal::{RevealParams, RevealRun, ScrambleAlphabet, ScrambleText};
pub use scroll_spy::ScrollSpy;
pub use starfield::{BackdropFx, FxContext, StarfieldFx};
pub use trigger::{ActivationPolicy, ActivationTrigger};
