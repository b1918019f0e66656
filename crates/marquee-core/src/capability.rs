#![forbid(unsafe_code)]

//! One-shot environment capability snapshots, with test override injection.
//!
//! A [`CapabilitySnapshot`] captures every signal the decorative layers are
//! allowed to consult: motion/data preferences, display update speed, core
//! count, memory, pixel ratio. It is read **once per session** and never
//! re-evaluated on live hardware change; a session keeps its initial
//! capabilities for its lifetime.
//!
//! # Overrides
//!
//! Tests simulate arbitrary environments through a thread-local override
//! stack, without touching process environment or global state.
//!
//! - **Thread-local**: overrides on one thread never affect another, so
//!   parallel test runs stay isolated.
//! - **Stackable**: nested overrides compose; inner pushes win per-field.
//! - **RAII-based**: an [`OverrideGuard`] removes its layer on drop, even on
//!   panic or early return.
//!
//! # Invariants
//!
//! 1. **Thread isolation**: the override stack is `thread_local!`.
//! 2. **Stack ordering**: later pushes override earlier ones field-by-field;
//!    pops restore the previous state.
//! 3. **Cleanup guarantee**: guards implement `Drop`.
//!
//! # Failure Modes
//!
//! | Mode | Condition | Behavior |
//! |------|-----------|----------|
//! | Signal unavailable | probe returns nothing | conservative default |
//! | Guard leaked | guard moved without dropping | override persists until thread exit |
//! | No environment at all | headless/unit context | `CapabilitySnapshot::conservative()` |

use std::cell::RefCell;

/// Environment signals read once per session.
///
/// `cores` and `memory_gb` are `None` when the platform cannot report them;
/// consumers substitute their own optimistic or conservative defaults, which
/// keeps the "decide once" policy out of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapabilitySnapshot {
    /// User prefers reduced motion.
    pub reduced_motion: bool,
    /// User prefers reduced data transfer.
    pub reduced_data: bool,
    /// Display refreshes slowly (e-ink class).
    pub slow_update: bool,
    /// Networking layer requests data saving.
    pub save_data: bool,
    /// Logical core count, if known.
    pub cores: Option<u32>,
    /// Device memory in GB, if known.
    pub memory_gb: Option<u32>,
    /// Output pixel ratio (1.0 for plain terminals).
    pub pixel_ratio: f64,
}

impl CapabilitySnapshot {
    /// The most conservative snapshot: used when no environment can be
    /// observed at all. Treats the session as motion-sensitive so decorative
    /// layers stay quiet rather than guessing.
    #[must_use]
    pub const fn conservative() -> Self {
        Self {
            reduced_motion: true,
            reduced_data: false,
            slow_update: false,
            save_data: false,
            cores: None,
            memory_gb: None,
            pixel_ratio: 1.0,
        }
    }

    /// A fully capable snapshot, handy in tests.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            reduced_motion: false,
            reduced_data: false,
            slow_update: false,
            save_data: false,
            cores: Some(8),
            memory_gb: Some(16),
            pixel_ratio: 1.0,
        }
    }

    /// Probe the process environment once and apply any active overrides.
    ///
    /// Terminal sessions have no media-query surface, so preference signals
    /// ride `MARQUEE_*` environment variables; the core count comes from the
    /// OS. Unknown signals fall back to the defaults documented on each
    /// field.
    #[must_use]
    pub fn detect() -> Self {
        let base = Self::from_env(|key| std::env::var(key).ok());
        resolve_with_overrides(base)
    }

    /// Build a snapshot from a custom environment lookup.
    ///
    /// Extracted so tests can feed a fake environment without mutating the
    /// real one.
    #[must_use]
    pub fn from_env<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| get_env(key).is_some_and(|v| env_flag(&v));
        let cores = get_env("MARQUEE_CORES")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .or_else(|| {
                std::thread::available_parallelism()
                    .ok()
                    .map(|n| n.get() as u32)
            });
        let memory_gb = get_env("MARQUEE_MEMORY_GB").and_then(|v| v.trim().parse::<u32>().ok());
        let pixel_ratio = get_env("MARQUEE_PIXEL_RATIO")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(1.0);

        Self {
            reduced_motion: flag("MARQUEE_REDUCED_MOTION"),
            reduced_data: flag("MARQUEE_REDUCED_DATA"),
            slow_update: flag("MARQUEE_SLOW_UPDATE"),
            save_data: flag("MARQUEE_SAVE_DATA"),
            cores,
            memory_gb,
            pixel_ratio,
        }
    }

    /// True if any preference signal asks the session to stay quiet.
    #[must_use]
    pub const fn prefers_quiet(self) -> bool {
        self.reduced_motion || self.reduced_data || self.slow_update || self.save_data
    }
}

impl Default for CapabilitySnapshot {
    fn default() -> Self {
        Self::conservative()
    }
}

#[inline]
fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

// ============================================================================
// Capability Override
// ============================================================================

/// Override specification for capability signals.
///
/// Each field is `Option`:
/// - `Some(v)` - force the signal to `v`
/// - `None` - don't override (use base or previous override)
#[derive(Debug, Clone, Default)]
pub struct CapabilityOverride {
    pub reduced_motion: Option<bool>,
    pub reduced_data: Option<bool>,
    pub slow_update: Option<bool>,
    pub save_data: Option<bool>,
    pub cores: Option<u32>,
    pub memory_gb: Option<u32>,
    pub pixel_ratio: Option<f64>,
}

impl CapabilityOverride {
    /// Create a new empty override (no fields overridden).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reduced_motion: None,
            reduced_data: None,
            slow_update: None,
            save_data: None,
            cores: None,
            memory_gb: None,
            pixel_ratio: None,
        }
    }

    #[must_use]
    pub const fn reduced_motion(mut self, v: Option<bool>) -> Self {
        self.reduced_motion = v;
        self
    }

    #[must_use]
    pub const fn reduced_data(mut self, v: Option<bool>) -> Self {
        self.reduced_data = v;
        self
    }

    #[must_use]
    pub const fn slow_update(mut self, v: Option<bool>) -> Self {
        self.slow_update = v;
        self
    }

    #[must_use]
    pub const fn save_data(mut self, v: Option<bool>) -> Self {
        self.save_data = v;
        self
    }

    #[must_use]
    pub const fn cores(mut self, v: Option<u32>) -> Self {
        self.cores = v;
        self
    }

    #[must_use]
    pub const fn memory_gb(mut self, v: Option<u32>) -> Self {
        self.memory_gb = v;
        self
    }

    #[must_use]
    pub const fn pixel_ratio(mut self, v: Option<f64>) -> Self {
        self.pixel_ratio = v;
        self
    }

    fn apply(&self, mut snapshot: CapabilitySnapshot) -> CapabilitySnapshot {
        if let Some(v) = self.reduced_motion {
            snapshot.reduced_motion = v;
        }
        if let Some(v) = self.reduced_data {
            snapshot.reduced_data = v;
        }
        if let Some(v) = self.slow_update {
            snapshot.slow_update = v;
        }
        if let Some(v) = self.save_data {
            snapshot.save_data = v;
        }
        if let Some(v) = self.cores {
            snapshot.cores = Some(v);
        }
        if let Some(v) = self.memory_gb {
            snapshot.memory_gb = Some(v);
        }
        if let Some(v) = self.pixel_ratio {
            snapshot.pixel_ratio = v;
        }
        snapshot
    }
}

thread_local! {
    static OVERRIDE_STACK: RefCell<Vec<CapabilityOverride>> = const { RefCell::new(Vec::new()) };
}

fn resolve_with_overrides(base: CapabilitySnapshot) -> CapabilitySnapshot {
    OVERRIDE_STACK.with(|stack| {
        stack
            .borrow()
            .iter()
            .fold(base, |snap, layer| layer.apply(snap))
    })
}

/// RAII guard that removes its override layer on drop.
#[derive(Debug)]
pub struct OverrideGuard {
    // Depth at push time, used to detect unbalanced pops in debug builds.
    depth: usize,
}

impl Drop for OverrideGuard {
    fn drop(&mut self) {
        OVERRIDE_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            debug_assert_eq!(stack.len(), self.depth, "unbalanced capability override pop");
            stack.pop();
        });
    }
}

/// Push an override layer; it stays active until the guard drops.
#[must_use]
pub fn push_capability_override(cfg: CapabilityOverride) -> OverrideGuard {
    OVERRIDE_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        stack.push(cfg);
        OverrideGuard { depth: stack.len() }
    })
}

/// Run `f` with an override layer active, removing it afterwards.
pub fn with_capability_override<R>(cfg: CapabilityOverride, f: impl FnOnce() -> R) -> R {
    let _guard = push_capability_override(cfg);
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_probe_reads_flags_and_numbers() {
        let snap = CapabilitySnapshot::from_env(|key| match key {
            "MARQUEE_REDUCED_MOTION" => Some("yes".into()),
            "MARQUEE_CORES" => Some("2".into()),
            "MARQUEE_MEMORY_GB" => Some("4".into()),
            "MARQUEE_PIXEL_RATIO" => Some("1.5".into()),
            _ => None,
        });
        assert!(snap.reduced_motion);
        assert!(!snap.save_data);
        assert_eq!(snap.cores, Some(2));
        assert_eq!(snap.memory_gb, Some(4));
        assert_eq!(snap.pixel_ratio, 1.5);
    }

    #[test]
    fn malformed_numbers_fall_back() {
        let snap = CapabilitySnapshot::from_env(|key| match key {
            "MARQUEE_MEMORY_GB" => Some("lots".into()),
            "MARQUEE_PIXEL_RATIO" => Some("-3".into()),
            "MARQUEE_CORES" => Some("".into()),
            _ => None,
        });
        assert_eq!(snap.memory_gb, None);
        assert_eq!(snap.pixel_ratio, 1.0);
        // cores falls through to the OS probe, which always reports >= 1
        assert!(snap.cores.is_none_or(|c| c >= 1));
    }

    #[test]
    fn overrides_stack_and_restore() {
        let base = CapabilitySnapshot::unconstrained();

        let outer = CapabilityOverride::new().reduced_motion(Some(true));
        with_capability_override(outer, || {
            assert!(resolve_with_overrides(base).reduced_motion);

            let inner = CapabilityOverride::new()
                .reduced_motion(Some(false))
                .cores(Some(2));
            with_capability_override(inner, || {
                let snap = resolve_with_overrides(base);
                assert!(!snap.reduced_motion);
                assert_eq!(snap.cores, Some(2));
            });

            // Inner layer gone, outer still active.
            let snap = resolve_with_overrides(base);
            assert!(snap.reduced_motion);
            assert_eq!(snap.cores, Some(8));
        });

        assert!(!resolve_with_overrides(base).reduced_motion);
    }

    #[test]
    fn guard_cleans_up_on_panic() {
        let base = CapabilitySnapshot::unconstrained();
        let result = std::panic::catch_unwind(|| {
            with_capability_override(
                CapabilityOverride::new().save_data(Some(true)),
                || panic!("boom"),
            )
        });
        assert!(result.is_err());
        assert!(!resolve_with_overrides(base).save_data);
    }

    #[test]
    fn overrides_are_thread_local() {
        let _guard = push_capability_override(CapabilityOverride::new().slow_update(Some(true)));
        let other = std::thread::spawn(|| {
            resolve_with_overrides(CapabilitySnapshot::unconstrained()).slow_update
        })
        .join()
        .unwrap();
        assert!(!other);
        assert!(resolve_with_overrides(CapabilitySnapshot::unconstrained()).slow_update);
    }
}
