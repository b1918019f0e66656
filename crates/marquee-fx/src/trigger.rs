#![forbid(unsafe_code)]

//! Activation triggering for decorative animations.
//!
//! Three policies decide when an animation runs:
//!
//! - `Hover`: active exactly while the pointer is over the element.
//! - `View`: active once, the first time the element reaches the visibility
//!   threshold. The latch is permanent; later visibility changes are
//!   ignored and the animation never re-arms.
//! - `Both`: either signal arms it; the view latch still fires at most once,
//!   and pointer-leave deactivates as under `Hover`.
//!
//! If visibility is never reported (no observer in the host), a `View`
//! trigger simply stays idle forever. That is the documented fallback, not
//! an error.

/// When an animation should activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationPolicy {
    #[default]
    Hover,
    View,
    Both,
}

impl ActivationPolicy {
    /// True if pointer enter/leave drives this policy.
    #[must_use]
    pub const fn hover_enabled(self) -> bool {
        matches!(self, Self::Hover | Self::Both)
    }

    /// True if visibility observations drive this policy.
    #[must_use]
    pub const fn view_enabled(self) -> bool {
        matches!(self, Self::View | Self::Both)
    }
}

/// Fraction of an element that must be visible before a view trigger fires.
pub const VIEW_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Idle/active state machine for one animated element.
#[derive(Debug, Clone)]
pub struct ActivationTrigger {
    policy: ActivationPolicy,
    active: bool,
    view_latched: bool,
}

impl ActivationTrigger {
    #[must_use]
    pub const fn new(policy: ActivationPolicy) -> Self {
        Self {
            policy,
            active: false,
            view_latched: false,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> ActivationPolicy {
        self.policy
    }

    /// Pointer moved onto the element.
    pub fn pointer_enter(&mut self) {
        if self.policy.hover_enabled() {
            self.active = true;
        }
    }

    /// Pointer left the element. Deactivates even if the view latch armed
    /// the trigger earlier; the latch itself stays consumed.
    pub fn pointer_leave(&mut self) {
        if self.policy.hover_enabled() {
            self.active = false;
        }
    }

    /// Report the visible fraction of the element (`0.0..=1.0`).
    pub fn visibility(&mut self, fraction: f64) {
        if !self.policy.view_enabled() || self.view_latched {
            return;
        }
        if fraction >= VIEW_VISIBILITY_THRESHOLD {
            self.view_latched = true;
            self.active = true;
        }
    }

    /// Current activation signal.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// True once the view latch has been consumed.
    #[must_use]
    pub const fn has_viewed(&self) -> bool {
        self.view_latched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_toggles_with_pointer() {
        let mut t = ActivationTrigger::new(ActivationPolicy::Hover);
        assert!(!t.is_active());
        t.pointer_enter();
        assert!(t.is_active());
        t.pointer_leave();
        assert!(!t.is_active());
    }

    #[test]
    fn hover_policy_ignores_visibility() {
        let mut t = ActivationTrigger::new(ActivationPolicy::Hover);
        t.visibility(1.0);
        assert!(!t.is_active());
        assert!(!t.has_viewed());
    }

    #[test]
    fn view_fires_once_despite_toggling() {
        let mut t = ActivationTrigger::new(ActivationPolicy::View);
        t.visibility(0.05);
        assert!(!t.is_active());
        t.visibility(0.1);
        assert!(t.is_active());
        assert!(t.has_viewed());

        // Scroll out and back: nothing changes anymore.
        t.visibility(0.0);
        assert!(t.is_active());
        t.visibility(1.0);
        assert!(t.is_active());
    }

    #[test]
    fn view_policy_ignores_pointer() {
        let mut t = ActivationTrigger::new(ActivationPolicy::View);
        t.pointer_enter();
        assert!(!t.is_active());
    }

    #[test]
    fn both_arms_from_either_signal() {
        let mut t = ActivationTrigger::new(ActivationPolicy::Both);
        t.pointer_enter();
        assert!(t.is_active());
        t.pointer_leave();
        assert!(!t.is_active());

        t.visibility(0.5);
        assert!(t.is_active());
        // Pointer-leave still deactivates, but the latch stays consumed.
        t.pointer_leave();
        assert!(!t.is_active());
        assert!(t.has_viewed());
        t.visibility(1.0);
        assert!(!t.is_active(), "consumed latch must not re-arm");
    }

    #[test]
    fn unobserved_view_trigger_stays_idle() {
        let t = ActivationTrigger::new(ActivationPolicy::View);
        assert!(!t.is_active());
        assert!(!t.has_viewed());
    }
}
