#![forbid(unsafe_code)]

//! Magnetic hover offset.
//!
//! While the pointer sits inside the target's box, the wrapped content
//! drifts toward the pointer by `pointer_delta / strength`, clamped per axis
//! to `padding / strength`. Pointer-leave (or disabling mid-hover) snaps the
//! offset back to zero. Disabled is the required state under reduced motion
//! and on pointerless terminals.

use marquee_core::geometry::{Position, Rect};

/// Default clamp box radius in cells.
pub const DEFAULT_PADDING: u16 = 6;

/// Default attraction divisor.
pub const DEFAULT_STRENGTH: f64 = 2.0;

/// Pointer-following offset for one wrapped element.
#[derive(Debug, Clone)]
pub struct Magnet {
    padding: u16,
    strength: f64,
    disabled: bool,
    active: bool,
    offset: (i16, i16),
}

impl Default for Magnet {
    fn default() -> Self {
        Self::new()
    }
}

impl Magnet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            strength: DEFAULT_STRENGTH,
            disabled: false,
            active: false,
            offset: (0, 0),
        }
    }

    /// Set the clamp box radius in cells.
    #[must_use]
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    /// Set the attraction divisor. Values below 1 are clamped to 1.
    #[must_use]
    pub fn strength(mut self, strength: f64) -> Self {
        self.strength = strength.max(1.0);
        self
    }

    /// Builder form of [`Magnet::set_disabled`].
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Disable or re-enable. Disabling mid-hover resets the offset.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.active = false;
            self.offset = (0, 0);
        }
    }

    /// Feed a pointer position against the current target box. Positions
    /// outside the box count as a leave.
    pub fn pointer_move(&mut self, pos: Position, target: Rect) {
        if self.disabled {
            return;
        }
        if !target.contains(pos) {
            self.pointer_leave();
            return;
        }

        let center_x = target.x as f64 + target.width as f64 / 2.0;
        let center_y = target.y as f64 + target.height as f64 / 2.0;
        let max_offset = self.padding as f64 / self.strength;

        let next_x = ((pos.x as f64 - center_x) / self.strength).clamp(-max_offset, max_offset);
        let next_y = ((pos.y as f64 - center_y) / self.strength).clamp(-max_offset, max_offset);

        self.active = true;
        self.offset = (next_x.round() as i16, next_y.round() as i16);
    }

    /// Pointer left the target: snap back.
    pub fn pointer_leave(&mut self) {
        if self.disabled {
            return;
        }
        self.active = false;
        self.offset = (0, 0);
    }

    /// Current `(dx, dy)` cell offset to apply to the wrapped content.
    #[must_use]
    pub const fn offset(&self) -> (i16, i16) {
        self.offset
    }

    /// True while the pointer is attracting the content.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Shift a rect by the current offset, clamped at the screen origin.
    #[must_use]
    pub fn displaced(&self, rect: Rect) -> Rect {
        let (dx, dy) = self.offset;
        Rect::new(
            (rect.x as i32 + dx as i32).max(0) as u16,
            (rect.y as i32 + dy as i32).max(0) as u16,
            rect.width,
            rect.height,
        )
    }
}
