#![forbid(unsafe_code)]

//! Cascading style values.

use marquee_render::cell::{PackedRgba, attr};

/// Text attribute flags.
///
/// Bit values match `marquee_render::cell::attr` so a flag set can be stored
/// in a cell without translation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StyleFlags(pub u16);

impl StyleFlags {
    /// No attributes set.
    pub const NONE: Self = Self(0);
    /// Bold / increased intensity.
    pub const BOLD: Self = Self(attr::BOLD);
    /// Dim / decreased intensity.
    pub const DIM: Self = Self(attr::DIM);
    /// Italic text.
    pub const ITALIC: Self = Self(attr::ITALIC);
    /// Single underline.
    pub const UNDERLINE: Self = Self(attr::UNDERLINE);
    /// Reverse video (swap fg/bg).
    pub const REVERSE: Self = Self(attr::REVERSE);

    /// Check if this flags set contains another flags set.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if the flags set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two flag sets (OR operation).
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl core::ops::BitOr for StyleFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for StyleFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Unified styling type with CSS-like cascading semantics.
///
/// # Design Rationale
/// - `Option` fields allow inheritance (`None` = inherit from parent)
/// - `Copy` + small size for cheap passing
/// - Builder pattern for ergonomic construction
///
/// # Example
/// ```
/// use marquee_style::{Style, StyleFlags};
/// use marquee_render::cell::PackedRgba;
///
/// let style = Style::new()
///     .fg(PackedRgba::rgb(255, 0, 0))
///     .bold()
///     .underline();
/// assert!(style.attrs.unwrap().contains(StyleFlags::BOLD));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color (text color).
    pub fg: Option<PackedRgba>,
    /// Background color.
    pub bg: Option<PackedRgba>,
    /// Text attributes (bold, italic, etc.).
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style (all properties inherit).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Replace the attribute set.
    #[must_use]
    pub const fn attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(flags);
        self
    }

    /// Add bold to the attribute set.
    #[must_use]
    pub fn bold(self) -> Self {
        self.with_flag(StyleFlags::BOLD)
    }

    /// Add dim to the attribute set.
    #[must_use]
    pub fn dim(self) -> Self {
        self.with_flag(StyleFlags::DIM)
    }

    /// Add italic to the attribute set.
    #[must_use]
    pub fn italic(self) -> Self {
        self.with_flag(StyleFlags::ITALIC)
    }

    /// Add underline to the attribute set.
    #[must_use]
    pub fn underline(self) -> Self {
        self.with_flag(StyleFlags::UNDERLINE)
    }

    /// Add reverse video to the attribute set.
    #[must_use]
    pub fn reverse(self) -> Self {
        self.with_flag(StyleFlags::REVERSE)
    }

    fn with_flag(mut self, flag: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::NONE) | flag);
        self
    }

    /// Overlay `other` on top of this style: `other`'s set properties win,
    /// unset properties inherit from `self`.
    #[must_use]
    pub fn patch(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: other.attrs.or(self.attrs),
        }
    }
}
