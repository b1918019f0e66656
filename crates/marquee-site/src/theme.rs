#![forbid(unsafe_code)]

//! Shared theme styles for the event page.

use marquee_render::cell::PackedRgba;
use marquee_style::{Style, StyleFlags};

/// Color tokens for the dark landing surface.
pub mod palette {
    use marquee_render::cell::PackedRgba;

    pub const BG_BASE: PackedRgba = PackedRgba::rgb(10, 10, 16);
    pub const BG_CARD: PackedRgba = PackedRgba::rgb(18, 18, 27);
    pub const FG_PRIMARY: PackedRgba = PackedRgba::rgb(232, 232, 240);
    pub const FG_MUTED: PackedRgba = PackedRgba::rgb(138, 138, 155);
    pub const ACCENT: PackedRgba = PackedRgba::rgb(34, 211, 238);
    pub const ACCENT_DIM: PackedRgba = PackedRgba::rgb(16, 96, 108);
    pub const BORDER: PackedRgba = PackedRgba::rgb(42, 42, 56);
    pub const STAR: PackedRgba = PackedRgba::rgb(214, 226, 240);
}

// ---------------------------------------------------------------------------
// Named styles
// ---------------------------------------------------------------------------

/// Big display headings.
pub fn title() -> Style {
    Style::new().fg(palette::FG_PRIMARY).attrs(StyleFlags::BOLD)
}

/// The `// EYEBROW` kicker line above section headings.
pub fn kicker() -> Style {
    Style::new().fg(palette::ACCENT)
}

pub fn body() -> Style {
    Style::new().fg(palette::FG_PRIMARY)
}

pub fn muted() -> Style {
    Style::new().fg(palette::FG_MUTED)
}

pub fn accent() -> Style {
    Style::new().fg(palette::ACCENT).attrs(StyleFlags::BOLD)
}

/// Border cells on cards and rules.
pub fn border() -> Style {
    Style::new().fg(palette::BORDER)
}

pub fn nav_active() -> Style {
    Style::new().fg(palette::FG_PRIMARY).attrs(StyleFlags::BOLD)
}

pub fn nav_idle() -> Style {
    Style::new().fg(palette::FG_MUTED)
}

/// The underline indicator segment beneath the active nav item.
pub fn nav_indicator() -> Style {
    Style::new().fg(palette::ACCENT).attrs(StyleFlags::BOLD)
}

/// Characters still churning in a scramble reveal.
pub fn scrambled() -> Style {
    Style::new().fg(palette::ACCENT_DIM)
}

/// Call-to-action buttons.
pub fn button() -> Style {
    Style::new()
        .fg(PackedRgba::rgb(8, 12, 14))
        .bg(palette::ACCENT)
        .attrs(StyleFlags::BOLD)
}

pub fn button_secondary() -> Style {
    Style::new().fg(palette::ACCENT)
}
