#![forbid(unsafe_code)]

//! Frame = buffer + per-pass metadata for a render pass.
//!
//! The `Frame` is the render target that `Model::view()` methods write to.
//! Besides the visible cell grid it carries the **announcement channel**: the
//! text a pass declares as its true content, independent of whatever the
//! cells currently show. Animated widgets that scramble or stagger their
//! visible output still announce the final text every pass, so assistive
//! consumers (and tests) always see the real content.

use crate::buffer::Buffer;
use marquee_core::geometry::Rect;

/// The render target for one pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The visible cell grid.
    pub buffer: Buffer,
    announcements: Vec<String>,
}

impl Frame {
    /// Create a frame with a cleared buffer of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            announcements: Vec::new(),
        }
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.buffer.width()
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Full frame area at the origin.
    #[must_use]
    pub const fn area(&self) -> Rect {
        self.buffer.area()
    }

    /// Declare text as part of this pass's true content.
    ///
    /// Duplicate announcements within one pass are collapsed.
    pub fn announce(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() || self.announcements.iter().any(|a| *a == text) {
            return;
        }
        self.announcements.push(text);
    }

    /// Announcements declared so far this pass, in declaration order.
    #[must_use]
    pub fn announcements(&self) -> &[String] {
        &self.announcements
    }

    /// Clear the grid and announcements for the next pass.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.announcements.clear();
    }

    /// Resize the underlying buffer (content is discarded).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.buffer.resize(width, height);
    }
}
