#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, frames, and ANSI presentation.
//!
//! # Role in Marquee
//! `marquee-render` is the deterministic rendering engine. Widgets draw into
//! a [`frame::Frame`], which wraps a [`buffer::Buffer`] of styled cells; the
//! [`presenter::Presenter`] turns a buffer into ANSI bytes for the terminal.
//!
//! # Primary responsibilities
//! - **Cell/Buffer**: 2D grid of fixed-size cells with bounds-checked access.
//! - **Frame**: rendering surface plus the semantic announcement channel
//!   (text that must reach assistive consumers regardless of what the cells
//!   show).
//! - **Presenter**: stateful ANSI emitter with minimal SGR churn.
//! - **Drawing**: border character sets and low-level fill helpers.
//!
//! # How it fits in the system
//! `marquee-runtime` calls your model's `view()` to render into a `Frame`,
//! then presents the buffer through a `Presenter`. Everything here is
//! deterministic: the same buffer always yields the same bytes.

pub mod buffer;
pub mod cell;
pub mod drawing;
pub mod frame;
pub mod presenter;

pub use buffer::Buffer;
pub use cell::{Cell, PackedRgba};
pub use frame::Frame;
pub use presenter::Presenter;
