#![forbid(unsafe_code)]

//! Core: geometry, input events, and environment capability snapshots.
//!
//! # Role in Marquee
//! `marquee-core` is the foundation layer. It owns the cell-space geometry
//! types, the normalized input events that the runtime consumes, and the
//! one-shot capability snapshot that decides how much decoration a session
//! can afford.
//!
//! # Primary responsibilities
//! - **Rect/Position**: cell-space geometry shared by layout and rendering.
//! - **Event**: canonical input events (keys, mouse, resize, focus, tick).
//! - **CapabilitySnapshot**: environment signals read once per session, with
//!   a stackable test override mechanism.
//! - **FrameCoalescer**: single-slot pending flag that collapses event storms
//!   into at most one recompute per rendered frame.
//!
//! # How it fits in the system
//! The runtime (`marquee-runtime`) consumes `marquee-core::Event` values and
//! drives application models. The render kernel (`marquee-render`) is
//! independent of input; `marquee-core` is the bridge between terminal I/O
//! and the deterministic render pipeline.

pub mod capability;
pub mod coalescer;
pub mod event;
pub mod geometry;

pub use capability::{CapabilityOverride, CapabilitySnapshot, OverrideGuard};
pub use coalescer::FrameCoalescer;
pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::{Position, Rect};
