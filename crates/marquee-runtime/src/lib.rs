#![forbid(unsafe_code)]

//! Elm-style runtime for terminal applications.
//!
//! # Role in Marquee
//! `marquee-runtime` owns the update/view loop. It separates state (the
//! [`Model`]) from rendering (the model's `view`) and uses a command value
//! ([`Cmd`]) for the few side effects a page needs. The terminal itself is
//! managed by an RAII [`session::TerminalSession`] so raw mode and the
//! alternate screen are restored on every exit path, including panics.
//!
//! # How it fits in the system
//! The loop polls the backend for input, translates it into
//! `marquee_core::Event`, feeds the model, renders into a
//! `marquee_render::Frame`, and presents the buffer. Between input events it
//! emits `Event::Tick` at the configured frame cadence, which is how
//! animations advance.

pub mod program;
pub mod session;
pub mod translate;

pub use program::{Cmd, Model, Program, ProgramConfig};
