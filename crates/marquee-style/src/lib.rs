#![forbid(unsafe_code)]

//! Style types for terminal UI styling with CSS-like cascading semantics.

mod style;

pub use style::{Style, StyleFlags};
