#![forbid(unsafe_code)]

//! The IONWAVE event page: a long-form, scrollable terminal landing page
//! with a sticky nav, scramble-reveal headings, and a quality-tiered
//! starfield backdrop.
//!
//! The binary entry point lives in `main.rs`; everything else is library
//! code so the integration tests can drive the page headlessly.

pub mod app;
pub mod cli;
pub mod content;
pub mod sections;
pub mod theme;
