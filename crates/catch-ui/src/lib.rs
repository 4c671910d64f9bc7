//! Console presentation layer for catch.
//!
//! Maps the abstract emphasis tags chosen by the renderer to terminal styles
//! and paints display records for the console. Nothing outside this crate
//! knows about colours.

pub mod console;
pub mod themes;

pub use catch_core as core;
