//! Runtime layer for catch.
//!
//! Owns the poll driver state machine and the collaborators it is wired to:
//! the append-only daily file sink, the console sink and the wall clock.

pub mod clock;
pub mod driver;
pub mod sinks;

pub use catch_core as core;
pub use catch_data as data;
