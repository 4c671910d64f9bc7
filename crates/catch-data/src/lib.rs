//! Data ingestion layer for catch.
//!
//! Defines the session-source contract consumed by the poll driver and its
//! implementations: the live MySQL process-list query and a JSON fixture
//! source for offline runs. Also reads MySQL-style option files for
//! credentials.

pub mod credentials;
pub mod fixture;
pub mod processlist;
pub mod source;

pub use catch_core as core;
pub use source::SessionSource;
