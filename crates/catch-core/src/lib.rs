//! Core domain layer for catch.
//!
//! Holds the session record model, the statement classifier, the inclusion
//! filter, the record renderer with its abstract emphasis tags, the rolling
//! debug statistics, output file naming, CLI settings and the error taxonomy.
//! Nothing in here touches a database, a terminal or the filesystem.

pub mod classifier;
pub mod error;
pub mod filter;
pub mod models;
pub mod naming;
pub mod render;
pub mod settings;
pub mod stats;

pub use error::{CatchError, Result};
pub use models::SessionRecord;
