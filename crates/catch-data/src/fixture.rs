//! Session batches replayed from a JSON file.
//!
//! The file holds an array of batches, each batch an array of session
//! records in the order a live server would return them:
//!
//! ```json
//! [
//!   [{"id": 1, "user": "app", "command": "Query", "statement_text": "SELECT 1"}],
//!   []
//! ]
//! ```

use std::path::Path;

use catch_core::{CatchError, Result, SessionRecord};
use tracing::debug;

use crate::source::SessionSource;

/// Source returning one fixture batch per poll, then empty batches.
#[derive(Debug)]
pub struct FixtureSource {
    batches: std::vec::IntoIter<Vec<SessionRecord>>,
}

impl FixtureSource {
    /// Load batches from `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatchError::Config(format!("cannot read fixture {}: {}", path.display(), e))
        })?;
        let source = Self::from_json(&content)?;
        debug!(
            "Loaded {} fixture batches from {}",
            source.batches.len(),
            path.display()
        );
        Ok(source)
    }

    /// Parse batches from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let batches: Vec<Vec<SessionRecord>> = serde_json::from_str(json)?;
        Ok(Self {
            batches: batches.into_iter(),
        })
    }
}

impl SessionSource for FixtureSource {
    fn fetch(&mut self) -> Result<Vec<SessionRecord>> {
        Ok(self.batches.next().unwrap_or_default())
    }
}
