use serde::{Deserialize, Serialize};

/// Snapshot of one active server session, as returned by a single poll.
///
/// Records are produced by a session source and live for exactly one pass
/// through the pipeline. Nothing retains them once they are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Connection id. Unique at a point in time, may be reused later.
    pub id: u64,
    /// Account the session authenticated as.
    #[serde(default)]
    pub user: String,
    /// Client host (usually `host:port`).
    #[serde(default)]
    pub host: String,
    /// Default schema, absent when the session is not bound to one.
    #[serde(default)]
    pub database: Option<String>,
    /// Current command kind, e.g. `"Query"`.
    #[serde(default)]
    pub command: String,
    /// Seconds spent in the current state.
    #[serde(default)]
    pub elapsed_seconds: u64,
    /// Engine-reported execution state.
    #[serde(default)]
    pub state: Option<String>,
    /// Currently executing statement, possibly truncated by the server.
    #[serde(default)]
    pub statement_text: Option<String>,
}

impl SessionRecord {
    /// Statement text with absent treated as empty.
    pub fn statement(&self) -> &str {
        self.statement_text.as_deref().unwrap_or("")
    }

    /// State with absent treated as empty.
    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or("")
    }

    /// Schema name with absent treated as empty.
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or("")
    }
}
