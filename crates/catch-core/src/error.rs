use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by catch.
///
/// Inside the capture pipeline none of these are fatal: data-source errors
/// drop the current cycle and sink errors drop a single file write. Only
/// [`CatchError::Config`] ends the process, and only at startup.
#[derive(Error, Debug)]
pub enum CatchError {
    /// The session query failed.
    #[error("Session query failed: {0}")]
    DataSource(String),

    /// The daily output file could not be opened, written or flushed.
    #[error("Failed to write output file {path}: {source}")]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record write was attempted while no output file is open.
    #[error("No output file is open for this cycle")]
    SinkNotOpen,

    /// Credentials, option file or connection setup is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A session fixture file was not valid JSON.
    #[error("Failed to parse session fixture: {0}")]
    FixtureParse(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the catch crates.
pub type Result<T> = std::result::Result<T, CatchError>;
