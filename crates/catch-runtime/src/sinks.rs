//! Output sinks: the append-only daily file and the console.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use catch_core::{CatchError, Result};
use tracing::debug;

// ── File sink ─────────────────────────────────────────────────────────────────

/// Destination for plain record text, opened once per poll cycle.
pub trait FileSink {
    /// Open (creating if needed) `path` for appending.
    fn open(&mut self, path: &Path) -> Result<()>;
    /// Buffer one rendered record.
    fn write(&mut self, text: &str) -> Result<()>;
    /// Flush buffered records and release the file.
    fn close(&mut self) -> Result<()>;
}

/// Buffered append-mode writer over the real filesystem.
///
/// Writes accumulate in memory and reach the disk when the cycle closes the
/// file, so there is one flush per cycle rather than per record.
#[derive(Debug, Default)]
pub struct AppendFileSink {
    current: Option<(PathBuf, BufWriter<File>)>,
}

impl AppendFileSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the file opened for the current cycle, if any.
    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_ref().map(|(p, _)| p.as_path())
    }
}

impl FileSink for AppendFileSink {
    fn open(&mut self, path: &Path) -> Result<()> {
        // A file left open by an earlier failed cycle is flushed first.
        self.close()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| CatchError::Sink {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| CatchError::Sink {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Opened {} for append", path.display());
        self.current = Some((path.to_path_buf(), BufWriter::new(file)));
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let (path, writer) = self.current.as_mut().ok_or(CatchError::SinkNotOpen)?;
        writer
            .write_all(text.as_bytes())
            .map_err(|source| CatchError::Sink {
                path: path.clone(),
                source,
            })
    }

    fn close(&mut self) -> Result<()> {
        match self.current.take() {
            Some((path, mut writer)) => writer
                .flush()
                .map_err(|source| CatchError::Sink { path, source }),
            None => Ok(()),
        }
    }
}

// ── Console sink ──────────────────────────────────────────────────────────────

/// Destination for painted records and operational lines.
///
/// Console output is best effort: a closed or broken terminal must not stop
/// the capture, so these methods do not return errors.
pub trait ConsoleSink {
    /// Write one painted record exactly as given.
    fn write_record(&mut self, text: &str);
    /// Write a status line followed by a newline.
    fn write_line(&mut self, line: &str);
}

/// Unbuffered writer to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    fn emit(&self, bytes: &[u8]) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = out.write_all(bytes).and_then(|_| out.flush()) {
            debug!(error = %e, "console write failed");
        }
    }
}

impl ConsoleSink for StdoutConsole {
    fn write_record(&mut self, text: &str) {
        self.emit(text.as_bytes());
    }

    fn write_line(&mut self, line: &str) {
        self.emit(format!("{}\n", line).as_bytes());
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
