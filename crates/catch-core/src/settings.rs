use clap::Parser;
use std::path::PathBuf;

use crate::filter::FilterMode;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Capture live database session activity to a daily log
#[derive(Parser, Debug, Clone)]
#[command(
    name = "catch",
    about = "Capture live database session activity to a daily log",
    version
)]
pub struct Settings {
    /// Database host address (falls back to the option file, then localhost)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Database port (falls back to the option file, then 3306)
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Output file name prefix, without the date
    #[arg(short = 'f', long = "file", default_value = "load_test")]
    pub file_prefix: String,

    /// Directory the daily files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Pause between polls in milliseconds
    #[arg(short = 's', long = "sleep-ms", default_value = "1000")]
    pub sleep_ms: u64,

    /// Show only DML/DDL statements
    #[arg(short = 'q', long)]
    pub queries_only: bool,

    /// Debug mode: include catch's own query and report query counts
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Verbose mode: trace every emitted session
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable colours on the console
    #[arg(long)]
    pub no_color: bool,

    /// Console palette
    #[arg(long, default_value = "auto", value_parser = ["auto", "dark", "light"])]
    pub theme: String,

    /// Option file holding user=, password= and host= lines
    #[arg(long, value_name = "PATH")]
    pub defaults_file: Option<PathBuf>,

    /// Read session batches from a JSON fixture instead of a live server
    #[arg(long, value_name = "PATH")]
    pub source_file: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse process arguments and apply derived overrides.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but from an explicit argument list.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// `--debug` and `--verbose` force the log level to DEBUG.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug || settings.verbose {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Mode flags consumed by the inclusion filter.
    pub fn filter_mode(&self) -> FilterMode {
        FilterMode {
            queries_only: self.queries_only,
            debug: self.debug,
        }
    }

    /// Option file path, defaulting to `~/.my.cnf`.
    pub fn defaults_file_path(&self) -> PathBuf {
        self.defaults_file.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".my.cnf")
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
