use std::time::Duration;

use catch_core::settings::Settings;
use catch_data::credentials::Credentials;
use catch_data::processlist::{ConnectionTarget, ProcessListSource};
use catch_runtime::driver::DriverConfig;
use catch_ui::console::paint_line;
use catch_ui::themes::Theme;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const CHECK_MARK: &str = "✓";

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` name to a tracing filter directive.
fn level_directive(log_level: &str) -> &str {
    match log_level {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Diagnostics go to stderr so that stdout carries only captured records and
/// status lines. Falls back to `"info"` if the level is not recognised.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let filter =
        EnvFilter::try_new(level_directive(&upper)).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Console colour ─────────────────────────────────────────────────────────────

/// Decide once whether console output carries colour.
///
/// Colour needs a terminal on stdout and no `--no-color`; piped or redirected
/// output stays plain.
pub fn console_colorize(no_color: bool, stdout_is_terminal: bool) -> bool {
    !no_color && stdout_is_terminal
}

// ── Connection bootstrap ───────────────────────────────────────────────────────

/// Connect to the target server and confirm it answers.
///
/// Credentials come from the option file; host and port from the flags with
/// option-file and built-in fallbacks. Any failure here is fatal.
pub fn connect(
    settings: &Settings,
    theme: &Theme,
    colorize: bool,
) -> anyhow::Result<ProcessListSource> {
    let creds = Credentials::load_from(&settings.defaults_file_path());
    let target = ConnectionTarget {
        host: creds.resolve_host(settings.host.as_deref()),
        port: creds.resolve_port(settings.port),
    };
    tracing::debug!(host = %target.host, port = target.port, "connecting");

    let mut source = ProcessListSource::connect(target, &creds)?;
    source.check()?;

    let banner = format!(
        "Connected successfully to {} {}",
        source.target().host,
        CHECK_MARK
    );
    println!("{}", paint_line(&banner, theme.connected, colorize));
    Ok(source)
}

// ── Driver configuration ───────────────────────────────────────────────────────

/// Translate CLI settings into the plain values the poll driver consumes.
pub fn driver_config(settings: &Settings, theme: Theme, colorize: bool) -> DriverConfig {
    DriverConfig {
        output_dir: settings.output_dir.clone(),
        file_prefix: settings.file_prefix.clone(),
        interval: Duration::from_millis(settings.sleep_ms),
        mode: settings.filter_mode(),
        verbose: settings.verbose,
        colorize,
        theme,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
