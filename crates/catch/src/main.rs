mod bootstrap;

use std::io::IsTerminal;

use anyhow::Result;
use catch_core::settings::Settings;
use catch_data::fixture::FixtureSource;
use catch_data::SessionSource;
use catch_runtime::clock::SystemClock;
use catch_runtime::driver::PollDriver;
use catch_runtime::sinks::{AppendFileSink, StdoutConsole};
use catch_ui::themes::Theme;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("catch v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Prefix: {}, Interval: {} ms, Queries only: {}, Debug: {}",
        settings.file_prefix,
        settings.sleep_ms,
        settings.queries_only,
        settings.debug
    );

    let theme = Theme::from_name(&settings.theme);
    let colorize =
        bootstrap::console_colorize(settings.no_color, std::io::stdout().is_terminal());

    let source: Box<dyn SessionSource> = match &settings.source_file {
        Some(path) => {
            tracing::info!("Reading sessions from fixture {}", path.display());
            Box::new(FixtureSource::open(path)?)
        }
        None => Box::new(bootstrap::connect(&settings, &theme, colorize)?),
    };

    let config = bootstrap::driver_config(&settings, theme, colorize);
    let mut driver = PollDriver::new(
        source,
        AppendFileSink::new(),
        StdoutConsole,
        SystemClock,
        config,
    );

    // The capture loop never returns on its own; Ctrl+C is the normal exit.
    // Cycles do not await mid-batch, so the last cycle's file is flushed.
    tokio::select! {
        _ = driver.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; stopping capture");
        }
    }

    Ok(())
}
