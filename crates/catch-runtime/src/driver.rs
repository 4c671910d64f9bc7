//! Poll driver.
//!
//! One cycle runs to completion before the next begins:
//!
//! ```text
//! Idle ──▶ Polling ──▶ Processing ──▶ Sleeping ──┐
//!             ▲   └── (source error) ──▶─┘       │
//!             └──────────────────────────────────┘
//! ```
//!
//! During processing every record of the batch is threaded through filter,
//! classifier, renderer and both sinks in the order the source returned it.
//! Nothing here is fatal: a failed poll drops the cycle, a failed file write
//! drops that record's file copy and the console still shows it.

use std::path::PathBuf;
use std::time::Duration;

use catch_core::classifier::trace_kind;
use catch_core::filter::{self, FilterMode, Verdict};
use catch_core::naming::daily_path;
use catch_core::render::render;
use catch_core::stats::{is_tracked_query, report_line, RollingStats};
use catch_core::SessionRecord;
use catch_data::SessionSource;
use catch_ui::console::paint;
use catch_ui::themes::Theme;
use chrono::Local;
use tracing::{debug, error, trace, warn};

use crate::clock::Clock;
use crate::sinks::{ConsoleSink, FileSink};

/// Statement characters shown in debug and verbose trace lines.
const TRACE_PREVIEW_CHARS: usize = 100;

// ── Public types ──────────────────────────────────────────────────────────────

/// Plain configuration values consumed by the driver.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Directory holding the daily files.
    pub output_dir: PathBuf,
    /// Daily file prefix; empty means the default prefix.
    pub file_prefix: String,
    /// Pause between cycles.
    pub interval: Duration,
    pub mode: FilterMode,
    /// Emit a trace line for every kept record.
    pub verbose: bool,
    /// Apply emphasis on the console.
    pub colorize: bool,
    pub theme: Theme,
}

/// Driver lifecycle state.
#[derive(Debug)]
pub enum PollState {
    Idle,
    Polling,
    Processing(Vec<SessionRecord>),
    Sleeping,
}

/// What happened during one processed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Daily file targeted by this cycle.
    pub path: PathBuf,
    pub fetched: usize,
    /// Records that passed the filter and reached the console.
    pub emitted: usize,
    /// Kept records whose file copy could not be written.
    pub file_failures: usize,
}

// ── PollDriver ────────────────────────────────────────────────────────────────

/// Capture loop wired to injectable collaborators.
pub struct PollDriver<S, F, C, K> {
    source: S,
    file: F,
    console: C,
    clock: K,
    config: DriverConfig,
    stats: RollingStats<Local>,
    last_cycle: Option<CycleReport>,
}

impl<S, F, C, K> PollDriver<S, F, C, K>
where
    S: SessionSource,
    F: FileSink,
    C: ConsoleSink,
    K: Clock,
{
    pub fn new(source: S, file: F, console: C, clock: K, config: DriverConfig) -> Self {
        let stats = RollingStats::new(clock.now());
        Self {
            source,
            file,
            console,
            clock,
            config,
            stats,
            last_cycle: None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run forever: every poll is followed by the configured pause.
    ///
    /// The only exit is dropping the future, which callers do on shutdown.
    /// Cycles never await mid-batch, so a dropped future always leaves the
    /// last cycle fully flushed.
    pub async fn run(&mut self) {
        let mut state = PollState::Idle;
        loop {
            state = match state {
                PollState::Sleeping => {
                    tokio::time::sleep(self.config.interval).await;
                    PollState::Polling
                }
                other => self.advance(other),
            };
        }
    }

    /// Perform one synchronous transition.
    ///
    /// `Sleeping` transitions straight to `Polling`; the pause itself
    /// belongs to [`PollDriver::run`].
    pub fn advance(&mut self, state: PollState) -> PollState {
        match state {
            PollState::Idle | PollState::Sleeping => PollState::Polling,
            PollState::Polling => match self.source.fetch() {
                Ok(batch) => PollState::Processing(batch),
                Err(e) => {
                    error!(error = %e, "session poll failed; skipping cycle");
                    PollState::Sleeping
                }
            },
            PollState::Processing(batch) => {
                let report = self.process(batch);
                self.last_cycle = Some(report);
                PollState::Sleeping
            }
        }
    }

    /// Poll and process one batch. Returns `None` when the poll failed.
    pub fn run_cycle(&mut self) -> Option<CycleReport> {
        self.last_cycle = None;
        let mut state = self.advance(PollState::Polling);
        if matches!(state, PollState::Processing(_)) {
            state = self.advance(state);
        }
        debug_assert!(matches!(state, PollState::Sleeping));
        self.last_cycle.clone()
    }

    /// Report for the most recently processed batch.
    pub fn last_cycle(&self) -> Option<&CycleReport> {
        self.last_cycle.as_ref()
    }

    pub fn stats(&self) -> &RollingStats<Local> {
        &self.stats
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn file_sink(&self) -> &F {
        &self.file
    }

    // ── Private implementation ────────────────────────────────────────────

    fn process(&mut self, batch: Vec<SessionRecord>) -> CycleReport {
        let mode = self.config.mode;
        let path = daily_path(
            &self.config.output_dir,
            &self.config.file_prefix,
            self.clock.now().date_naive(),
        );
        let mut report = CycleReport {
            path: path.clone(),
            fetched: batch.len(),
            ..Default::default()
        };

        let file_open = match self.file.open(&path) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "cannot open output file; records go to the console only");
                false
            }
        };

        for record in &batch {
            match filter::evaluate(record, mode) {
                Verdict::Keep => {}
                verdict => {
                    trace!(id = record.id, ?verdict, "record dropped");
                    continue;
                }
            }

            if self.config.verbose {
                self.console.write_line(&verbose_line(record));
            }

            if mode.debug && is_tracked_query(record.statement()) {
                let n = self.stats.record();
                self.console.write_line(&detected_line(n, record));
            }

            let display = render(record, self.clock.now().naive_local());

            if file_open {
                if let Err(e) = self.file.write(&display.plain()) {
                    warn!(id = record.id, error = %e, "error writing to file");
                    report.file_failures += 1;
                }
            } else {
                report.file_failures += 1;
            }

            self.console
                .write_record(&paint(&display, &self.config.theme, self.config.colorize));
            report.emitted += 1;
        }

        if mode.debug {
            if let Some(count) = self.stats.take_report(self.clock.now()) {
                self.console.write_line(&report_line(count));
            }
        }

        if file_open {
            if let Err(e) = self.file.close() {
                warn!(error = %e, "error flushing output file");
            }
        }

        debug!(
            fetched = report.fetched,
            emitted = report.emitted,
            file_failures = report.file_failures,
            "cycle complete"
        );
        report
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn preview(statement: &str) -> String {
    statement.chars().take(TRACE_PREVIEW_CHARS).collect()
}

fn verbose_line(record: &SessionRecord) -> String {
    format!(
        "Debug: Found {} query - State: {}, Time: {}, Info: {}...",
        trace_kind(record.statement()),
        record.state(),
        record.elapsed_seconds,
        preview(record.statement()),
    )
}

fn detected_line(n: u64, record: &SessionRecord) -> String {
    format!(
        "Debug: Query #{} detected: {}...\nState: {}, Time: {}\n",
        n,
        preview(record.statement()),
        record.state(),
        record.elapsed_seconds,
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
