//! Windowed counters for debug-mode reporting.

use chrono::{DateTime, TimeDelta, TimeZone};

/// Length of one reporting window in milliseconds.
pub const REPORT_WINDOW_MS: i64 = 5_000;

/// `true` when a statement counts toward the debug statistics.
///
/// Deliberately looser than the classifier's read-query test: any mention of
/// `count(` or `limit` counts as well, case-insensitively.
pub fn is_tracked_query(statement: &str) -> bool {
    let lower = statement.to_lowercase();
    lower.contains("select") || lower.contains("count(") || lower.contains("limit")
}

/// Query-like records seen since the last report.
///
/// Owned by the poll driver; constructed at startup and never persisted.
#[derive(Debug, Clone)]
pub struct RollingStats<Tz: TimeZone> {
    count: u64,
    last_report: DateTime<Tz>,
}

impl<Tz: TimeZone> RollingStats<Tz> {
    pub fn new(started_at: DateTime<Tz>) -> Self {
        Self {
            count: 0,
            last_report: started_at,
        }
    }

    /// Count one tracked record and return the running total.
    pub fn record(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn last_report(&self) -> &DateTime<Tz> {
        &self.last_report
    }

    /// Close the window if more than [`REPORT_WINDOW_MS`] has passed.
    ///
    /// Returns the count for the closed window and resets the counter, or
    /// `None` while the window is still open.
    pub fn take_report(&mut self, now: DateTime<Tz>) -> Option<u64> {
        let elapsed = now.clone() - self.last_report.clone();
        if elapsed <= TimeDelta::milliseconds(REPORT_WINDOW_MS) {
            return None;
        }
        let closed = self.count;
        self.count = 0;
        self.last_report = now;
        Some(closed)
    }
}

/// One-line summary printed when a window closes.
pub fn report_line(count: u64) -> String {
    format!("Stats: Captured {} queries in last 5 seconds", count)
}
