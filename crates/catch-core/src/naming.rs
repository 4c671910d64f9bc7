//! Daily output file naming.
//!
//! The filename is recomputed every cycle from the current local date, so a
//! process that stays up across midnight starts a new file on its first
//! cycle of the new day.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Prefix used when the operator does not supply one.
pub const DEFAULT_PREFIX: &str = "load_test";

/// `<prefix>-<YYYY-MM-DD>.txt`, falling back to [`DEFAULT_PREFIX`] when
/// `prefix` is empty.
///
/// # Examples
///
/// ```
/// use catch_core::naming::daily_filename;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(daily_filename("", day), "load_test-2024-03-01.txt");
/// assert_eq!(daily_filename("replay", day), "replay-2024-03-01.txt");
/// ```
pub fn daily_filename(prefix: &str, date: NaiveDate) -> String {
    let prefix = if prefix.is_empty() { DEFAULT_PREFIX } else { prefix };
    format!("{}-{}.txt", prefix, date.format("%Y-%m-%d"))
}

/// Full path of the daily file inside `dir`.
pub fn daily_path(dir: &Path, prefix: &str, date: NaiveDate) -> PathBuf {
    dir.join(daily_filename(prefix, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_prefix() {
        assert_eq!(daily_filename("", day(2024, 1, 9)), "load_test-2024-01-09.txt");
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(
            daily_filename("prod-db1", day(2024, 12, 31)),
            "prod-db1-2024-12-31.txt"
        );
    }

    #[test]
    fn test_consecutive_days_differ_only_in_date() {
        let before = daily_filename("cap", day(2024, 2, 29));
        let after = daily_filename("cap", day(2024, 3, 1));
        assert_ne!(before, after);
        assert_eq!(before.replace("2024-02-29", "DATE"), after.replace("2024-03-01", "DATE"));
    }

    #[test]
    fn test_daily_path_joins_dir() {
        let p = daily_path(Path::new("/tmp/captures"), "cap", day(2024, 3, 1));
        assert_eq!(p, PathBuf::from("/tmp/captures/cap-2024-03-01.txt"));
    }
}
