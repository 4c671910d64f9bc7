//! Per-record inclusion rules.
//!
//! Each record is judged on its own; nothing here looks at the rest of the
//! batch or keeps state between calls.

use crate::classifier::is_query_like;
use crate::models::SessionRecord;

/// Table reference found in the process-list query issued by catch itself.
pub const SESSION_TABLE_MARKER: &str = "FROM information_schema.processlist";

/// Exclusion clause found in the process-list query issued by catch itself.
pub const EXCLUSION_CLAUSE_MARKER: &str = "WHERE command != 'Sleep'";

/// Mode flags that change what gets emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterMode {
    /// Drop records whose statement has no DML/DDL keyword.
    pub queries_only: bool,
    /// Keep catch's own polling query in the output.
    pub debug: bool,
}

/// Outcome of running the rules over one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    /// The record is the process-list query issued by this tool.
    OwnQuery,
    /// Queries-only mode and the statement is not query-like.
    NotAQuery,
}

impl Verdict {
    pub fn is_keep(self) -> bool {
        self == Verdict::Keep
    }
}

/// `true` when the statement is the tool's own session-enumeration query.
///
/// Both markers must be present; the match is case-sensitive because the
/// query text is produced verbatim by the process-list source.
pub fn is_own_query(statement: &str) -> bool {
    statement.contains(SESSION_TABLE_MARKER) && statement.contains(EXCLUSION_CLAUSE_MARKER)
}

/// Apply the inclusion rules in order: self-exclusion, then queries-only.
pub fn evaluate(record: &SessionRecord, mode: FilterMode) -> Verdict {
    let statement = record.statement();

    if !mode.debug && is_own_query(statement) {
        return Verdict::OwnQuery;
    }
    if mode.queries_only && !is_query_like(statement) {
        return Verdict::NotAQuery;
    }
    Verdict::Keep
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(statement: Option<&str>) -> SessionRecord {
        SessionRecord {
            id: 1,
            user: "root".to_string(),
            host: "localhost".to_string(),
            database: None,
            command: "Query".to_string(),
            elapsed_seconds: 0,
            state: Some("executing".to_string()),
            statement_text: statement.map(str::to_string),
        }
    }

    const OWN: &str = "SELECT ID, USER FROM information_schema.processlist WHERE command != 'Sleep' ORDER BY TIME DESC";

    // ── self-exclusion ────────────────────────────────────────────────────

    #[test]
    fn test_own_query_dropped_without_debug() {
        let v = evaluate(&record(Some(OWN)), FilterMode::default());
        assert_eq!(v, Verdict::OwnQuery);
    }

    #[test]
    fn test_own_query_kept_with_debug() {
        let mode = FilterMode {
            debug: true,
            ..Default::default()
        };
        assert_eq!(evaluate(&record(Some(OWN)), mode), Verdict::Keep);
    }

    #[test]
    fn test_own_query_dropped_regardless_of_other_fields() {
        let mut r = record(Some(OWN));
        r.user = "someone_else".to_string();
        r.id = 99_999;
        r.state = None;
        r.database = Some("prod".to_string());
        assert_eq!(evaluate(&r, FilterMode::default()), Verdict::OwnQuery);
    }

    #[test]
    fn test_one_marker_alone_is_not_own_query() {
        assert!(!is_own_query("SELECT * FROM information_schema.processlist"));
        assert!(!is_own_query("SELECT * FROM t WHERE command != 'Sleep'"));
        assert!(is_own_query(
            "FROM information_schema.processlist WHERE command != 'Sleep'"
        ));
    }

    #[test]
    fn test_own_query_self_exclusion_precedes_queries_only() {
        let mode = FilterMode {
            queries_only: true,
            debug: false,
        };
        assert_eq!(evaluate(&record(Some(OWN)), mode), Verdict::OwnQuery);
    }

    // ── queries-only ──────────────────────────────────────────────────────

    #[test]
    fn test_queries_only_drops_show_tables() {
        let mode = FilterMode {
            queries_only: true,
            debug: false,
        };
        assert_eq!(
            evaluate(&record(Some("SHOW TABLES")), mode),
            Verdict::NotAQuery
        );
    }

    #[test]
    fn test_queries_only_keeps_select() {
        let mode = FilterMode {
            queries_only: true,
            debug: false,
        };
        assert!(evaluate(&record(Some("SELECT 1")), mode).is_keep());
    }

    #[test]
    fn test_queries_only_treats_absent_and_empty_alike() {
        let mode = FilterMode {
            queries_only: true,
            debug: false,
        };
        assert_eq!(evaluate(&record(None), mode), Verdict::NotAQuery);
        assert_eq!(evaluate(&record(Some("")), mode), Verdict::NotAQuery);
    }

    #[test]
    fn test_default_mode_keeps_everything_else() {
        assert!(evaluate(&record(None), FilterMode::default()).is_keep());
        assert!(evaluate(&record(Some("SHOW TABLES")), FilterMode::default()).is_keep());
    }
}
