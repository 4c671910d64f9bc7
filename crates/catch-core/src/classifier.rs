//! Statement classification by keyword substring.
//!
//! This is a heuristic, not a SQL parser. The statement is lower-cased and
//! tested for keyword containment in a fixed precedence order; the first hit
//! wins. A keyword appearing inside an identifier or string literal (for
//! example `SELECT * FROM updates`) is classified by whichever keyword comes
//! first in the precedence list, never by what the statement actually does.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inferred statement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Select,
    Insert,
    Update,
    Delete,
    /// `create`, `alter` or `drop`.
    Ddl,
    Unknown,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Select => "select",
            Category::Insert => "insert",
            Category::Update => "update",
            Category::Delete => "delete",
            Category::Ddl => "ddl",
            Category::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Keywords in precedence order, each paired with the category it selects.
const PRECEDENCE: &[(&str, Category)] = &[
    ("select", Category::Select),
    ("insert", Category::Insert),
    ("update", Category::Update),
    ("delete", Category::Delete),
    ("create", Category::Ddl),
    ("alter", Category::Ddl),
    ("drop", Category::Ddl),
];

/// Classify a statement. Empty text is always [`Category::Unknown`].
///
/// # Examples
///
/// ```
/// use catch_core::classifier::{classify, Category};
///
/// assert_eq!(classify("SELECT * FROM orders"), Category::Select);
/// assert_eq!(classify("Drop TABLE tmp"), Category::Ddl);
/// assert_eq!(classify("SHOW PROCESSLIST"), Category::Unknown);
/// assert_eq!(classify(""), Category::Unknown);
/// ```
pub fn classify(statement: &str) -> Category {
    if statement.is_empty() {
        return Category::Unknown;
    }
    let lower = statement.to_lowercase();
    PRECEDENCE
        .iter()
        .find(|(kw, _)| lower.contains(kw))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Unknown)
}

/// `true` when the statement contains any DML/DDL keyword.
pub fn is_query_like(statement: &str) -> bool {
    classify(statement) != Category::Unknown
}

/// Coarse label used by the verbose trace: `SELECT`, `SHOW` or `unknown`.
pub fn trace_kind(statement: &str) -> &'static str {
    let lower = statement.to_lowercase();
    if lower.contains("select") {
        "SELECT"
    } else if lower.contains("show") {
        "SHOW"
    } else {
        "unknown"
    }
}
