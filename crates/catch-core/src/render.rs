//! Record layout and emphasis selection.
//!
//! Rendering is split in two: [`render`] decides *what* deserves attention
//! by attaching an abstract [`Emphasis`] to the state and statement fields,
//! and [`DisplayRecord::layout`] places already-painted field text into the
//! fixed multi-line record. Mapping emphasis to terminal colours happens in
//! the presentation crate; the plain layout used for files never sees it.

use std::fmt;

use chrono::NaiveDateTime;

use crate::classifier::{classify, Category};
use crate::models::SessionRecord;

/// Banner timestamp format.
pub const BANNER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const BANNER_RULE: &str = "***************************";

/// Abstract visual-importance tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    /// No rule matched; the field keeps its default look.
    #[default]
    Neutral,
    /// State: session is logging in.
    Alert,
    /// State: server is receiving the statement from the client.
    Info,
    /// State: alongside any read query.
    Healthy,
    /// Statement: read query without an aggregate or bound.
    StandardQuery,
    /// Statement: read query containing `count(*)`.
    StrongAggregate,
    /// Statement: read query containing `limit`.
    StrongBounded,
    /// Statement: insert.
    StrongSuccess,
    /// Statement: update.
    StrongWarning,
    /// Statement: delete.
    StrongDanger,
    /// Statement: create / alter / drop.
    StrongStructural,
}

/// Transient, renderable view of a [`SessionRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord<'a> {
    pub record: &'a SessionRecord,
    /// Wall-clock instant the record was rendered.
    pub rendered_at: NaiveDateTime,
    pub category: Category,
    pub state_emphasis: Emphasis,
    pub statement_emphasis: Emphasis,
}

/// Classify the record and pick emphasis for its state and statement.
pub fn render(record: &SessionRecord, rendered_at: NaiveDateTime) -> DisplayRecord<'_> {
    let category = classify(record.statement());
    let (state_emphasis, statement_emphasis) = select_emphasis(record, category);
    DisplayRecord {
        record,
        rendered_at,
        category,
        state_emphasis,
        statement_emphasis,
    }
}

/// Returns `(state, statement)` emphasis; the first matching rule wins.
fn select_emphasis(record: &SessionRecord, category: Category) -> (Emphasis, Emphasis) {
    match (record.state(), category) {
        ("login", _) => (Emphasis::Alert, Emphasis::Neutral),
        ("Receiving from client", _) => (Emphasis::Info, Emphasis::Neutral),
        (_, Category::Select) => {
            let lower = record.statement().to_lowercase();
            let statement = if lower.contains("count(*)") {
                Emphasis::StrongAggregate
            } else if lower.contains("limit") {
                Emphasis::StrongBounded
            } else {
                Emphasis::StandardQuery
            };
            (Emphasis::Healthy, statement)
        }
        (_, Category::Insert) => (Emphasis::Neutral, Emphasis::StrongSuccess),
        (_, Category::Update) => (Emphasis::Neutral, Emphasis::StrongWarning),
        (_, Category::Delete) => (Emphasis::Neutral, Emphasis::StrongDanger),
        (_, Category::Ddl) => (Emphasis::Neutral, Emphasis::StrongStructural),
        (_, Category::Unknown) => (Emphasis::Neutral, Emphasis::Neutral),
    }
}

impl DisplayRecord<'_> {
    /// Raw state text (empty when absent).
    pub fn state(&self) -> &str {
        self.record.state()
    }

    /// Raw statement text (empty when absent).
    pub fn statement(&self) -> &str {
        self.record.statement()
    }

    /// The record as written to the daily file: no emphasis applied.
    pub fn plain(&self) -> String {
        self.layout(&self.state(), &self.statement())
    }

    /// Lay out the record, substituting pre-formatted state and statement.
    ///
    /// Every other field is written verbatim. The record ends with a blank
    /// separator line.
    pub fn layout(&self, state: &dyn fmt::Display, statement: &dyn fmt::Display) -> String {
        let r = self.record;
        format!(
            "{rule} Process Info @ {at} {rule}\n\
             \x20      ID: {id}\n\
             \x20    USER: {user}\n\
             \x20    HOST: {host}\n\
             \x20      DB: {db}\n\
             \x20 COMMAND: {command}\n\
             \x20    TIME: {time}\n\
             \x20   STATE: {state}\n\
             \x20    INFO: {statement}\n\n",
            rule = BANNER_RULE,
            at = self.rendered_at.format(BANNER_TIME_FORMAT),
            id = r.id,
            user = r.user,
            host = r.host,
            db = r.database(),
            command = r.command,
            time = r.elapsed_seconds,
        )
    }
}
