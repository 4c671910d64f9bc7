//! Live session source backed by `information_schema.processlist`.

use catch_core::{CatchError, Result, SessionRecord};
use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder, Row};
use tracing::debug;

use crate::credentials::Credentials;
use crate::source::SessionSource;

/// Session enumeration query.
///
/// Idle sessions are excluded here, and the ordering (longest-running first)
/// is the one the pipeline preserves. The `FROM` and `WHERE` lines are what
/// the self-exclusion filter recognises, so they must stay verbatim.
pub const PROCESSLIST_QUERY: &str = "SELECT ID, USER, HOST, DB, COMMAND, TIME, STATE, INFO
    FROM information_schema.processlist
    WHERE command != 'Sleep'
    AND (COMMAND = 'Query'
        OR INFO IS NOT NULL
        OR STATE NOT IN ('', 'init', 'after create', 'CONNECTING')
        OR TIME > 0)
    ORDER BY TIME DESC";

type ProcessRow = (
    u64,
    Option<String>,
    Option<String>,
    Option<String>,
    String,
    i64,
    Option<String>,
    Option<Vec<u8>>,
);

/// Where to connect.
#[derive(Debug, Clone)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
}

/// Blocking connection polling the server's process list.
pub struct ProcessListSource {
    conn: Conn,
    target: ConnectionTarget,
}

impl ProcessListSource {
    /// Open a connection. Failures are configuration errors.
    pub fn connect(target: ConnectionTarget, creds: &Credentials) -> Result<Self> {
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(target.host.clone()))
            .tcp_port(target.port)
            .user(creds.user.clone())
            .pass(creds.password.clone());

        let conn = Conn::new(opts).map_err(|e| {
            CatchError::Config(format!(
                "Failed to connect to {}:{}: {}",
                target.host, target.port, e
            ))
        })?;
        debug!("Opened connection to {}:{}", target.host, target.port);
        Ok(Self { conn, target })
    }

    /// Round-trip a trivial statement to prove the connection is usable.
    pub fn check(&mut self) -> Result<()> {
        self.conn.query_drop("SELECT 1").map_err(|e| {
            CatchError::Config(format!("Failed to connect to {}: {}", self.target.host, e))
        })
    }

    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }
}

impl SessionSource for ProcessListSource {
    fn fetch(&mut self) -> Result<Vec<SessionRecord>> {
        let rows: Vec<Row> = self
            .conn
            .query(PROCESSLIST_QUERY)
            .map_err(|e| CatchError::DataSource(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                mysql::from_row_opt::<ProcessRow>(row)
                    .map(into_record)
                    .map_err(|e| CatchError::DataSource(format!("unexpected row shape: {}", e)))
            })
            .collect()
    }
}

fn into_record(row: ProcessRow) -> SessionRecord {
    let (id, user, host, database, command, time, state, info) = row;
    SessionRecord {
        id,
        user: user.unwrap_or_default(),
        host: host.unwrap_or_default(),
        database,
        command,
        elapsed_seconds: time.max(0) as u64,
        state,
        statement_text: info.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()),
    }
}
