//! Audit trail: one row in the `log` table per state-changing operation.

use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{Connection, params};

const INSERT_LOG: &str = "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)";

/// Append an audit row. Runs on whatever transaction `conn` currently holds.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(INSERT_LOG)?
        .execute(params![Utc::now().to_rfc3339(), operation, target, message])?;
    Ok(())
}

