use crate::core::ledger::require_session;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::model::AttemptExport;
use crate::export::writers::write_rows;
use crate::ui::messages::warning;
use crate::ui::prompt::confirm_overwrite;
use crate::utils::path::require_absolute;
use rusqlite::{Connection, Row};

const EXPORT_SELECT: &str = "SELECT a.id, a.session_id, s.dog_id, a.clip_id, a.posture,
        a.confidence, a.outcome, a.recorded_at, a.processing_ms, a.frames_processed
 FROM attempts a
 JOIN sessions s ON s.id = a.session_id";

/// High-level export of the attempt log.
pub struct ExportLogic;

impl ExportLogic {
    /// Export attempts, optionally for one session, to an absolute `file` path.
    /// Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        session: Option<i64>,
        force: bool,
    ) -> AppResult<usize> {
        let path = require_absolute(file)?;

        if let Some(id) = session {
            require_session(&pool.conn, id)?;
        }

        let rows = load_attempts(&pool.conn, session)?;
        if rows.is_empty() {
            warning("No attempts found. Nothing to export.");
            return Ok(0);
        }

        if !confirm_overwrite(path, force)? {
            return Err(AppError::Export(
                "Export cancelled: existing file not overwritten".into(),
            ));
        }

        write_rows(format, &rows, path)?;

        ttlog(
            &pool.conn,
            "export",
            file,
            &format!("{} attempts exported as {}", rows.len(), format.as_str()),
        )?;

        Ok(rows.len())
    }
}

fn map_export(row: &Row) -> rusqlite::Result<AttemptExport> {
    Ok(AttemptExport {
        id: row.get(0)?,
        session_id: row.get(1)?,
        dog_id: row.get(2)?,
        clip_id: row.get(3)?,
        posture: row.get(4)?,
        confidence: row.get(5)?,
        outcome: row.get(6)?,
        recorded_at: row.get(7)?,
        processing_ms: row.get(8)?,
        frames_processed: row.get(9)?,
    })
}

fn load_attempts(conn: &Connection, session: Option<i64>) -> AppResult<Vec<AttemptExport>> {
    let mut out = Vec::new();

    match session {
        Some(id) => {
            let mut stmt =
                conn.prepare(&format!("{EXPORT_SELECT} WHERE a.session_id = ?1 ORDER BY a.id ASC"))?;
            for r in stmt.query_map([id], map_export)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(&format!("{EXPORT_SELECT} ORDER BY a.id ASC"))?;
            for r in stmt.query_map([], map_export)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}
