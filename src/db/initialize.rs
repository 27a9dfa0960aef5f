use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring the schema up to date. Returns the number of migrations applied.
///
/// Tables are only ever created by migrations, never here.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    let applied = run_pending_migrations(conn)?;
    if applied > 0 {
        log::info!("{applied} migration(s) applied");
    }
    Ok(applied)
}

