//! SQLite connection pool wrapper (lightweight for CLI usage).

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    /// Open the configured database, wait on busy writers and bring the schema up to date.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = Self::new(&cfg.database)?;
        pool.conn
            .busy_timeout(Duration::from_millis(cfg.busy_timeout_ms))?;
        init_db(&pool.conn)?;
        Ok(pool)
    }
}
