use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats::{collect_counts, print_db_info};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::output::print_json;
use serde_json::json;

/// `db` maintenance. The database is opened without migrating so that
/// `--check` and `--info` report the schema as found on disk.
pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        match run_pending_migrations(&pool.conn)? {
            0 => info("Schema already up to date."),
            n => success(format!("{n} migration(s) applied.")),
        }
    }

    if *check {
        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
        let pending = pending_migrations(&pool.conn)?;

        if integrity == "ok" {
            success("Integrity check passed.");
        } else {
            warning(format!("Integrity check failed: {integrity}"));
        }
        for version in &pending {
            warning(format!("Pending migration: {version} (run `db --migrate`)"));
        }
    }

    if *vacuum {
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    if *show_info {
        // counts need the tables
        run_pending_migrations(&pool.conn)?;

        if cli.json {
            let c = collect_counts(&pool)?;
            return print_json(&json!({
                "database": cfg.database,
                "dogs": c.dogs,
                "clips": c.clips,
                "sessions_open": c.sessions_open,
                "sessions_validated": c.sessions_validated,
                "attempts": c.attempts,
                "validated_postures": c.validated_postures,
            }));
        }
        print_db_info(&mut pool, &cfg.database)?;
    }

    Ok(())
}
