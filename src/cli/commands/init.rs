use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// `init`: write the configuration file (skipped with `--test`), create the
/// database file and apply every migration.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    info("Initializing dogposture…");
    if !cli.test {
        info(format!("Config file: {}", Config::config_file().display()));
    }

    let pool = DbPool::new(&cfg.database)?;
    let applied = init_db(&pool.conn)?;

    ttlog(
        &pool.conn,
        "init",
        &cfg.database,
        &format!("Database initialized ({applied} migrations applied)"),
    )?;

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
