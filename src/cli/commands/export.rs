use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        format,
        file,
        session,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::open(cfg)?;
    let rows = ExportLogic::export(&mut pool, *format, file, *session, *force)?;
    log::debug!("export to {file} wrote {rows} rows");
    Ok(())
}
