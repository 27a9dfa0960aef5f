use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let path = BackupLogic::backup(cfg, file, *compress, *force)?;
        log::debug!("backup written to {}", path.display());
    }

    Ok(())
}
