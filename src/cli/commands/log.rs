use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::output::print_json;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print } = cmd else {
        return Ok(());
    };
    if !print {
        info("Nothing to do: use `log --print` to show the audit log.");
        return Ok(());
    }

    let mut pool = DbPool::open(cfg)?;
    if cli.json {
        print_json(&LogLogic::load_entries(&mut pool)?)
    } else {
        LogLogic::print_log(&mut pool)
    }
}
