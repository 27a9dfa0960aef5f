use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::ledger::SessionLedger;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::output::print_json;
use crate::utils::table::Table;
use crate::utils::time::format_timestamp;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Validated { dog } = cmd {
        let mut pool = DbPool::open(cfg)?;
        let validated = SessionLedger::list_validated_postures(&mut pool, *dog)?;

        if cli.json {
            return print_json(&validated);
        }
        if validated.is_empty() {
            info(format!("Dog {dog} has no validated posture yet."));
            return Ok(());
        }

        let mut table = Table::with_headers(&["POSTURE", "SESSION", "VALIDATED AT"]);
        for v in &validated {
            table.add_row(vec![
                v.posture.to_string(),
                v.session_id.to_string(),
                format_timestamp(&v.validated_at),
            ]);
        }
        print!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}
