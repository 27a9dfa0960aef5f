use crate::cli::parser::{Cli, SessionCommand};
use crate::config::Config;
use crate::core::ledger::SessionLedger;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::output::print_json;
use crate::utils::table::Table;
use crate::utils::time::{format_optional_timestamp, format_timestamp};

pub fn handle(action: &SessionCommand, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(cfg)?;

    match action {
        SessionCommand::Start { dog, posture } => {
            let session = SessionLedger::start_session(&mut pool, *dog, *posture)?;

            if cli.json {
                return print_json(&session);
            }
            success(format!(
                "Session {} started for dog {} (posture '{}')",
                session.id, session.dog_id, session.posture
            ));
        }

        SessionCommand::List { dog } => {
            let sessions = SessionLedger::list_sessions(&mut pool, *dog)?;

            if cli.json {
                return print_json(&sessions);
            }
            if sessions.is_empty() {
                info("No sessions found.");
                return Ok(());
            }

            let mut table =
                Table::with_headers(&["ID", "DOG", "POSTURE", "STATE", "STARTED", "ENDED", "FRAMES"]);
            for s in &sessions {
                table.add_row(vec![
                    s.id.to_string(),
                    s.dog_id.to_string(),
                    s.posture.to_string(),
                    s.state().as_str().to_string(),
                    format_timestamp(&s.started_at),
                    format_optional_timestamp(s.ended_at.as_deref()),
                    s.total_frames_processed.to_string(),
                ]);
            }

            print!("{}", table.render(&cfg.separator_char));
        }
    }

    Ok(())
}
