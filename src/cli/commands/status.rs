use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::ledger::SessionLedger;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::VALIDATION_THRESHOLD;
use crate::ui::output::print_json;
use crate::utils::colors::{color_for_validated, paint};
use crate::utils::formatting::{join_ids, progress};
use crate::utils::table::Table;
use crate::utils::time::{format_millis, format_optional_timestamp, format_timestamp};
use serde_json::json;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { session, attempts } = cmd {
        let mut pool = DbPool::open(cfg)?;
        let status = SessionLedger::session_status(&mut pool, *session)?;
        let rows = if *attempts {
            SessionLedger::list_attempts(&mut pool, *session)?
        } else {
            Vec::new()
        };

        if cli.json {
            return if *attempts {
                print_json(&json!({ "status": status, "attempts": rows }))
            } else {
                print_json(&status)
            };
        }

        let state = if status.validated { "VALIDATED" } else { "OPEN" };
        println!(
            "📊 Session {} (dog {}, posture '{}')",
            status.session_id, status.dog_id, status.posture
        );
        println!(
            "   State     : {}",
            paint(color_for_validated(status.validated), state)
        );
        println!(
            "   Successes : {}",
            progress(status.success_count, VALIDATION_THRESHOLD)
        );
        if !status.validated {
            println!("   Remaining : {}", status.remaining());
        }
        println!("   Attempts  : {}", status.attempt_count);
        println!("   Clips used: {}", join_ids(&status.distinct_clips_used));
        println!("   Frames    : {}", status.total_frames_processed);
        println!(
            "   Ended     : {}",
            format_optional_timestamp(status.ended_at.as_deref())
        );

        if *attempts && !rows.is_empty() {
            println!();
            let mut table =
                Table::with_headers(&["ID", "CLIP", "OUTCOME", "CONF", "TIME", "FRAMES", "RECORDED"]);
            for a in &rows {
                table.add_row(vec![
                    a.id.to_string(),
                    a.clip_id.to_string(),
                    a.outcome.to_string(),
                    format!("{:.2}", a.confidence),
                    format_millis(a.processing_ms),
                    a.frames_processed
                        .map(|f| f.to_string())
                        .unwrap_or_else(|| "--".into()),
                    format_timestamp(&a.recorded_at),
                ]);
            }

            print!("{}", table.render(&cfg.separator_char));
        }
    }

    Ok(())
}
