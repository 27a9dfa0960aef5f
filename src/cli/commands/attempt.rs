use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::detection::DetectionIntake;
use crate::core::ledger::SessionLedger;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attempt::{NewAttempt, PerfMetrics};
use crate::models::session::VALIDATION_THRESHOLD;
use crate::ui::messages::success;
use crate::ui::output::print_json;
use crate::utils::colors::{color_for_outcome, paint};
use crate::utils::formatting::progress;
use crate::utils::path::expand_tilde;
use serde_json::json;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Attempt {
        session,
        clip,
        outcome,
        confidence,
        processing_ms,
        frames,
        report,
    } = cmd
    {
        let mut pool = DbPool::open(cfg)?;

        let attempt = match report {
            Some(path) => {
                let posture = SessionLedger::get_session(&mut pool, *session)?.posture;
                let report = DetectionIntake::load_report(&expand_tilde(path))?;
                DetectionIntake::to_attempt(&report, *session, *clip, posture, cfg.min_confidence)?
            }
            None => {
                // clap enforces both when no report is given
                let (Some(outcome), Some(confidence)) = (outcome, confidence) else {
                    return Err(AppError::InvalidArgument(
                        "--outcome and --confidence are required without --report".into(),
                    ));
                };
                NewAttempt {
                    session_id: *session,
                    clip_id: *clip,
                    confidence: *confidence,
                    outcome: *outcome,
                    metrics: PerfMetrics {
                        processing_ms: *processing_ms,
                        frames_processed: *frames,
                    },
                }
            }
        };

        let recorded = SessionLedger::record_attempt(&mut pool, &attempt)?;

        if cli.json {
            return print_json(&json!({
                "attempt": recorded.attempt,
                "success_count": recorded.success_count,
                "total_frames_processed": recorded.total_frames_processed,
                "validated": recorded.newly_validated,
            }));
        }

        let a = &recorded.attempt;
        println!(
            "📝 Attempt {} on clip {}: {} ({:.2})",
            a.id,
            a.clip_id,
            paint(color_for_outcome(a.outcome.is_success()), a.outcome),
            a.confidence
        );
        println!(
            "   Progress: {}",
            progress(recorded.success_count, VALIDATION_THRESHOLD)
        );

        if let Some(vp) = &recorded.newly_validated {
            success(format!(
                "Posture '{}' validated for dog {} (session {})",
                vp.posture, vp.dog_id, vp.session_id
            ));
        }
    }

    Ok(())
}
