use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::seed::ClipSeeder;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::ui::output::print_json;
use crate::utils::path::expand_tilde;
use serde_json::json;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { dir } = cmd {
        let dir = expand_tilde(dir.as_deref().unwrap_or(&cfg.clips_dir));

        let mut pool = DbPool::open(cfg)?;
        let report = ClipSeeder::seed_directory(&mut pool, &dir)?;

        if cli.json {
            let skipped: Vec<_> = report
                .skipped
                .iter()
                .map(|(file, reason)| json!({ "file": file, "reason": reason }))
                .collect();
            return print_json(&json!({
                "directory": dir.to_string_lossy(),
                "inserted": report.inserted,
                "already_present": report.already_present,
                "skipped": skipped,
            }));
        }

        for (file, reason) in &report.skipped {
            warning(format!("Skipped {file}: {reason}"));
        }
        success(format!(
            "Seeded {}: {} new clips, {} already registered",
            dir.display(),
            report.inserted,
            report.already_present
        ));
    }

    Ok(())
}
