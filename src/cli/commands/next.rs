use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::rotation::ClipRotation;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::output::print_json;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Next { session, count } = cmd {
        let count = count.unwrap_or(cfg.default_clip_count);

        let mut pool = DbPool::open(cfg)?;
        let clips = ClipRotation::next_clips(&mut pool, *session, count)?;

        if cli.json {
            return print_json(&clips);
        }

        println!("🎬 Next clips for session {}:\n", session);
        let mut table = Table::with_headers(&["ID", "POSTURE", "PATH"]);
        for c in &clips {
            table.add_row(vec![
                c.id.to_string(),
                c.posture.to_string(),
                c.video_path.clone(),
            ]);
        }
        print!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}
