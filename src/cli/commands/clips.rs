use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::output::print_json;
use crate::utils::formatting::or_dash;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clips { posture } = cmd {
        let pool = DbPool::open(cfg)?;
        let clips = queries::list_clips(&pool.conn, *posture)?;

        if cli.json {
            return print_json(&clips);
        }
        if clips.is_empty() {
            info("No reference clips registered. Run `dogposture seed` first.");
            return Ok(());
        }

        let mut table = Table::with_headers(&["ID", "POSTURE", "PATH", "DESCRIPTION"]);
        for c in &clips {
            table.add_row(vec![
                c.id.to_string(),
                c.posture.to_string(),
                c.video_path.clone(),
                or_dash(c.description.as_deref()),
            ]);
        }
        print!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}
