use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::output::print_json;

/// `config`: the flags are independent and run in print, check, migrate, edit order.
pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };
    let path = Config::config_file();

    if *print_config {
        if cli.json {
            print_json(cfg)?;
        } else {
            println!("📄 {}\n", path.display());
            print!("{}", ConfigLogic::render(cfg)?);
        }
    }

    if *check && !ConfigLogic::check(&path)? {
        log::debug!("configuration at {} is incomplete", path.display());
    }

    if *migrate {
        ConfigLogic::migrate(&path)?;
    }

    if *edit_config {
        ConfigLogic::edit(&path, editor)?;
    }

    Ok(())
}
