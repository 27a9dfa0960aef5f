//! dogposture library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(cmd, cli, cfg),
        Commands::Db { .. } => commands::db::handle(cmd, cli, cfg),
        Commands::Log { .. } => commands::log::handle(cmd, cli, cfg),
        Commands::Dog { action } => commands::dog::handle(action, cli, cfg),
        Commands::Seed { .. } => commands::seed::handle(cmd, cli, cfg),
        Commands::Clips { .. } => commands::clips::handle(cmd, cli, cfg),
        Commands::Session { action } => commands::session::handle(action, cli, cfg),
        Commands::Attempt { .. } => commands::attempt::handle(cmd, cli, cfg),
        Commands::Next { .. } => commands::next::handle(cmd, cli, cfg),
        Commands::Status { .. } => commands::status::handle(cmd, cli, cfg),
        Commands::Validated { .. } => commands::validated::handle(cmd, cli, cfg),
        Commands::Backup { .. } => commands::backup::handle(cmd, cfg),
        Commands::Export { .. } => commands::export::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load()?;

    // 3. command line override of the database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    log::debug!("Using database {}", cfg.database);

    // 4. dispatch
    dispatch(&cli, &cfg)
}
