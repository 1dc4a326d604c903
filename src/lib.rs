//! gigboard library root.
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
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::auth::handle_login(&cli.command, cfg),
        Commands::Logout => cli::commands::auth::handle_logout(cfg),
        Commands::Whoami => cli::commands::auth::handle_whoami(cfg),
        Commands::Post { .. } => cli::commands::post::handle(&cli.command, cfg),
        Commands::Apply { .. } => cli::commands::apply::handle(&cli.command, cfg),
        Commands::Accept { .. } => cli::commands::accept::handle(&cli.command, cfg),
        Commands::Jobs { .. } => cli::commands::jobs::handle(&cli.command, cfg),
        Commands::Applications => cli::commands::applications::handle(cfg),
        Commands::Applicants { .. } => cli::commands::applicants::handle(&cli.command, cfg),
        Commands::Notifications => cli::commands::notifications::handle(cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1) parse CLI
    let cli = Cli::parse();

    // 2) load config ONCE
    let mut cfg = Config::load();

    // 3) apply the DB override from the command line, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4) hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
