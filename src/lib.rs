//! rTimecard library root.
//! Exposes the timecard engine, its stores, the CLI parser and a
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod rates;
pub mod store;
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
        Commands::In { .. } | Commands::Out { .. } => cli::commands::clock::handle(cli, cfg),
        Commands::Break { .. } => cli::commands::brk::handle(cli, cfg),
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::Week { .. } | Commands::Weeks => cli::commands::week::handle(cli, cfg),
        Commands::Correct { .. } => cli::commands::correct::handle(cli, cfg),
        Commands::Del { .. } => cli::commands::del::handle(cli, cfg),
        Commands::Rate { .. } => cli::commands::rate::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(tz) = &cli.tz {
        cfg.timezone = tz.clone();
        cfg.validate()?;
    }

    dispatch(&cli, &cfg)
}
