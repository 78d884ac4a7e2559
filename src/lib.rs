//! breaktracker library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::Clock;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, clock),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Record { .. } | Commands::Start { .. } | Commands::End { .. } => {
            cli::commands::record::handle(&cli.command, cfg, clock)
        }
        Commands::Reason { .. } => cli::commands::reason::handle(&cli.command, cfg, clock),
        Commands::Del { .. } | Commands::Clear { .. } => {
            cli::commands::del::handle(&cli.command, cfg, clock)
        }
        Commands::List => cli::commands::list::handle(cfg, clock),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg, clock),
        Commands::Session => cli::commands::session::handle(cfg, clock),
        Commands::Copy { .. } => cli::commands::copy::handle(&cli.command, cfg, clock),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, clock),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg, clock),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the store
    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
    }

    // 4️⃣ wall clock, or the pinned one from --at
    let clock = crate::core::clock::from_option(cli.at.as_deref())?;

    dispatch(&cli, &cfg, clock.as_ref())
}
