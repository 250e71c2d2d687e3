//! calreport library root.
//! Exposes the CLI parser, the high-level run() function and the report
//! pipeline modules.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(cfg_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Calendars => cli::commands::calendars::handle(cfg),
        Commands::Report(args) => cli::commands::report::handle(args, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    ui::messages::set_quiet(cli.quiet);

    // 2️⃣ load config once, honouring --config
    let cfg_path = cli.config.clone().unwrap_or_else(Config::config_file);
    let cfg = match &cli.command {
        // init must work even when the existing file is broken
        Commands::Init { .. } => Config::default(),
        _ => Config::load_from(&cfg_path)?,
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &cfg_path)
}
