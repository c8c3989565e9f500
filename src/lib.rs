//! tourreport library root.
//! Exposes the CLI parser, the high-level run() function and the extraction,
//! grouping and export modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter, e.g. `tourreport=debug`.
pub const LOG_ENV: &str = "TOURREPORT_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_logging();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve the config file once
    let cfg_path = cli.config.clone().unwrap_or_else(Config::config_file);

    // 3️⃣ init must work even when the existing file is broken
    if let Commands::Init { .. } = cli.command {
        return cli::commands::init::handle(&cli.command, &cfg_path);
    }

    let cfg = Config::load(&cfg_path)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &cfg_path)
}
