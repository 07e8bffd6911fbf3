mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use diffsift_core::{logging, Config};
use std::path::Path;
use tracing::warn;

/// Exit code for configuration, I/O and usage failures
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = Config::load(cli.config.as_deref())?;

    let log = config.log_config();
    let level = cli.log_level.as_deref().unwrap_or(&log.level);
    // Dropped when `run` returns, which flushes the file writer before exit
    let _guard = logging::init(level, log.dir.as_deref().map(Path::new))?;

    if let Some(warning) = config.version_warning() {
        warn!("{}", warning);
    }

    commands::execute(cli.command, &config)
}
