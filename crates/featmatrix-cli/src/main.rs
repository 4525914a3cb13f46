//! Featmatrix CLI
//!
//! Command-line interface for browsing and querying the KeyReply
//! feature comparison.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use featmatrix_cli::cli::Cli;
use featmatrix_cli::{App, CliConfig, logging};

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = CliConfig::load(args.config.as_deref())?;
    logging::init(&config.logging.level, args.verbose);
    tracing::debug!(format = ?config.output.format, "Configuration loaded");

    let app = App::new(config, args.config.clone(), args.format)?;
    let command = args.selected();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = app.run(&command, &mut out) {
        tracing::error!("{e}");
        return Err(e.into());
    }

    Ok(())
}
