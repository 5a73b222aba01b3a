//! sldc CLI - Command-line interface for SLDC tape record decoding

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "sldc")]
#[command(version, about = "sldc: decode SLDC-compressed tape records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the sldc CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
