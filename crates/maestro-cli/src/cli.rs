use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "maestro")]
#[command(about = "Command-line controller for the Maestro orchestration API")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API host URL (overrides the configured host)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
