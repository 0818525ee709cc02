use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "maize-advisor",
    version,
    about = "Maize cultivation advisory for Nigerian states"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory of YAML dataset overrides (defaults to embedded datasets)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an advisory report for a state, planting month, and soil fertility level
    Report {
        /// State the advisory is generated for
        #[arg(short, long)]
        state: String,

        /// Month when maize planting starts (e.g. June)
        #[arg(short, long)]
        month: String,

        /// Declared soil fertility level: Low, Medium, or High
        #[arg(short = 'f', long)]
        soil_fertility: String,

        /// Emit the report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// List known states and their agro-ecological zones
    States,
    /// List the maize variety catalog, optionally filtered by zone
    Varieties {
        /// Agro-ecological zone filter (e.g. "Rainforest")
        #[arg(short, long)]
        zone: Option<String>,
    },
    /// Load and validate the reference datasets
    Check,
}
