mod cli;
mod data;
mod error;
mod logic;
mod models;
mod render;

use clap::Parser;
use cli::{Cli, Commands};
use data::ReferenceData;
use error::{AdvisoryError, Result};
use logic::Advisor;
use models::{AdvisoryRequest, AgroZone};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let data = ReferenceData::load(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Report {
            state,
            month,
            soil_fertility,
            json,
        } => {
            let request = AdvisoryRequest::parse(&state, &month, &soil_fertility)?;
            let advisor = Advisor::new(&data);
            let report = advisor.build_report(&request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                render::print_report(&report);
            }
        }
        Commands::States => render::print_states(data.state_profiles()),
        Commands::Varieties { zone } => {
            let zone = match zone {
                Some(name) => Some(AgroZone::from_str(&name).ok_or_else(|| {
                    AdvisoryError::Validation(format!("unknown agro-ecological zone '{}'", name))
                })?),
                None => None,
            };
            render::print_varieties(data.varieties(), zone);
        }
        Commands::Check => {
            // Load already validated the datasets; summarize what we have.
            println!(
                "Datasets OK: {} states, {} varieties",
                data.state_profiles().len(),
                data.varieties().len()
            );
        }
    }
    Ok(())
}
