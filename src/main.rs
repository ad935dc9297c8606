//! venturecast - startup outlook forecasts from trained models
//!
//! Loads the three trained model artifacts once at startup and answers one
//! forecast question per invocation. Field values are passed verbatim;
//! missing or malformed numeric fields fall back to 0.0 instead of failing.
//!
//! # Usage
//! ```sh
//! venturecast success --sector 3 --stage 2 --funding-round 1 \
//!     --funding-range 500000 --district 12 --state 5
//! ```
//!
//! # Environment Variables
//! - `SUCCESS_MODEL_PATH` / `FUNDING_MODEL_PATH` / `YEAR_MODEL_PATH` -
//!   model artifact locations (default: `models/*.json`)

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;
use venturecast::application::forecast_service::ForecastService;
use venturecast::application::ml::SmartCorePredictor;
use venturecast::config::Config;
use venturecast::domain::forms::RawForm;

#[derive(Parser)]
#[command(name = "venturecast", about = "Startup outlook forecasts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Label the startup's success outlook
    Success(ProfileArgs),
    /// Predict the expected funding amount
    Funding(ProfileArgs),
    /// Find the first simulated year the startup qualifies as a success
    Year(ProfileArgs),
}

#[derive(clap::Args)]
struct ProfileArgs {
    /// Sector code
    #[arg(long)]
    sector: Option<String>,
    /// Stage code
    #[arg(long)]
    stage: Option<String>,
    /// Funding round code
    #[arg(long)]
    funding_round: Option<String>,
    /// Total funding raised so far, in dollars
    #[arg(long)]
    funding_range: Option<String>,
    /// Employee headcount
    #[arg(long)]
    employee_count: Option<String>,
    /// Number of investors
    #[arg(long)]
    investor_count: Option<String>,
    /// Round year
    #[arg(long)]
    year: Option<String>,
    /// City (district) code
    #[arg(long)]
    district: Option<String>,
    /// State code
    #[arg(long)]
    state: Option<String>,
}

impl ProfileArgs {
    fn into_form(self) -> RawForm {
        let fields = [
            ("sector", self.sector),
            ("stage", self.stage),
            ("funding_round", self.funding_round),
            ("funding_range", self.funding_range),
            ("employee_count", self.employee_count),
            ("investor_count", self.investor_count),
            ("year", self.year),
            ("district", self.district),
            ("state", self.state),
        ];

        let mut form = RawForm::new();
        for (key, value) in fields {
            if let Some(value) = value {
                form.set(key, &value);
            }
        }
        form
    }
}

fn build_service(config: &Config) -> Result<ForecastService> {
    let success = SmartCorePredictor::load("success", &config.success_model_path)?;
    let funding = SmartCorePredictor::load("funding", &config.funding_model_path)?;
    let year = SmartCorePredictor::load("year", &config.year_model_path)?;
    Ok(ForecastService::new(
        Arc::new(success),
        Arc::new(funding),
        Arc::new(year),
    ))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    info!("Loading model artifacts...");
    let service = build_service(&config)?;

    match cli.command {
        Command::Success(args) => {
            let outlook = service.predict_success(&args.into_form())?;
            println!(
                "Success outlook: {} (score {:.4})",
                outlook.label, outlook.score
            );
        }
        Command::Funding(args) => {
            let amount = service.predict_funding(&args.into_form())?;
            println!("Predicted funding: ${:.2}", amount);
        }
        Command::Year(args) => match service.predict_success_year(&args.into_form())? {
            Some(year) => println!("Projected success year: {}", year),
            None => println!("No qualifying year within the simulated horizon"),
        },
    }

    Ok(())
}
