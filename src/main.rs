//! Airport Staffing Forecast
//!
//! Estimates airport staffing needs from passenger volume, flight count and
//! labor-efficiency improvement, with variance and what-if scenario views.

mod calculator;
mod models;
mod report;
mod session;
mod telemetry;
mod validation;

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::models::{
    DEFAULT_FLIGHT_SCHEDULE, DEFAULT_LABOR_EFFICIENCY, DEFAULT_PASSENGER_VOLUME,
};
use crate::report::Dashboard;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "staffing-forecast")]
#[command(about = "Airport labor planning and staffing forecast calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast staffing once and print the full report
    Forecast {
        /// Passengers in the planning period
        #[arg(short, long, default_value_t = DEFAULT_PASSENGER_VOLUME)]
        passengers: f64,

        /// Number of flights in the planning period
        #[arg(short, long, default_value_t = DEFAULT_FLIGHT_SCHEDULE)]
        flights: f64,

        /// Labor efficiency improvement in percent (0-50)
        #[arg(short, long, default_value_t = DEFAULT_LABOR_EFFICIENCY)]
        efficiency: f64,

        /// Actual staffing on the roster (defaults to the forecast, truncated)
        #[arg(short, long)]
        actual: Option<f64>,

        /// Scenario adjustment of passenger volume in percent (-20-20)
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        scenario: f64,
    },

    /// Start an interactive session that recomputes after every change
    Interactive,
}

fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Forecast {
            passengers,
            flights,
            efficiency,
            actual,
            scenario,
        } => {
            let inputs = validation::validate_inputs(passengers, flights, efficiency)?;
            let actual = actual.map(validation::actual_staffing).transpose()?;
            let scenario = validation::scenario_factor(scenario)?;

            info!(passengers, flights, efficiency, "one-shot forecast");
            print!("{}", Dashboard::evaluate(inputs, actual, scenario));
        }

        Commands::Interactive => {
            let stdin = io::stdin();
            let mut session = Session::new();
            session.run(stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}
