use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use flight_planner::domain::AirportCode;
use flight_planner::loader::{LoadError, load_flights};
use flight_planner::output::to_json;
use flight_planner::planner::{PlanError, SearchConfig, SearchRequest, solve};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Find every itinerary between two airports in a flight schedule.
///
/// Prints the itineraries as a JSON array, cheapest first.
#[derive(Debug, Parser)]
#[command(name = "flight-planner", version)]
struct Args {
    /// Schedule CSV file
    csv: PathBuf,

    /// Origin airport code
    #[arg(value_parser = AirportCode::parse)]
    origin: AirportCode,

    /// Destination airport code
    #[arg(value_parser = AirportCode::parse)]
    destination: AirportCode,

    /// Number of checked bags
    #[arg(long, default_value_t = 0)]
    bags: u32,

    /// Also fly back from the destination to the origin
    #[arg(long = "return")]
    return_trip: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Shortest layover to allow, in minutes [default: 60]
    #[arg(long, value_parser = layover_minutes)]
    min_layover_mins: Option<i64>,

    /// Longest layover to allow, in minutes [default: 360]
    #[arg(long, value_parser = layover_minutes)]
    max_layover_mins: Option<i64>,
}

fn layover_minutes(s: &str) -> Result<i64, String> {
    let minutes: u32 = s
        .parse()
        .map_err(|_| format!("{s:?} is not a whole number of minutes"))?;
    Ok(i64::from(minutes))
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("cannot render output: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = run(args);
    match &result {
        Ok(json) => println!("{json}"),
        Err(e) => error!("{e}"),
    }
    ExitCode::from(exit_status(&result))
}

/// 0 on success, including an empty result, and 1 if the schedule could not
/// be loaded or the query was refused. Argument errors exit with 2 from clap.
fn exit_status(result: &Result<String, Error>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn run(args: Args) -> Result<String, Error> {
    let defaults = SearchConfig::default();
    let config = SearchConfig::new(
        args.min_layover_mins.unwrap_or(defaults.min_layover_mins),
        args.max_layover_mins.unwrap_or(defaults.max_layover_mins),
    );

    let flights = load_flights(&args.csv)?;
    info!(path = %args.csv.display(), flights = flights.len(), "Loaded flights");

    let request = SearchRequest::new(args.origin, args.destination, args.bags, args.return_trip);
    let itineraries = solve(&flights, &request, &config)?;
    info!(itineraries = itineraries.len(), "Search finished");

    Ok(to_json(&itineraries, args.pretty)?)
}
