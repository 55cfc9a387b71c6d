use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use colored::Colorize;
use flight_data::{Flight, TIMESTAMP_FORMAT, create_sample_flights, load_flights};
use flight_filters::{FilterContext, FilterPipeline, FilterReport};
use std::path::PathBuf;

/// flight-check - filter flights by departure, arrival and ground time rules
#[derive(Parser)]
#[command(name = "flight-check")]
#[command(about = "Filter flight lists by temporal rules", long_about = None)]
struct Cli {
    /// Longest allowed ground time between segments, in whole hours
    #[arg(
        long,
        default_value = "2",
        global = true,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    max_ground_hours: i64,

    /// Evaluation instant (yyyy-MM-ddTHH:mm); defaults to the local clock
    #[arg(long, value_parser = parse_instant, global = true)]
    now: Option<NaiveDateTime>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every filter over the built-in sample flights
    Demo,

    /// Run every filter independently over flights read from a file
    Check {
        /// File with one flight per line in canonical form
        #[arg(long)]
        input: PathBuf,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print only the flights that pass every filter
    Passing {
        /// File with one flight per line in canonical form
        #[arg(long)]
        input: PathBuf,
    },
}

fn parse_instant(s: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| format!("expected yyyy-MM-ddTHH:mm: {}", e))
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Sample the clock once for the whole run
    let context = match cli.now {
        Some(instant) => FilterContext::at(instant),
        None => FilterContext::now(),
    };
    tracing::debug!("Evaluating at {}", context.now.format(TIMESTAMP_FORMAT));

    let pipeline = FilterPipeline::standard(cli.max_ground_hours);

    match cli.command {
        Commands::Demo => handle_demo(&pipeline, &context)?,
        Commands::Check { input, json } => handle_check(&pipeline, &context, input, json)?,
        Commands::Passing { input } => handle_passing(&pipeline, &context, input)?,
    }

    Ok(())
}

/// Handle the 'demo' command
fn handle_demo(pipeline: &FilterPipeline, context: &FilterContext) -> Result<()> {
    let flights =
        create_sample_flights(context.now).context("Failed to build sample flights")?;

    let reports = pipeline.apply_each(&flights, context);
    print_reports(&flights, &reports);
    Ok(())
}

/// Handle the 'check' command
fn handle_check(
    pipeline: &FilterPipeline,
    context: &FilterContext,
    input: PathBuf,
    json: bool,
) -> Result<()> {
    let flights = load_flights(&input)
        .with_context(|| format!("Failed to load flights from {}", input.display()))?;

    let reports = pipeline.apply_each(&flights, context);
    if json {
        let out = serde_json::to_string_pretty(&reports).context("Failed to encode reports")?;
        println!("{}", out);
    } else {
        print_reports(&flights, &reports);
    }
    Ok(())
}

/// Handle the 'passing' command
fn handle_passing(
    pipeline: &FilterPipeline,
    context: &FilterContext,
    input: PathBuf,
) -> Result<()> {
    let flights = load_flights(&input)
        .with_context(|| format!("Failed to load flights from {}", input.display()))?;

    let valid = pipeline.apply(&flights, context);
    tracing::info!("{} of {} flights pass every filter", valid.len(), flights.len());
    for flight in &valid {
        println!("{}", flight);
    }
    Ok(())
}

/// Print the input set, then each filter's result under its label
fn print_reports(flights: &[Flight], reports: &[FilterReport]) {
    println!("{}", "Flight set:".bold().blue());
    println!("{}", render_flights(flights));
    println!();

    for report in reports {
        println!("{}", format!("{}:", report.description).bold().blue());
        println!("{}", render_flights(&report.flights));
        println!(
            "{} kept {} of {}",
            "•".green(),
            report.flights.len(),
            flights.len()
        );
        println!();
    }
}

/// `[flight, flight, ...]`, each flight in canonical form
fn render_flights(flights: &[Flight]) -> String {
    let joined = flights
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_data::create_flight;

    #[test]
    fn test_parse_instant() {
        let instant = parse_instant("2025-01-01T10:15").unwrap();
        assert_eq!(instant.format(TIMESTAMP_FORMAT).to_string(), "2025-01-01T10:15");
        assert!(parse_instant("tomorrow").is_err());
    }

    #[test]
    fn test_render_flights() {
        let t = parse_instant("2025-01-01T10:15").unwrap();
        let flights = vec![
            create_flight(&[t, t + chrono::Duration::hours(2)]).unwrap(),
            create_flight(&[]).unwrap(),
        ];
        assert_eq!(
            render_flights(&flights),
            "[[2025-01-01T10:15|2025-01-01T12:15], ]"
        );
        assert_eq!(render_flights(&[]), "[]");
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "flight-check",
            "check",
            "--input",
            "flights.txt",
            "--max-ground-hours",
            "3",
            "--now",
            "2025-01-01T00:00",
        ])
        .unwrap();

        assert_eq!(cli.max_ground_hours, 3);
        assert!(cli.now.is_some());
        assert!(matches!(cli.command, Commands::Check { json: false, .. }));
    }

    #[test]
    fn test_cli_rejects_negative_ground_hours() {
        let result = Cli::try_parse_from(["flight-check", "--max-ground-hours", "-1", "demo"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["flight-check", "--max-ground-hours", "0", "demo"]).unwrap();
        assert_eq!(cli.max_ground_hours, 0);
    }
}
