//! Wayfinder CLI — load a route graph description and query it.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use wayfinder::RoutePlanner;

#[derive(Parser)]
#[command(name = "wayfinder", version, about = "Route graph shortest-path queries")]
struct Cli {
    /// Graph description file (DOT subset)
    #[arg(long, global = true, default_value = "campus.dot")]
    graph: PathBuf,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known location
    Locations,
    /// Shortest route between two locations, with per-segment times
    Route {
        start: String,
        end: String,
    },
    /// Locations reachable from a start within a time budget (seconds)
    Reachable {
        start: String,
        within: f64,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut planner = RoutePlanner::new();
    if let Err(e) = planner.load_file(&cli.graph) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Locations => run_locations(&planner, &cli.format),
        Commands::Route { start, end } => run_route(&planner, &start, &end, &cli.format),
        Commands::Reachable { start, within } => {
            run_reachable(&planner, &start, within, &cli.format)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_locations(
    planner: &RoutePlanner,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let locations = planner.locations();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&locations)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Location"]);
            for location in &locations {
                table.add_row(vec![location.as_str()]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

fn run_route(
    planner: &RoutePlanner,
    start: &str,
    end: &str,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stops = planner.route(start, end);
    if stops.is_empty() {
        println!("No route from {start} to {end}.");
        return Ok(());
    }

    let times = planner.segment_times(start, end);
    let total: f64 = times.iter().sum();

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "stops": stops,
                "segment_seconds": times,
                "total_seconds": total,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["From", "To", "Seconds"]);
            for (pair, seconds) in stops.windows(2).zip(&times) {
                table.add_row(vec![
                    pair[0].clone(),
                    pair[1].clone(),
                    format!("{seconds:.1}"),
                ]);
            }
            println!("{table}");
            println!("Total: {total:.1} seconds");
        }
    }
    Ok(())
}

fn run_reachable(
    planner: &RoutePlanner,
    start: &str,
    within: f64,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let reachable = planner.reachable_within(start, within)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reachable)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec![format!("Reachable from {start} within {within:.0}s")]);
            for location in &reachable {
                table.add_row(vec![location.as_str()]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
