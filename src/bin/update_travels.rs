use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use num_format::{Locale, ToFormattedString};
use simple_logger::SimpleLogger;

use travels::TravelStats;

const ABOUT: &'static str = r#"Updates the travel stats of the website from a Flighty CSV export.
Canceled flights are ignored. Distances are approximate: known routes use a table,
other routes are estimated from the countries of both airports.
The generated module is overwritten on every run.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// Path to the CSV exported from Flighty
    #[arg(default_value = travels::DEFAULT_INPUT)]
    input: PathBuf,
    /// Path of the generated TypeScript module
    #[arg(short, long, default_value = travels::DEFAULT_OUTPUT)]
    output: PathBuf,
    /// The date of the update in format `yyyy-mm-dd` (else it is today)
    #[arg(long, value_parser = parse_date)]
    last_updated: Option<time::Date>,
}

fn parse_date(arg: &str) -> Result<time::Date, time::error::Parse> {
    time::Date::parse(
        arg,
        time::macros::format_description!("[year]-[month]-[day]"),
    )
}

fn summary(stats: &TravelStats) {
    log::info!("Stats computed:");
    log::info!("  Flights: {}", stats.total_flights);
    log::info!(
        "  Distance: {} km",
        stats.total_distance.to_formatted_string(&Locale::en)
    );
    log::info!("  Countries: {}", stats.total_countries);
    log::info!("  Airports: {}", stats.total_airports);
    log::info!("  Airlines: {}", stats.total_airlines);
    log::info!("  Aircraft types: {}", stats.total_aircraft_types);
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let last_updated = cli
        .last_updated
        .unwrap_or_else(|| time::OffsetDateTime::now_utc().date());

    let data = match travels::read(&cli.input) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("\nUsage: update_travels /path/to/FlightyExport.csv");
            std::process::exit(1);
        }
    };

    let stats = travels::travel_stats(&data, last_updated);
    summary(&stats);

    travels::render::write(&stats, &cli.output)?;

    Ok(())
}
