#![forbid(unsafe_code)]
//! Summarizes a flight history exported from Flighty into a TypeScript module
//! ([`TravelStats`]) displayed by the website.
use std::path::Path;

mod airports;
pub mod csv;
mod distances;
mod error;
mod flighty;
pub mod render;
mod stats;

pub use airports::*;
pub use distances::*;
pub use error::Error;
pub use flighty::*;
pub use stats::*;

/// Default location of the Flighty export
pub static DEFAULT_INPUT: &str = "FlightyExport.csv";
/// Default location of the generated module, relative to the working directory
pub static DEFAULT_OUTPUT: &str = "src/data/travels.ts";

/// Computes the [`TravelStats`] of the flights in a Flighty export.
pub fn travel_stats(data: &[u8], last_updated: time::Date) -> TravelStats {
    let flights = read_flights(data);

    let airports = AirportCountries::new();
    let distances = Distances::new();
    let mut builder = StatsBuilder::new(&airports, &distances);
    builder.extend(&flights);
    log::info!(
        "Found {} completed flights ({} canceled)",
        builder.flights(),
        builder.canceled()
    );

    builder.build(last_updated)
}

/// Reads the Flighty export at `input`.
/// # Error
/// Errors with [`Error::FileRead`] if the file does not exist or cannot be read
pub fn read(input: &Path) -> Result<Vec<u8>, Error> {
    log::info!("Reading CSV from: {}", input.display());
    std::fs::read(input).map_err(|source| Error::FileRead {
        path: input.to_path_buf(),
        source,
    })
}

/// Reads the Flighty export at `input`, computes its [`TravelStats`] and writes them to `output`.
/// # Error
/// Errors if `input` cannot be read or `output` cannot be written
pub fn run(input: &Path, output: &Path, last_updated: time::Date) -> Result<TravelStats, Error> {
    let data = read(input)?;
    let stats = travel_stats(&data, last_updated);
    render::write(&stats, output)?;
    Ok(stats)
}
