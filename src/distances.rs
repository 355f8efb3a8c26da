use std::collections::HashMap;

use crate::{AirportCountries, Country};

/// Estimate when both airports are in the same country, in km
pub const SAME_COUNTRY_KM: f64 = 800.0;
/// Estimate between the United States and the United Kingdom, in km
pub const TRANSATLANTIC_KM: f64 = 8000.0;
/// Estimate between the United States and east Asia, in km
pub const TRANSPACIFIC_KM: f64 = 10000.0;
/// Estimate for every other flight, in km
pub const DEFAULT_KM: f64 = 3000.0;

/// Country of an airport missing from [`AirportCountries`]
pub static UNKNOWN_COUNTRY: &str = "Unknown";
static UNITED_STATES: &str = "United States";
static UNITED_KINGDOM: &str = "United Kingdom";
static EAST_ASIA: [&str; 5] = ["Japan", "South Korea", "Singapore", "Thailand", "Hong Kong"];

#[derive(Debug, serde::Deserialize, Clone)]
struct Route {
    from: String,
    to: String,
    km: f64,
}

// each route is listed once; the reverse direction is inserted on load
static DISTANCES: &'static [u8] = include_bytes!("./distances.csv");

/// The key of a route, e.g. `LAX-LHR`
pub fn pair_key(from: &str, to: &str) -> String {
    format!("{from}-{to}")
}

/// Approximate distances between known airport pairs, in km
#[derive(Debug, Clone, PartialEq)]
pub struct Distances(HashMap<String, f64>);

impl Distances {
    /// Returns the [`Distances`] embedded in `src/distances.csv`, in both directions.
    pub fn new() -> Self {
        let mut distances = HashMap::new();
        for route in super::csv::deserialize::<Route>(DISTANCES) {
            distances.insert(pair_key(&route.to, &route.from), route.km);
            distances.insert(pair_key(&route.from, &route.to), route.km);
        }
        Self(distances)
    }

    /// Returns the tabulated distance of `from` -> `to`, if known.
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.0.get(&pair_key(from, to)).copied()
    }

    /// Returns the distance of `from` -> `to` in km: the tabulated value when the pair is known,
    /// else a rough estimate based on the countries of both airports.
    pub fn estimate(&self, from: &str, to: &str, airports: &AirportCountries) -> f64 {
        self.get(from, to)
            .unwrap_or_else(|| heuristic(airports.country(from), airports.country(to)))
    }
}

impl Default for Distances {
    fn default() -> Self {
        Self::new()
    }
}

fn is_pair(from: &str, to: &str, a: impl Fn(&str) -> bool, b: impl Fn(&str) -> bool) -> bool {
    (a(from) && b(to)) || (b(from) && a(to))
}

fn country_name(country: Option<&Country>) -> &str {
    country.map_or(UNKNOWN_COUNTRY, |c| c.name.as_str())
}

/// Estimate of a flight between two countries. Missing countries resolve to [`UNKNOWN_COUNTRY`].
fn heuristic(from: Option<&Country>, to: Option<&Country>) -> f64 {
    let (from, to) = (country_name(from), country_name(to));

    let us = |c: &str| c == UNITED_STATES;
    if from == to {
        SAME_COUNTRY_KM
    } else if is_pair(from, to, us, |c| c == UNITED_KINGDOM) {
        TRANSATLANTIC_KM
    } else if is_pair(from, to, us, |c| EAST_ASIA.contains(&c)) {
        TRANSPACIFIC_KM
    } else {
        DEFAULT_KM
    }
}
