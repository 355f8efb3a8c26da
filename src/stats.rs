use std::collections::BTreeSet;

use time::Date;

use crate::{AirportCountries, Distances, FlightRecord};

/// Summary of the flight history, as displayed on the website
#[derive(Debug, Clone, PartialEq)]
pub struct TravelStats {
    /// number of non-canceled flights
    pub total_flights: usize,
    /// sum of the (estimated) distances of all flights, in km
    pub total_distance: u64,
    pub total_countries: usize,
    pub total_airports: usize,
    pub total_airlines: usize,
    pub total_aircraft_types: usize,
    /// date of the earliest flight. None when no flight has a valid date
    pub first_flight: Option<Date>,
    pub last_updated: Date,
    /// sorted IATA codes of all airports visited
    pub airports: Vec<String>,
    /// sorted display strings of all countries visited (e.g. `🇵🇹 Portugal`)
    pub countries: Vec<String>,
}

/// Accumulates [`FlightRecord`]s into a [`TravelStats`].
pub struct StatsBuilder<'a> {
    airport_countries: &'a AirportCountries,
    distances: &'a Distances,
    flights: usize,
    canceled: usize,
    distance: f64,
    first_flight: Option<Date>,
    airports: BTreeSet<String>,
    airlines: BTreeSet<String>,
    aircraft_types: BTreeSet<String>,
}

fn parse_date(date: &str) -> Result<Date, time::error::Parse> {
    Date::parse(date, time::macros::format_description!("[year]-[month]-[day]"))
}

fn insert_non_empty(set: &mut BTreeSet<String>, value: &str) {
    if !value.is_empty() && !set.contains(value) {
        set.insert(value.to_string());
    }
}

impl<'a> StatsBuilder<'a> {
    pub fn new(airport_countries: &'a AirportCountries, distances: &'a Distances) -> Self {
        Self {
            airport_countries,
            distances,
            flights: 0,
            canceled: 0,
            distance: 0.0,
            first_flight: None,
            airports: Default::default(),
            airlines: Default::default(),
            aircraft_types: Default::default(),
        }
    }

    /// Adds a flight. Canceled flights are counted apart and do not contribute to the stats.
    pub fn add(&mut self, flight: &FlightRecord) {
        if flight.canceled {
            self.canceled += 1;
            return;
        }
        self.flights += 1;

        insert_non_empty(&mut self.airports, &flight.from);
        insert_non_empty(&mut self.airports, &flight.to);
        insert_non_empty(&mut self.airlines, &flight.airline);
        insert_non_empty(&mut self.aircraft_types, &flight.aircraft_type);

        if !flight.date.is_empty() {
            match parse_date(&flight.date) {
                Ok(date) => {
                    self.first_flight = Some(self.first_flight.map_or(date, |d| d.min(date)))
                }
                Err(e) => log::debug!("Date \"{}\" ignored: {e}", flight.date),
            }
        }

        if !flight.from.is_empty() && !flight.to.is_empty() {
            self.distance += self
                .distances
                .estimate(&flight.from, &flight.to, self.airport_countries);
        }
    }

    /// Number of non-canceled flights added so far
    pub fn flights(&self) -> usize {
        self.flights
    }

    /// Number of canceled flights added so far
    pub fn canceled(&self) -> usize {
        self.canceled
    }

    /// Airports without a known country, sorted
    pub fn unmapped_airports(&self) -> Vec<&str> {
        self.airports
            .iter()
            .filter(|a| self.airport_countries.country(a).is_none())
            .map(|a| a.as_str())
            .collect()
    }

    /// Returns the [`TravelStats`] of all flights added.
    /// Airports without a known country are logged and do not count towards countries.
    pub fn build(self, last_updated: Date) -> TravelStats {
        let countries = self
            .airports
            .iter()
            .filter_map(|airport| {
                let country = self.airport_countries.country(airport);
                if country.is_none() {
                    log::warn!("Unknown country for airport: {airport}");
                }
                country.map(|c| c.display())
            })
            .collect::<BTreeSet<_>>();

        TravelStats {
            total_flights: self.flights,
            total_distance: self.distance.round() as u64,
            total_countries: countries.len(),
            total_airports: self.airports.len(),
            total_airlines: self.airlines.len(),
            total_aircraft_types: self.aircraft_types.len(),
            first_flight: self.first_flight,
            last_updated,
            airports: self.airports.into_iter().collect(),
            countries: countries.into_iter().collect(),
        }
    }
}

impl<'a> Extend<&'a FlightRecord> for StatsBuilder<'_> {
    fn extend<T: IntoIterator<Item = &'a FlightRecord>>(&mut self, iter: T) {
        iter.into_iter().for_each(|flight| self.add(flight))
    }
}
