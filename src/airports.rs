use std::collections::HashMap;

/// A country as shown on the website (e.g. `🇵🇹 Portugal`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country {
    /// The flag emoji
    pub flag: String,
    /// The english name (e.g. `United States`)
    pub name: String,
}

impl Country {
    /// The display string, flag followed by name
    pub fn display(&self) -> String {
        format!("{} {}", self.flag, self.name)
    }
}

#[derive(Debug, serde::Deserialize, Clone)]
struct AirportCountry {
    code: String,
    flag: String,
    country: String,
}

// note: only airports that appear in the flight history are listed.
// New airports show up as `Unknown country for airport` warnings and must be added here.
static AIRPORTS: &'static [u8] = include_bytes!("./airports.csv");

/// Map between the IATA code of an airport (e.g. `LIS`) and its [`Country`]
#[derive(Debug, Clone, PartialEq)]
pub struct AirportCountries(HashMap<String, Country>);

impl AirportCountries {
    /// Returns the [`AirportCountries`] embedded in `src/airports.csv`.
    pub fn new() -> Self {
        Self(
            super::csv::deserialize::<AirportCountry>(AIRPORTS)
                .map(|a| {
                    (
                        a.code,
                        Country {
                            flag: a.flag,
                            name: a.country,
                        },
                    )
                })
                .collect(),
        )
    }

    /// Returns the [`Country`] of the airport with IATA code `code`, if known.
    pub fn country(&self, code: &str) -> Option<&Country> {
        self.0.get(code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AirportCountries {
    fn default() -> Self {
        Self::new()
    }
}
