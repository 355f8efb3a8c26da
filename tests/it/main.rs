use std::error::Error;
use std::path::PathBuf;
use std::sync::Mutex;

use time::macros::date;

static HEADER: &str = "Date,Airline,Flight,From,To,Canceled,Aircraft Type Name\n";

/// A logger that keeps every record in memory
struct Captured(Mutex<Vec<(log::Level, String)>>);

impl log::Log for Captured {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.0
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURED: Captured = Captured(Mutex::new(Vec::new()));

fn write_export(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("FlightyExport.csv");
    std::fs::write(&path, content).unwrap();
    path
}

/// Verifies the summary of a minimal export with one completed and one canceled flight
#[test]
fn scenario() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let input = write_export(
        &dir,
        "From,To,Canceled,Date,Airline,Aircraft Type Name\nLAX,LHR,false,2020-01-01,BA,B777\nLAX,JFK,true,2020-02-01,AA,A321\n",
    );
    let output = dir.path().join("src/data/travels.ts");

    let stats = travels::run(&input, &output, date!(2024 - 01 - 18))?;

    assert_eq!(stats.total_flights, 1);
    assert_eq!(stats.total_airports, 2);
    assert_eq!(stats.airports, vec!["LAX", "LHR"]);
    assert_eq!(stats.total_distance, 8780);
    assert_eq!(stats.total_countries, 2);
    assert_eq!(stats.total_airlines, 1);
    assert_eq!(stats.total_aircraft_types, 1);
    assert_eq!(stats.first_flight, Some(date!(2020 - 01 - 01)));

    let rendered = std::fs::read_to_string(&output)?;
    assert!(rendered.contains("  totalDistance: 8780,\n"));
    assert!(rendered.contains("  firstFlight: \"2020-01-01\",\n"));
    assert!(rendered.contains("  lastUpdated: \"2024-01-18\",\n"));
    assert!(rendered.contains("\"🇬🇧 United Kingdom\",\n    \"🇺🇸 United States\""));
    Ok(())
}

#[test]
fn canceled_flights_do_not_count() -> Result<(), Box<dyn Error>> {
    let data = format!(
        "{HEADER}2019-03-01,JAL,JL1,HND,SIN,TRUE,Boeing 787\n2019-03-02,Singapore Airlines,SQ1,SIN,KUL,True,A350\n2020-01-01,TAP,TP1,LIS,MAD,false,A320\n"
    );
    let stats = travels::travel_stats(data.as_bytes(), date!(2024 - 01 - 18));

    assert_eq!(stats.total_flights, 1);
    assert_eq!(stats.total_distance, 500);
    assert_eq!(stats.airports, vec!["LIS", "MAD"]);
    assert_eq!(stats.countries, vec!["🇪🇸 Spain", "🇵🇹 Portugal"]);
    assert_eq!(stats.total_airlines, 1);
    assert_eq!(stats.total_aircraft_types, 1);
    assert_eq!(stats.first_flight, Some(date!(2020 - 01 - 01)));
    Ok(())
}

#[test]
fn first_flight_is_earliest() -> Result<(), Box<dyn Error>> {
    let data = format!(
        "{HEADER}2020-05-01,TAP,TP1,LIS,MAD,false,A320\n2018-12-29,TAP,TP2,MAD,LIS,false,A320\n2021-01-01,TAP,TP3,LIS,ORY,false,A320\n"
    );
    let stats = travels::travel_stats(data.as_bytes(), date!(2024 - 01 - 18));

    assert_eq!(stats.first_flight, Some(date!(2018 - 12 - 29)));
    Ok(())
}

#[test]
fn unknown_airport() -> Result<(), Box<dyn Error>> {
    let data = format!("{HEADER}2020-01-01,TAP,TP1,LIS,XXX,false,A320\n");

    let airports = travels::AirportCountries::new();
    let distances = travels::Distances::new();
    let mut builder = travels::StatsBuilder::new(&airports, &distances);
    builder.extend(&travels::read_flights(data.as_bytes()));
    assert_eq!(builder.unmapped_airports(), vec!["XXX"]);

    let stats = builder.build(date!(2024 - 01 - 18));
    assert_eq!(stats.total_airports, 2);
    assert_eq!(stats.airports, vec!["LIS", "XXX"]);
    assert_eq!(stats.countries, vec!["🇵🇹 Portugal"]);
    assert_eq!(stats.total_countries, 1);
    assert_eq!(stats.total_distance, travels::DEFAULT_KM as u64);
    Ok(())
}

#[test]
fn sorted_and_distinct() -> Result<(), Box<dyn Error>> {
    let data = format!(
        "{HEADER}2020-01-01,TAP,TP1,OPO,LIS,false,A320\n2020-01-02,TAP,TP2,LIS,OPO,false,A321\n2020-01-03,Ryanair,FR1,OPO,STN,false,B737\n2020-01-04,Ryanair,FR2,STN,BRU,false,B737\n"
    );
    let stats = travels::travel_stats(data.as_bytes(), date!(2024 - 01 - 18));

    assert_eq!(stats.airports, vec!["BRU", "LIS", "OPO", "STN"]);
    assert!(stats.airports.windows(2).all(|w| w[0] < w[1]));
    assert!(stats.countries.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(stats.total_airports, stats.airports.len());
    assert_eq!(stats.total_countries, stats.countries.len());
    assert_eq!(stats.total_airlines, 2);
    assert_eq!(stats.total_aircraft_types, 3);
    // OPO-LIS is not tabulated (same country), STN-BRU is not tabulated (different countries)
    assert_eq!(
        stats.total_distance,
        (travels::SAME_COUNTRY_KM * 2.0 + 1350.0 + travels::DEFAULT_KM) as u64
    );
    Ok(())
}

/// Running twice on the same export with the same date yields the same module
#[test]
fn idempotent() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let input = write_export(
        &dir,
        &format!("{HEADER}2020-01-01,TAP,TP1,LIS,JFK,false,A330\n2020-01-10,Delta,DL1,JFK,LAX,false,A321\n"),
    );
    let output = dir.path().join("travels.ts");

    travels::run(&input, &output, date!(2024 - 01 - 18))?;
    let first = std::fs::read(&output)?;
    travels::run(&input, &output, date!(2024 - 01 - 18))?;
    let second = std::fs::read(&output)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.csv");
    let output = dir.path().join("travels.ts");

    let result = travels::run(&input, &output, date!(2024 - 01 - 18));

    assert!(matches!(result, Err(travels::Error::FileRead { .. })));
    assert!(!output.exists());
}

/// Every unknown airport is warned about once, however many flights use it
#[test]
fn unknown_airport_warned_once() {
    log::set_logger(&CAPTURED).unwrap();
    log::set_max_level(log::LevelFilter::Warn);

    let data = format!(
        "{HEADER}2020-01-01,TAP,TP1,LIS,QQQ,false,A320\n2020-01-02,TAP,TP2,QQQ,LIS,false,A320\n2020-01-03,TAP,TP3,QQQ,MAD,false,A320\n"
    );
    let stats = travels::travel_stats(data.as_bytes(), date!(2024 - 01 - 18));
    assert_eq!(stats.total_airports, 3);
    assert_eq!(stats.total_countries, 2);

    let warnings = CAPTURED
        .0
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, message)| *level == log::Level::Warn && message.contains("QQQ"))
        .cloned()
        .collect::<Vec<_>>();
    assert_eq!(
        warnings,
        vec![(
            log::Level::Warn,
            "Unknown country for airport: QQQ".to_string()
        )]
    );
}

#[test]
fn invalid_utf8_is_replaced() {
    let mut data = HEADER.as_bytes().to_vec();
    data.extend_from_slice(b"2020-01-01,Caf\xe9 Air,CA1,LIS,MAD,false,A320\n");
    data.extend_from_slice(b"2020-01-02,TAP,TP1,MAD,LIS,false,A320\n");

    let stats = travels::travel_stats(&data, date!(2024 - 01 - 18));

    assert_eq!(stats.total_flights, 2);
    assert_eq!(stats.total_airlines, 2);
    assert_eq!(stats.total_distance, 1000);
}

/// A quote left open only affects the row it is in
#[test]
fn unbalanced_quote() {
    let data = format!(
        "From,To,Canceled,Date,Airline,Aircraft Type Name\nLAX,LHR,false,2018-01-01,\"BA,B777\nLAX,LHR,false,2020-01-01,BA,B777\nLHR,LAX,false,2020-02-01,BA \"x,y\" z,B777\n"
    );
    let stats = travels::travel_stats(data.as_bytes(), date!(2024 - 01 - 18));

    assert_eq!(stats.total_flights, 3);
    assert_eq!(stats.first_flight, Some(date!(2018 - 01 - 01)));
    assert_eq!(stats.total_distance, 3 * 8780);
    // "BA,B777", "BA", "BA x,y z"
    assert_eq!(stats.total_airlines, 3);
    assert_eq!(stats.total_aircraft_types, 1);
}

/// The read error and the usage are both written to stderr
#[cfg(feature = "build-binary")]
#[test]
fn missing_input_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_update_travels"))
        .current_dir(dir.path())
        .arg("does-not-exist.csv")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not read file: does-not-exist.csv"), "{stderr}");
    assert!(stderr.contains("Usage: update_travels /path/to/FlightyExport.csv"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Could not read file"), "{stdout}");
}
