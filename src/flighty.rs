//! Reading of the CSV export of the [Flighty](https://flighty.com) app.

static FROM: &str = "From";
static TO: &str = "To";
static CANCELED: &str = "Canceled";
static DATE: &str = "Date";
static AIRLINE: &str = "Airline";
static AIRCRAFT_TYPE: &str = "Aircraft Type Name";

/// A flight of the export, with its fields trimmed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlightRecord {
    /// IATA code of the origin airport (e.g. `LAX`)
    pub from: String,
    /// IATA code of the destination airport
    pub to: String,
    /// Date of the flight, expected in `yyyy-mm-dd`
    pub date: String,
    pub airline: String,
    pub aircraft_type: String,
    pub canceled: bool,
}

/// Position of each column of interest in the header. `None` when the column is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    from: Option<usize>,
    to: Option<usize>,
    canceled: Option<usize>,
    date: Option<usize>,
    airline: Option<usize>,
    aircraft_type: Option<usize>,
}

impl Columns {
    fn new(header: &[String]) -> Self {
        let position = |name: &str| header.iter().position(|column| column == name);
        Self {
            from: position(FROM),
            to: position(TO),
            canceled: position(CANCELED),
            date: position(DATE),
            airline: position(AIRLINE),
            aircraft_type: position(AIRCRAFT_TYPE),
        }
    }

    fn record(&self, row: &[String]) -> FlightRecord {
        let field = |column: Option<usize>| {
            column
                .and_then(|i| row.get(i))
                .map_or("", |field| field.as_str())
        };
        FlightRecord {
            from: field(self.from).trim().to_string(),
            to: field(self.to).trim().to_string(),
            date: field(self.date).trim().to_string(),
            airline: field(self.airline).trim().to_string(),
            aircraft_type: field(self.aircraft_type).trim().to_string(),
            canceled: field(self.canceled).eq_ignore_ascii_case("true"),
        }
    }
}

/// Returns the flights of a Flighty export, canceled ones included.
/// Rows with less than two fields (e.g. blank lines) are skipped and
/// missing columns are read as empty fields.
pub fn read_flights(data: &[u8]) -> Vec<FlightRecord> {
    let records = super::csv::read_records(data);
    let columns = Columns::new(&records.header);
    if columns.from.is_none() || columns.to.is_none() {
        log::debug!("Export has no From/To columns: {:?}", records.header);
    }

    records
        .rows
        .iter()
        .filter(|row| row.len() >= 2)
        .map(|row| columns.record(row))
        .collect()
}
