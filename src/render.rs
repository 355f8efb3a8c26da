use std::path::Path;

use tinytemplate::TinyTemplate;

use crate::{Error, TravelStats};

static TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/travels_template.ts"
));
static TEMPLATE_NAME: &'static str = "t";

#[derive(serde::Serialize)]
struct Context {
    total_flights: usize,
    total_distance: u64,
    total_countries: usize,
    total_airports: usize,
    total_airlines: usize,
    total_aircraft_types: usize,
    first_flight: String,
    last_updated: String,
    airports: String,
    countries: String,
}

/// A string literal, JSON-escaped
fn literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// An array literal with one item per line, indented as a field of the exported object
fn array(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }
    let items = items
        .iter()
        .map(|item| format!("    {}", literal(item)))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("[\n{items}\n  ]")
}

impl From<&TravelStats> for Context {
    fn from(stats: &TravelStats) -> Self {
        Self {
            total_flights: stats.total_flights,
            total_distance: stats.total_distance,
            total_countries: stats.total_countries,
            total_airports: stats.total_airports,
            total_airlines: stats.total_airlines,
            total_aircraft_types: stats.total_aircraft_types,
            first_flight: stats
                .first_flight
                .map(|date| literal(&date.to_string()))
                .unwrap_or_else(|| "null".to_string()),
            last_updated: stats.last_updated.to_string(),
            airports: array(&stats.airports),
            countries: array(&stats.countries),
        }
    }
}

/// Renders [`TravelStats`] as a TypeScript module exporting `travelStats`.
pub fn render(stats: &TravelStats) -> Result<String, Error> {
    let context = Context::from(stats);

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;

    Ok(tt.render(TEMPLATE_NAME, &context)?)
}

/// Renders [`TravelStats`] and writes it to `path`, replacing any existing file.
pub fn write(stats: &TravelStats, path: &Path) -> Result<(), Error> {
    let rendered = render(stats)?;

    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(write_error)?;
    }
    std::fs::write(path, rendered).map_err(write_error)?;

    log::info!("Wrote stats to: {}", path.display());
    Ok(())
}
