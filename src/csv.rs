use std::io::Cursor;

use serde::de::DeserializeOwned;

/// Deserializes a CSV with a header row whose records are `D`.
/// # Panic
/// Panics if a record is not a `D`. Only use it on data embedded in the crate.
pub fn deserialize<'a, D: DeserializeOwned + 'a>(data: &'a [u8]) -> impl Iterator<Item = D> + 'a {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_reader(Cursor::new(data));
    rdr.into_deserialize().map(|r| {
        let record: D = r.expect("embedded CSV to be deserializable");
        record
    })
}

/// A CSV read into memory: its header and its rows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Records {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Splits a line into fields. A `"` toggles quoting and is dropped;
/// a `,` separates fields only when not quoted.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut field = String::new();
    let mut quoted = false;
    for c in line.chars() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// Reads a CSV whose first line is a header, one record per line.
/// Rows may have any number of fields and invalid UTF-8 is replaced by `U+FFFD`.
pub fn read_records(data: &[u8]) -> Records {
    let content = String::from_utf8_lossy(data);
    let mut lines = content.trim().lines().map(split_line);
    let header = lines.next().unwrap_or_default();
    Records {
        header,
        rows: lines.collect(),
    }
}
