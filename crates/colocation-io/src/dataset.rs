//! Loads the `Feature,Instance,LocX,LocY` record set into `Instance` values.

use crate::error::DatasetError;
use colocation_core::Instance;
use std::path::Path;

/// Parses a dataset from an in-memory CSV string (header row required).
pub fn parse_dataset(csv_text: &str) -> Result<Vec<Instance>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(csv_text.as_bytes());
    let headers = reader.headers()?.clone();
    let feature_col = column_index(&headers, "Feature")?;
    let instance_col = column_index(&headers, "Instance")?;
    let x_col = column_index(&headers, "LocX")?;
    let y_col = column_index(&headers, "LocY")?;

    let mut instances = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record?;
        let line = row_index as u64 + 2; // header is line 1

        let feature = record
            .get(feature_col)
            .ok_or(DatasetError::MissingColumn { line, column: "Feature" })?
            .trim();
        if feature.is_empty() {
            return Err(DatasetError::EmptyFeature { line });
        }

        let instance_raw = record
            .get(instance_col)
            .ok_or(DatasetError::MissingColumn { line, column: "Instance" })?;
        let instance_num: i64 = instance_raw.trim().parse().map_err(|_| DatasetError::InvalidNumber {
            line,
            column: "Instance",
            value: instance_raw.to_string(),
        })?;

        let x = parse_f64(&record, x_col, "LocX", line)?;
        let y = parse_f64(&record, y_col, "LocY", line)?;

        let id = format!("{feature}{instance_num}");
        instances.push(Instance::new(feature, id, x, y));
    }

    Ok(instances)
}

/// Loads and parses a dataset from a file path.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<Instance>, DatasetError> {
    let text = std::fs::read_to_string(path)?;
    parse_dataset(&text)
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DatasetError::MissingColumn { line: 1, column: name })
}

fn parse_f64(record: &csv::StringRecord, col: usize, column: &'static str, line: u64) -> Result<f64, DatasetError> {
    let raw = record.get(col).ok_or(DatasetError::MissingColumn { line, column })?;
    raw.trim().parse::<f64>().map_err(|_| DatasetError::InvalidNumber {
        line,
        column,
        value: raw.to_string(),
    })
}
