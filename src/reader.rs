//! CSV ingestion for paired-timestamp capture logs.
//!
//! The input is a comma-separated file with a header row. Only the two
//! timestamp columns are read; any additional columns are ignored.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{ConvertError, Result};
use crate::timestamp::{parse_datetime, strip_quotes};
use crate::types::CaptureRecord;

/// Header name of the local capture clock column.
pub const CAPTURE_COLUMN: &str = "Timestamp";

/// Header name of the device clock column.
pub const DEVICE_COLUMN: &str = "Timestamp (ESP32)";

/// Load a capture log from disk.
///
/// Fails with [`ConvertError::InputMissing`] when the path does not
/// resolve and with [`ConvertError::MissingColumns`] when one or both
/// required timestamp columns are absent from the header.
pub fn read_capture_log(path: &Path) -> Result<Vec<CaptureRecord>> {
    if !path.exists() {
        return Err(ConvertError::InputMissing(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let capture_index = headers.iter().position(|name| name == CAPTURE_COLUMN);
    let device_index = headers.iter().position(|name| name == DEVICE_COLUMN);

    let (capture_index, device_index) = match (capture_index, device_index) {
        (Some(capture), Some(device)) => (capture, device),
        (capture, device) => {
            let mut missing = Vec::new();
            if capture.is_none() {
                missing.push(CAPTURE_COLUMN.to_string());
            }
            if device.is_none() {
                missing.push(DEVICE_COLUMN.to_string());
            }
            return Err(ConvertError::MissingColumns(missing));
        }
    };

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let capture_time = parse_timestamp_field(&row, capture_index, CAPTURE_COLUMN)?;
        let device_time = parse_timestamp_field(&row, device_index, DEVICE_COLUMN)?;
        records.push(CaptureRecord {
            capture_time,
            device_time,
        });
    }

    Ok(records)
}

fn parse_timestamp_field(
    row: &csv::StringRecord,
    index: usize,
    column: &str,
) -> Result<NaiveDateTime> {
    let raw = row.get(index).unwrap_or_default();
    parse_datetime(strip_quotes(raw)).ok_or_else(|| ConvertError::InvalidTimestamp {
        column: column.to_string(),
        value: raw.to_string(),
    })
}
