//! Export functionality for aggregated latency data.
//!
//! The primary output is a tab-separated `.dat` file with columns
//! `waktu`, `latensi`, `baseline`, ready for gnuplot. An optional JSON
//! export of the same rows is available behind the `json` feature.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::MinuteAverage;

/// Constant zero reference column for downstream plotting.
pub const BASELINE: f64 = 0.0;

/// Write aggregated minute averages as tab-separated plot data.
///
/// Produces a header row and one line per minute bucket in the order
/// given. An empty slice yields a header-only file.
pub fn export_to_dat(averages: &[MinuteAverage], output_path: &Path) -> Result<()> {
    create_parent_dir(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "waktu\tlatensi\tbaseline")?;
    for average in averages {
        writeln!(
            writer,
            "{}\t{}\t{}",
            average.first_capture_time.format("%H:%M:%S"),
            format_float(average.mean_latency_secs),
            format_float(BASELINE)
        )?;
    }
    writer.flush()?;

    Ok(())
}

/// Export aggregated minute averages as pretty-printed JSON.
#[cfg(feature = "json")]
pub fn export_to_json(averages: &[MinuteAverage], output_path: &Path) -> Result<()> {
    use crate::error::ConvertError;
    use serde::Serialize;

    #[derive(Serialize)]
    struct JsonRow<'a> {
        waktu: String,
        latensi: f64,
        baseline: f64,
        minute: &'a str,
        samples: usize,
    }

    let rows: Vec<JsonRow> = averages
        .iter()
        .map(|average| JsonRow {
            waktu: average.first_capture_time.format("%H:%M:%S").to_string(),
            latensi: average.mean_latency_secs,
            baseline: BASELINE,
            minute: &average.minute,
            samples: average.sample_count,
        })
        .collect();

    create_parent_dir(output_path)?;
    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &rows)
        .map_err(|err| ConvertError::Export(format!("failed to write JSON: {err}")))?;

    Ok(())
}

fn create_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Whole numbers keep one decimal digit so gnuplot reads the column as
/// floats.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
