//! Conversion pipeline: read, derive, aggregate, write.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::export::export_to_dat;
use crate::latency::{average_by_minute, sample_from_record};
use crate::reader::read_capture_log;
use crate::types::LatencySample;

/// Options controlling a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Also export the aggregated minutes as JSON to this path
    pub json: Option<PathBuf>,
    /// Print per-stage diagnostics to stdout
    pub debug: bool,
}

/// Row counts from a completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Data rows read from the input
    pub records: usize,
    /// Minute buckets written to the output
    pub minutes: usize,
}

/// Convert a capture log into a tab-separated latency data file.
///
/// Runs the whole pipeline as one sequential pass: load the CSV, derive
/// per-row latency and minute bucket, average by minute in
/// first-appearance order, and write the `.dat` output.
pub fn convert_file(
    input_path: &Path,
    output_path: &Path,
    options: &ConvertOptions,
) -> Result<ConversionSummary> {
    let records = read_capture_log(input_path)?;
    if options.debug {
        println!(
            "Read {} records from {}",
            records.len(),
            input_path.display()
        );
    }

    let samples: Vec<LatencySample> = records.iter().map(sample_from_record).collect();
    let averages = average_by_minute(&samples);
    if options.debug {
        for average in &averages {
            println!(
                "  minute {}: mean {:.6} s over {} samples",
                average.minute, average.mean_latency_secs, average.sample_count
            );
        }
    }

    export_to_dat(&averages, output_path)?;

    if let Some(json_path) = &options.json {
        #[cfg(feature = "json")]
        {
            crate::export::export_to_json(&averages, json_path)?;
            if options.debug {
                println!("Exported JSON to {}", json_path.display());
            }
        }
        #[cfg(not(feature = "json"))]
        return Err(crate::error::ConvertError::Export(format!(
            "JSON export to {} requested, but this build lacks the 'json' feature",
            json_path.display()
        )));
    }

    Ok(ConversionSummary {
        records: records.len(),
        minutes: averages.len(),
    })
}
