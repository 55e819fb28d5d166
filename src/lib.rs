//! Latency Log Converter Library
//!
//! A Rust library for converting CSV capture logs of paired timestamps (a
//! local capture clock next to an embedded device clock) into per-minute
//! average latency data, written tab-separated for gnuplot.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line interface binary
//! - **`json`**: Enable JSON export of the aggregated minutes
//!
//! # Quick Start
//!
//! Convert a capture log and write the plot data:
//! ```rust,no_run
//! use latlog::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! let summary = convert_file(
//!     Path::new("timestamps.csv"),
//!     Path::new("latency.dat"),
//!     &ConvertOptions::default(),
//! ).unwrap();
//! println!("{} minute buckets from {} records", summary.minutes, summary.records);
//! ```
//!
//! Run the stages individually:
//! ```rust,no_run
//! use latlog::{average_by_minute, read_capture_log, sample_from_record};
//! use std::path::Path;
//!
//! let records = read_capture_log(Path::new("timestamps.csv")).unwrap();
//! let samples: Vec<_> = records.iter().map(sample_from_record).collect();
//! let averages = average_by_minute(&samples);
//! println!("{} distinct minutes", averages.len());
//! ```
//!
//! # Public API
//!
//! ## Pipeline
//! - [`convert_file`] - Read a capture log and write the `.dat` output
//! - [`read_capture_log`] - Load and validate the CSV capture log
//! - [`average_by_minute`] - Aggregate latency samples by minute bucket
//! - [`export_to_dat`] - Write aggregated minutes as tab-separated data
//!
//! ## Data Types
//! - [`CaptureRecord`] - One input row with both clock readings
//! - [`LatencySample`] - Derived latency and minute bucket for one row
//! - [`MinuteAverage`] - Mean latency for one minute bucket
//! - [`ConvertOptions`] - Configuration for a conversion run
//! - [`ConversionSummary`] - Row counts from a completed conversion
//!
//! ## Helpers
//! - [`latency_seconds`] - Signed clock offset in fractional seconds
//! - [`minute_bucket`] - `HH:MM` aggregation key
//! - [`sample_from_record`] - Derive the latency sample for one record
//! - [`strip_quotes`] - Remove one pair of literal double quotes
//! - [`parse_datetime`] - Datetime parsing with format auto-detection

// Module declarations
pub mod convert;
pub mod error;
pub mod export;
pub mod latency;
pub mod reader;
pub mod timestamp;
pub mod types;

// Re-export everything from modules for convenience
pub use convert::*;
pub use error::*;
pub use export::*;
pub use latency::*;
pub use reader::*;
pub use timestamp::*;
pub use types::*;
