//! Core data types for the latency conversion pipeline.

use chrono::NaiveDateTime;

/// One row of the capture log: the same reading stamped by both clocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureRecord {
    /// Local capture time
    pub capture_time: NaiveDateTime,
    /// Clock reading reported by the device itself
    pub device_time: NaiveDateTime,
}

/// A capture record enriched with its minute bucket and clock offset.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencySample {
    /// `HH:MM` aggregation key derived from the capture time
    pub minute: String,
    /// Capture time minus device time, in signed fractional seconds
    pub latency_secs: f64,
    pub capture_time: NaiveDateTime,
}

/// Mean latency for one minute bucket.
///
/// Buckets are emitted in first-appearance order of the minute in the
/// source file, not in lexical or chronological order of the key.
#[derive(Debug, Clone, PartialEq)]
pub struct MinuteAverage {
    pub minute: String,
    /// Arithmetic mean of the bucket's latency samples
    pub mean_latency_secs: f64,
    /// Capture timestamp of the first row seen in this bucket
    pub first_capture_time: NaiveDateTime,
    pub sample_count: usize,
}
