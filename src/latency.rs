//! Latency derivation and per-minute aggregation.
//!
//! A single pass over the samples builds a running (sum, count, first
//! timestamp) accumulator per minute bucket, preserving first-insertion
//! order of the keys.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::types::{CaptureRecord, LatencySample, MinuteAverage};

/// Signed clock offset in seconds: positive when the capture clock reads
/// later than the device clock. Sub-second precision is preserved.
pub fn latency_seconds(capture: NaiveDateTime, device: NaiveDateTime) -> f64 {
    let delta = capture.signed_duration_since(device);
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1_000_000_000.0
}

/// `HH:MM` aggregation key, zero-padded 24-hour clock.
pub fn minute_bucket(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Derive the latency sample for one capture record.
pub fn sample_from_record(record: &CaptureRecord) -> LatencySample {
    LatencySample {
        minute: minute_bucket(&record.capture_time),
        latency_secs: latency_seconds(record.capture_time, record.device_time),
        capture_time: record.capture_time,
    }
}

struct MinuteAccumulator {
    minute: String,
    latency_sum: f64,
    sample_count: usize,
    first_capture_time: NaiveDateTime,
}

impl MinuteAccumulator {
    fn new(sample: &LatencySample) -> Self {
        Self {
            minute: sample.minute.clone(),
            latency_sum: sample.latency_secs,
            sample_count: 1,
            first_capture_time: sample.capture_time,
        }
    }

    fn add(&mut self, sample: &LatencySample) {
        self.latency_sum += sample.latency_secs;
        self.sample_count += 1;
    }

    fn finish(self) -> MinuteAverage {
        MinuteAverage {
            minute: self.minute,
            mean_latency_secs: self.latency_sum / self.sample_count as f64,
            first_capture_time: self.first_capture_time,
            sample_count: self.sample_count,
        }
    }
}

/// Average latency samples by minute bucket.
///
/// A minute that reappears later in the input merges into its existing
/// group; it never creates a new row or reorders the output.
pub fn average_by_minute(samples: &[LatencySample]) -> Vec<MinuteAverage> {
    let mut groups: Vec<MinuteAccumulator> = Vec::new();
    let mut index_by_minute: HashMap<String, usize> = HashMap::new();

    for sample in samples {
        match index_by_minute.get(&sample.minute) {
            Some(&index) => groups[index].add(sample),
            None => {
                index_by_minute.insert(sample.minute.clone(), groups.len());
                groups.push(MinuteAccumulator::new(sample));
            }
        }
    }

    groups.into_iter().map(MinuteAccumulator::finish).collect()
}
