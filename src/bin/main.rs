//! CLI binary for the latency log converter
//!
//! This provides the command-line interface for the latlog library.

use clap::{Arg, Command};
use latlog::{convert_file, ConvertOptions};
use std::path::PathBuf;

fn main() {
    let command = Command::new("Latency Log Converter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read a CSV capture log of paired timestamps and write per-minute average latency as tab-separated plot data.")
        .arg(
            Arg::new("input")
                .help("CSV capture log with 'Timestamp' and 'Timestamp (ESP32)' columns")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Destination data file (default: input path with .dat extension)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and per-minute aggregation detail")
                .action(clap::ArgAction::SetTrue),
        );

    #[cfg(feature = "json")]
    let command = command.arg(
        Arg::new("json")
            .long("json")
            .help("Also export the aggregated minutes as JSON")
            .value_name("FILE"),
    );

    let matches = command.get_matches();

    let input = PathBuf::from(matches.get_one::<String>("input").unwrap());
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| input.with_extension("dat"));
    let debug = matches.get_flag("debug");

    let is_csv = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        eprintln!(
            "Warning: input does not have a .csv extension: {}",
            input.display()
        );
    }

    if debug {
        println!("Input: {}", input.display());
        println!("Output: {}", output.display());
        println!("Build: {}", env!("VERGEN_GIT_SHA"));
    }

    #[cfg(feature = "json")]
    let json = matches.get_one::<String>("json").map(PathBuf::from);
    #[cfg(not(feature = "json"))]
    let json = None;

    let options = ConvertOptions { json, debug };

    match convert_file(&input, &output, &options) {
        Ok(summary) => {
            println!(
                "Wrote {} minute averages ({} records) to {}",
                summary.minutes,
                summary.records,
                output.display()
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
