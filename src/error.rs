use std::fmt;
use std::path::PathBuf;

/// Custom error types for capture log conversion
#[derive(Debug)]
pub enum ConvertError {
    /// I/O errors
    Io(std::io::Error),
    /// CSV reading errors
    Csv(csv::Error),
    /// Input file does not exist
    InputMissing(PathBuf),
    /// Required columns absent from the CSV header
    MissingColumns(Vec<String>),
    /// Timestamp value that matches none of the accepted layouts
    InvalidTimestamp { column: String, value: String },
    /// Export format error
    Export(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(err) => write!(f, "I/O error: {}", err),
            ConvertError::Csv(err) => write!(f, "CSV error: {}", err),
            ConvertError::InputMissing(path) => {
                write!(f, "input file not found: {}", path.display())
            }
            ConvertError::MissingColumns(columns) => write!(
                f,
                "missing required column(s) in CSV header: {}",
                columns.join(", ")
            ),
            ConvertError::InvalidTimestamp { column, value } => {
                write!(
                    f,
                    "unrecognized timestamp in column '{}': '{}'",
                    column, value
                )
            }
            ConvertError::Export(msg) => write!(f, "export error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(err) => Some(err),
            ConvertError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        ConvertError::Csv(err)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
