//! Error types for the player index

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data file not found: {}", path.display())]
    MissingDataFile { path: PathBuf },

    #[error("Malformed record in {file} at line {line}: {reason}")]
    MalformedRecord {
        file: String,
        line: u64,
        reason: String,
    },

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid command {input:?}: {reason}")]
    InvalidCommand { input: String, reason: String },
}
