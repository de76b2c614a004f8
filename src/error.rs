use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackboneError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing field '{column}' (index {index}) at row {row} of {file}")]
    FieldOutOfRange {
        file: &'static str,
        column: &'static str,
        index: usize,
        row: u64,
    },
}

pub type Result<T> = std::result::Result<T, BackboneError>;
