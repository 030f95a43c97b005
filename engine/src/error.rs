use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to read catalog '{path}': {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing system error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    // Raised per row while loading the directory; the loader logs it and moves on.
    #[error("Malformed catalog row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Invalid synthesis input: {0}")]
    InvalidSynthesis(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
