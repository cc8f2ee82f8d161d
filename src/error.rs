//! Error types for neodb.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeoError {
    /// A close approach names an object that is not in the catalog.
    #[error("close approach references unknown designation '{designation}'")]
    UnknownDesignation { designation: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NeoError>;
