//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

/// Application errors: dataset, rendering and configuration failures.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("cannot read dataset: {path}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset in {origin}: {source}")]
    DatasetParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot render result: {0}")]
    Render(#[source] serde_json::Error),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
