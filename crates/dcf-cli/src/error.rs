//! CLI error types.

use dcf_core::{InputError, ValuationError};
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A parameter was missing or malformed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The valuation engine rejected the parameters.
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// Interactive prompt failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
