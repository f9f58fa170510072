//! Error handling for the application

use thiserror::Error;

/// Pool data source errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolError {
    #[error("Mining pool not found: {0}")]
    NotFound(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Invalid pool data: {0}")]
    InvalidPoolData(String),
}

/// Errors raised while parsing sort/filter values from text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),

    #[error("Unknown pool status: {0}")]
    UnknownStatus(String),

    #[error("Unknown status filter: {0}")]
    UnknownStatusFilter(String),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Pool source error: {0}")]
    PoolError(#[from] PoolError),

    #[error("Invalid argument: {0}")]
    ParseError(#[from] ParseError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for PoolError {
    fn from(err: reqwest::Error) -> Self {
        PoolError::Api(err.to_string())
    }
}
