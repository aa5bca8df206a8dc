//! Error types for the agenda ecosystem.

use thiserror::Error;

/// Errors that can occur in agenda operations.
///
/// The in-memory model itself is total: stores, the month grid and the day
/// index never fail. Errors only come from the edges (config, persistence).
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
