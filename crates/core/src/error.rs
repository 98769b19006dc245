//! Core error types

use thiserror::Error;

/// Core error type for Fogwatch
#[derive(Debug, Error)]
pub enum CoreError {
    /// Coordinate outside the WGS84 latitude/longitude ranges
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Configuration value rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
