//! Ranking errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    /// The result limit must be at least one
    #[error("Invalid limit: {0}, must be greater than 0")]
    InvalidLimit(usize),
}

pub type Result<T> = std::result::Result<T, RankError>;
