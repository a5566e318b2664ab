//! Error types for pool building, generation and strength estimation.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Generation failures. All of them are recoverable by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("empty character pool")]
    EmptyPool,
    #[error("invalid length: {0}")]
    InvalidLength(#[from] LengthError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("length must be at least 1")]
    Zero,
    #[error("{0:?} is not a number")]
    NotNumeric(String),
    #[error("{length} is outside {min}..={max}")]
    OutOfRange { length: usize, min: usize, max: usize },
}

/// Strength estimator failures. Never fatal: the password stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("strength estimator failed: {0}")]
    Failed(String),
    #[error("strength score {0} outside 0..=4")]
    ScoreOutOfRange(u8),
}
