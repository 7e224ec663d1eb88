use thiserror::Error;

/// Error type for duration grammar parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("Invalid duration format: {0:?}")]
    InvalidFormat(String),

    #[error("Invalid duration number: {0:?}")]
    InvalidNumber(String),

    #[error("Invalid duration unit: {0:?}")]
    InvalidUnit(char),

    #[error("Duration out of range: {0:?}")]
    OutOfRange(String),
}
