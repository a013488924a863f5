//! Error types for lrumap

use std::fmt;

/// Result type alias for lrumap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for map construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Capacity must hold at least one entry
    InvalidCapacity(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(cap) => {
                write!(f, "Invalid capacity: {} (must be greater than 0)", cap)
            }
        }
    }
}

impl std::error::Error for Error {}
