//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / lock contention                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError::Store (terminal app) ← CounterUnavailable                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Checkout prints "Order #: ----" and carries on                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A counter file holding garbage is not an error: it reads as 0.

use std::path::PathBuf;
use thiserror::Error;

/// Order counter store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The counter file could not be opened, read or written.
    ///
    /// ## When This Occurs
    /// - Data directory is read-only
    /// - Disk full
    /// - Path points at a directory
    #[error("Counter file {path} is not accessible: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Another session holds the counter lock.
    #[error("Counter file {path} is locked by another session")]
    Locked { path: PathBuf },

    /// The counter cannot grow any further.
    #[error("Order counter overflowed at {value}")]
    Overflow { value: u64 },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::Locked {
            path: PathBuf::from("Extra/OrderCount.txt"),
        };
        assert_eq!(
            err.to_string(),
            "Counter file Extra/OrderCount.txt is locked by another session"
        );
    }
}
