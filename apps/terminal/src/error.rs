//! # App Error Type
//!
//! Unified error type for the terminal session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Emporium                           │
//! │                                                                         │
//! │  Menu action (buy, modify, pay)                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError? ─── InvalidQuantity, EmptyOrder, ... ──► print message,     │
//! │         │                                            back to main menu  │
//! │         ▼                                                               │
//! │  StoreError / RenderError? ──► logged, checkout carries on             │
//! │         │                      (order # "----", no receipt file)        │
//! │         ▼                                                               │
//! │  InputClosed? ──► session abandoned                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Config / Console I/O? ──► fatal, process exits with failure           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use emporium_core::{CoreError, MAX_ITEM_QUANTITY};
use emporium_store::StoreError;

use crate::render::RenderError;

/// Everything that can go wrong while the app runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// The configuration file or environment is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading from or writing to the terminal failed.
    #[error("Console error: {0}")]
    Console(#[source] std::io::Error),

    /// Standard input reached end of file.
    #[error("Input closed")]
    InputClosed,
}

/// Machine-readable error kinds, recorded on log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The customer named something the shop does not sell
    UnknownItem,

    /// Quantity was not a positive whole number
    InvalidQuantity,

    /// Choice outside the listed options
    InvalidSelection,

    /// Pay with nothing in the order
    EmptyOrder,

    /// Ingredient edit on a book or runestone
    NotModifiable,

    /// Any other business rule
    BusinessLogic,

    /// Order counter could not be read or written
    CounterUnavailable,

    /// Receipt artifact could not be written
    RenderingFailure,

    /// Bad configuration
    ConfigError,

    /// Terminal I/O failed or input ended
    ConsoleError,
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Core(err) => match err {
                CoreError::UnknownItem(_) => ErrorCode::UnknownItem,
                CoreError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
                CoreError::InvalidSelection { .. } => ErrorCode::InvalidSelection,
                CoreError::EmptyOrder => ErrorCode::EmptyOrder,
                CoreError::NotModifiable(_) => ErrorCode::NotModifiable,
                _ => ErrorCode::BusinessLogic,
            },
            AppError::Store(_) => ErrorCode::CounterUnavailable,
            AppError::Render(_) => ErrorCode::RenderingFailure,
            AppError::Config(_) => ErrorCode::ConfigError,
            AppError::Console(_) | AppError::InputClosed => ErrorCode::ConsoleError,
        }
    }

    /// True when the session can print the error and return to the main menu.
    pub fn aborts_action_only(&self) -> bool {
        matches!(self, AppError::Core(_))
    }

    /// Text shown to the customer.
    ///
    /// Infrastructure errors get a generic line; the detail goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Core(CoreError::InvalidQuantity { input, .. }) => {
                format!(
                    "'{}' is not a quantity I can sell. Please use a whole number from 1 to {}.",
                    input, MAX_ITEM_QUANTITY
                )
            }
            AppError::Core(CoreError::InvalidSelection { .. }) => {
                "That is not one of the options.".to_string()
            }
            AppError::Core(CoreError::EmptyOrder) => {
                "Your order is empty. Buy something before paying.".to_string()
            }
            AppError::Core(err) => err.to_string(),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Order counter failure");
                "The order counter is unavailable.".to_string()
            }
            AppError::Render(err) => {
                tracing::error!(error = %err, "Receipt rendering failure");
                "The receipt could not be saved.".to_string()
            }
            AppError::Config(message) => format!("Invalid configuration: {}", message),
            AppError::Console(_) => "The terminal is not available.".to_string(),
            AppError::InputClosed => "Input closed.".to_string(),
        }
    }
}

/// Result type alias for app operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_abort_only_the_action() {
        let err = AppError::from(CoreError::EmptyOrder);
        assert!(err.aborts_action_only());
        assert_eq!(err.code(), ErrorCode::EmptyOrder);

        assert!(!AppError::InputClosed.aborts_action_only());
        assert!(!AppError::config("bad").aborts_action_only());
    }

    #[test]
    fn test_error_codes() {
        let store = AppError::from(StoreError::Overflow { value: u64::MAX });
        assert_eq!(store.code(), ErrorCode::CounterUnavailable);

        let not_modifiable = AppError::from(CoreError::NotModifiable("1984".into()));
        assert_eq!(not_modifiable.code(), ErrorCode::NotModifiable);
        assert_eq!(not_modifiable.user_message(), "1984 cannot be modified");
    }

    #[test]
    fn test_quantity_message_names_the_input() {
        let err = AppError::from(CoreError::InvalidQuantity {
            input: "two".into(),
            reason: "quantity must be a whole number".into(),
        });
        let message = err.user_message();
        assert!(message.starts_with("'two' is not a quantity"));
        assert!(message.ends_with(&format!("from 1 to {}.", MAX_ITEM_QUANTITY)));
    }
}
