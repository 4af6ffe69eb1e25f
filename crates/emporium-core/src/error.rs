//! # Error Types
//!
//! Domain-specific error types for emporium-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  emporium-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog, ledger and pricing failures           │
//! │  └── ValidationError  - Input and catalog data validation failures     │
//! │                                                                         │
//! │  emporium-store errors (separate crate)                                │
//! │  └── StoreError       - Order counter failures                         │
//! │                                                                         │
//! │  terminal app errors                                                   │
//! │  └── AppError         - What the session loop sees                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → console message        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Handling Policy
//! - `InvalidSelection` is recovered where it happens, by asking again
//! - Every other `CoreError` aborts the current menu action and returns the
//!   customer to the main menu with the error's message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Item name is not present in any catalog.
    ///
    /// ## When This Occurs
    /// - A catalog file lists fewer items than the ledger references
    /// - A typo in a name passed to a lookup
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Quantity is not a positive integer (or exceeds the maximum).
    ///
    /// ## User Workflow
    /// ```text
    /// How many would you like?
    /// < two
    ///      │
    ///      ▼
    /// InvalidQuantity { input: "two", reason: "must be a whole number" }
    ///      │
    ///      ▼
    /// Back to the main menu, order unchanged
    /// ```
    #[error("Invalid quantity '{input}': {reason}")]
    InvalidQuantity { input: String, reason: String },

    /// Menu or tip choice outside its closed set of options.
    #[error("Invalid selection '{input}': expected {expected}")]
    InvalidSelection { input: String, expected: String },

    /// Checkout attempted with nothing in the order.
    #[error("Your order is empty")]
    EmptyOrder,

    /// Composition edit attempted on an item without ingredients.
    #[error("{0} cannot be modified")]
    NotModifiable(String),

    /// Item is listed in the catalog but cannot be ordered right now.
    #[error("{0} is not available")]
    Unavailable(String),

    /// The order already holds the maximum number of distinct items.
    #[error("An order cannot have more than {max} different items")]
    LedgerFull { max: usize },

    /// Ingredient to remove is not part of the potion.
    #[error("{item} does not contain {ingredient}")]
    UnknownIngredient { item: String, ingredient: String },

    /// Ingredient to add is already part of the potion.
    #[error("{item} already contains {ingredient}")]
    IngredientAlreadyPresent { item: String, ingredient: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for an [`CoreError::InvalidSelection`].
    pub fn invalid_selection(input: impl Into<String>, expected: impl Into<String>) -> Self {
        CoreError::InvalidSelection {
            input: input.into(),
            expected: expected.into(),
        }
    }

    /// True for errors that are answered by asking the customer again.
    pub fn is_recoverable_by_prompt(&self) -> bool {
        matches!(self, CoreError::InvalidSelection { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while validating catalog data and raw console input, before any
/// business logic runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. malformed catalog JSON).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. the same item name twice in a catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
