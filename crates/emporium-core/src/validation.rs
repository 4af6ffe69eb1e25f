//! # Validation Module
//!
//! Input validation utilities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (terminal app)                                       │
//! │  ├── Raw line read from stdin                                          │
//! │  └── THIS MODULE: parse menu numbers and quantities                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog / Ledger                                             │
//! │  ├── THIS MODULE: catalog entry rules                                  │
//! │  └── Ledger capacity and item resolution                               │
//! │                                                                         │
//! │  Nothing reaches the ledger until both layers agree                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use emporium_core::validation::{parse_quantity, parse_menu_number};
//!
//! assert_eq!(parse_quantity("3").unwrap(), 3);
//! assert!(parse_quantity("0").is_err());
//! assert_eq!(parse_menu_number("2", 5).unwrap(), 2);
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> CoreResult<u32> {
    if qty <= 0 {
        return Err(CoreError::InvalidQuantity {
            input: qty.to_string(),
            reason: "quantity must be positive".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY as i64 {
        return Err(CoreError::InvalidQuantity {
            input: qty.to_string(),
            reason: format!("quantity cannot exceed {}", MAX_ITEM_QUANTITY),
        });
    }

    Ok(qty as u32)
}

/// Parses a quantity typed at the console.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  How many would you like?                                               │
/// │                                                                         │
/// │  < 2                                                                    │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_quantity("2") ← THIS FUNCTION                                    │
/// │       │                                                                 │
/// │       ├── not an integer?  → InvalidQuantity                            │
/// │       ├── qty <= 0?        → InvalidQuantity                            │
/// │       ├── qty > 999?       → InvalidQuantity                            │
/// │       │                                                                 │
/// │       └── OK → OrderLedger::upsert                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_quantity(input: &str) -> CoreResult<u32> {
    let trimmed = input.trim();
    let qty: i64 = trimmed.parse().map_err(|_| CoreError::InvalidQuantity {
        input: trimmed.to_string(),
        reason: "quantity must be a whole number".to_string(),
    })?;

    validate_quantity(qty).map_err(|err| match err {
        CoreError::InvalidQuantity { reason, .. } => CoreError::InvalidQuantity {
            input: trimmed.to_string(),
            reason,
        },
        other => other,
    })
}

/// Parses a 1-based menu number in `1..=max`.
pub fn parse_menu_number(input: &str, max: usize) -> CoreResult<usize> {
    let trimmed = input.trim();
    let expected = || format!("a number from 1 to {}", max);

    match trimmed.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(CoreError::invalid_selection(trimmed, expected())),
    }
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed MAX_PRICE_CENTS ($1,000,000.00)
///
/// ## Example
/// ```rust
/// use emporium_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(500).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(i64::MAX).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Healing Potion").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1).unwrap(), 1);
        assert_eq!(validate_quantity(999).unwrap(), 999);

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 4 ").unwrap(), 4);

        let err = parse_quantity("two").unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { ref input, .. } if input == "two"));

        let err = parse_quantity("2.5").unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { .. }));

        let err = parse_quantity("-3").unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { ref input, .. } if input == "-3"));
    }

    #[test]
    fn test_parse_menu_number() {
        assert_eq!(parse_menu_number("1", 5).unwrap(), 1);
        assert_eq!(parse_menu_number("5", 5).unwrap(), 5);

        for bad in ["0", "6", "abc", "", "-1", "1.0"] {
            let err = parse_menu_number(bad, 5).unwrap_err();
            assert!(err.is_recoverable_by_prompt(), "{bad} should be re-prompted");
        }
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert!(validate_price_cents(MAX_PRICE_CENTS + 1).is_err());
        assert!(validate_price_cents(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1150).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
