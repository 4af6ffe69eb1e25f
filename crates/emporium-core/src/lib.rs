//! # emporium-core: Pure Business Logic for Dew's Potion Emporium
//!
//! Pricing and receipt logic for the shop, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Emporium Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/terminal (menu + console)                  │   │
//! │  │   Main Menu ──► Buy / Modify / Books / Runes ──► Pay            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ emporium-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐           │   │
//! │  │   │ catalog │  │ ledger  │  │ pricing │  │ receipt │           │   │
//! │  │   │ entries │  │ qty map │  │ tip/IVU │  │  lines  │           │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └─────────┘           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO FILES • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                emporium-store (order counter)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Rates, tip options, categories, shop details
//! - [`catalog`] - The shop inventory and its lookups
//! - [`ledger`] - The in-session order
//! - [`composition`] - Ingredient edits on a potion
//! - [`pricing`] - Subtotal, tip, IVU
//! - [`receipt`] - Receipt text assembly
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use emporium_core::{Catalog, OrderLedger, TipOption, IVU_RATE};
//! use emporium_core::pricing::price_order;
//!
//! let catalog = Catalog::standard();
//! let mut ledger = OrderLedger::new();
//! ledger.add_from_catalog(&catalog, "Healing Potion", 2).unwrap();
//!
//! let pricing = price_order(&ledger, &catalog, TipOption::Twenty, IVU_RATE).unwrap();
//! assert_eq!(pricing.total.to_string(), "$13.38");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod composition;
pub mod error;
pub mod ledger;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogEntry};
pub use composition::Composition;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{LedgerEntry, OrderLedger};
pub use money::Money;
pub use pricing::PricingResult;
pub use receipt::{OrderNumber, Receipt};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The IVU (sales tax) charged on every order: 11.5%.
pub const IVU_RATE: TaxRate = TaxRate::from_bps(1150);

/// Maximum number of distinct items in a single order.
pub const MAX_LEDGER_ITEMS: usize = 100;

/// Maximum quantity of a single item.
///
/// ## Business Reason
/// Catches a mistyped quantity (1000 instead of 10) before it reaches the
/// receipt.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Highest unit price a catalog entry may carry: $1,000,000.00.
///
/// Keeps `price × MAX_ITEM_QUANTITY` summed over `MAX_LEDGER_ITEMS` lines far
/// inside i64 cents.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Column width of the printed receipt.
pub const RECEIPT_WIDTH: usize = 30;
