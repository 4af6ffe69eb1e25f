//! # Pricing Engine
//!
//! Turns a ledger into money: subtotal, then tip, then IVU.
//!
//! ## Order of Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  compute_subtotal(ledger, catalog)   Σ unit_price × quantity            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  apply_tip(subtotal, tip)            subtotal + subtotal × tip%         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  apply_tax(total_with_tip, rate)     IVU on the POST-TIP amount         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  total = S × (1 + tip%) × (1 + IVU), rounded once to the cent           │
//! │  tax   = total - subtotal - tip, so the receipt lines add up            │
//! │                                                                         │
//! │  Tip comes before tax. Swapping them changes the total:                │
//! │    $10.00, 15% tip: (10.00 × 1.15) × 1.115 = $12.82                    │
//! │    taxing the subtotal instead:  11.50 + 1.15 = $12.65                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here prints or prompts; the checkout command decides the tip and
//! shows the numbers.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::ledger::OrderLedger;
use crate::money::Money;
use crate::types::{TaxRate, TipOption};

/// Σ unit_price × quantity over the ledger.
///
/// An empty ledger has a zero subtotal. Fails with `UnknownItem` if an entry
/// no longer resolves in the catalog.
pub fn compute_subtotal(ledger: &OrderLedger, catalog: &Catalog) -> CoreResult<Money> {
    ledger
        .items()
        .map(|(name, qty)| catalog.price_of(name).map(|price| price * qty))
        .sum()
}

/// Returns `(total_with_tip, tip_given)`.
///
/// ## Example
/// ```rust
/// use emporium_core::{Money, TipOption};
/// use emporium_core::pricing::apply_tip;
///
/// let (total, tipped) = apply_tip(Money::from_cents(1000), TipOption::Twenty);
/// assert_eq!(total.cents(), 1200);
/// assert!(tipped);
/// ```
pub fn apply_tip(subtotal: Money, tip: TipOption) -> (Money, bool) {
    let tip_amount = subtotal.apply_rate(tip.bps());
    (subtotal + tip_amount, tip.is_tip())
}

/// IVU owed on the post-tip amount. Only the tax is returned.
///
/// Rounds the tax on its own. [`PricingResult::compute`] instead rounds the
/// whole tip-then-tax product once, which can differ from this by a cent.
pub fn apply_tax(total_with_tip: Money, rate: TaxRate) -> Money {
    total_with_tip.calculate_tax(rate)
}

/// Prices a non-empty ledger in one step.
pub fn price_order(
    ledger: &OrderLedger,
    catalog: &Catalog,
    tip: TipOption,
    rate: TaxRate,
) -> CoreResult<PricingResult> {
    if ledger.is_empty() {
        return Err(CoreError::EmptyOrder);
    }
    let subtotal = compute_subtotal(ledger, catalog)?;
    Ok(PricingResult::compute(subtotal, tip, rate))
}

/// Every amount printed on a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub subtotal: Money,
    pub tip_amount: Money,
    pub tax_amount: Money,
    pub total: Money,
    pub tip_given: bool,
    pub tip: TipOption,
    pub tax_rate: TaxRate,
}

impl PricingResult {
    /// Applies tip, then tax, to an already computed subtotal.
    ///
    /// The total is `subtotal × (1 + tip) × (1 + tax)` rounded half up once.
    /// The tip is rounded to the cent and the tax takes the remainder.
    pub fn compute(subtotal: Money, tip: TipOption, tax_rate: TaxRate) -> Self {
        let (total_with_tip, tip_given) = apply_tip(subtotal, tip);
        let total = compound_total(subtotal, tip.bps(), tax_rate.bps());

        PricingResult {
            subtotal,
            tip_amount: total_with_tip - subtotal,
            tax_amount: total - total_with_tip,
            total,
            tip_given,
            tip,
            tax_rate,
        }
    }

    /// Subtotal plus tip, before IVU.
    pub fn total_with_tip(&self) -> Money {
        self.subtotal + self.tip_amount
    }
}

/// `subtotal × (10000 + tip_bps) × (10000 + tax_bps) / 10⁸`, rounded half up.
fn compound_total(subtotal: Money, tip_bps: u32, tax_bps: u32) -> Money {
    const SCALE: i128 = 100_000_000;
    let exact =
        subtotal.cents() as i128 * (10_000 + tip_bps as i128) * (10_000 + tax_bps as i128);
    Money::from_cents(((exact + SCALE / 2) / SCALE) as i64)
}

// =============================================================================
// Unit Tests
// =============================================================================
