//! # Receipt
//!
//! Assembles the customer copy from a priced order.
//!
//! ## Layout
//! ```text
//! Dew’s Potion Emporium
//!
//! Number 4, Privet Drive, Little Whinging, Surrey
//! (787)-000-0000
//! ------------------------------
//! Date: 2026-10-14
//! Order #: 7
//! ------------------------------
//! Healing potion x2
//!   - Troll Sweat
//! ------------------------------
//! Subtotal:               $10.00
//! Tip:                     $2.00
//! IVU (11.5%):             $1.38
//! Total:                  $13.38
//!
//! Thank you for shopping with us!
//! <<< CUSTOMER COPY >>>
//! [ADD_TIP_STAMP]            ← only in to_text(), only when a tip was given
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ledger::OrderLedger;
use crate::pricing::PricingResult;
use crate::types::ShopInfo;
use crate::RECEIPT_WIDTH;

/// Marker line telling a renderer to add the tip stamp.
pub const TIP_STAMP_MARKER: &str = "[ADD_TIP_STAMP]";

/// Order number printed on the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderNumber {
    /// Issued by the order counter.
    Issued(u64),
    /// The counter could not be reached; printed as `----`.
    Unassigned,
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderNumber::Issued(n) => write!(f, "{}", n),
            OrderNumber::Unassigned => f.write_str("----"),
        }
    }
}

/// A finished customer copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    lines: Vec<String>,
    tip_stamp: bool,
    order_number: OrderNumber,
}

impl Receipt {
    /// Builds the receipt text.
    ///
    /// Item lines follow ledger order; each item name is capitalized (first
    /// letter upper, the rest lower) and potions with edited recipes get one
    /// indented line per change.
    pub fn build(
        shop: &ShopInfo,
        date: NaiveDate,
        order_number: OrderNumber,
        ledger: &OrderLedger,
        pricing: &PricingResult,
    ) -> Self {
        let separator = "-".repeat(RECEIPT_WIDTH);
        let mut lines = vec![
            shop.name.clone(),
            String::new(),
            shop.address.clone(),
            shop.phone.clone(),
            separator.clone(),
            format!("Date: {}", date.format("%Y-%m-%d")),
            format!("Order #: {}", order_number),
            separator.clone(),
        ];

        for entry in ledger.entries() {
            lines.push(format!("{} x{}", capitalize(&entry.name), entry.quantity));
            if let Some(composition) = &entry.composition {
                lines.extend(composition.summary().into_iter().map(|s| format!("  {}", s)));
            }
        }

        lines.push(separator);
        lines.push(amount_line("Subtotal:", &pricing.subtotal.to_string()));
        lines.push(amount_line("Tip:", &pricing.tip_amount.to_string()));
        lines.push(amount_line(
            &format!("IVU ({}):", pricing.tax_rate),
            &pricing.tax_amount.to_string(),
        ));
        lines.push(amount_line("Total:", &pricing.total.to_string()));
        lines.push(String::new());
        lines.push("Thank you for shopping with us!".to_string());
        lines.push("<<< CUSTOMER COPY >>>".to_string());

        Receipt {
            lines,
            tip_stamp: pricing.tip_given,
            order_number,
        }
    }

    /// Printed lines, without the tip-stamp marker.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True when a tip was given and the renderer should add the tip stamp.
    pub fn tip_stamp(&self) -> bool {
        self.tip_stamp
    }

    pub fn order_number(&self) -> OrderNumber {
        self.order_number
    }

    /// Newline-joined text, with the tip-stamp marker line when requested.
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        if self.tip_stamp {
            text.push_str(TIP_STAMP_MARKER);
            text.push('\n');
        }
        text
    }
}

/// First character upper case, the rest lower case.
///
/// ## Example
/// ```rust
/// use emporium_core::receipt::capitalize;
///
/// assert_eq!(capitalize("Healing Potion"), "Healing potion");
/// assert_eq!(capitalize("don quixote"), "Don quixote");
/// ```
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Label on the left, amount flush with the receipt's right edge.
fn amount_line(label: &str, amount: &str) -> String {
    let pad = RECEIPT_WIDTH
        .saturating_sub(label.chars().count())
        .max(amount.chars().count() + 1);
    format!("{}{:>pad$}", label, amount, pad = pad)
}
