//! # Domain Types
//!
//! Small value types shared by the catalog, pricing and receipt modules.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │   TipOption     │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  NoTip    0%    │   │  Potion         │       │
//! │  │  1150 = 11.5%   │   │  Ten     10%    │   │  HistoryBook    │       │
//! │  └─────────────────┘   │  Fifteen 15%    │   │  SpellBook      │       │
//! │                        │  Twenty  20%    │   │  OtherBook      │       │
//! │  ┌─────────────────┐   └─────────────────┘   │  Runestone      │       │
//! │  │    ShopInfo     │                         └─────────────────┘       │
//! │  │  name, address, │                                                   │
//! │  │  phone          │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1150 bps is the 11.5% IVU and every
/// rate the shop uses is an exact integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        crate::IVU_RATE
    }
}

/// Renders the shortest exact percentage: `11.5%`, `8.25%`, `10%`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Tip Option
// =============================================================================

/// The closed set of tips a customer may leave.
///
/// ## Tip Prompt
/// ```text
/// > Would you like to leave a tip?
///  (1.) No tip
///  (2.) 10%
///  (3.) 15%
///  (4.) 20%
/// < 4
///      │
///      ▼
/// TipOption::Twenty ──► subtotal + 20%
/// ```
/// There is no free-form tip amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipOption {
    #[default]
    NoTip,
    Ten,
    Fifteen,
    Twenty,
}

impl TipOption {
    /// All options in menu order.
    pub const ALL: [TipOption; 4] = [
        TipOption::NoTip,
        TipOption::Ten,
        TipOption::Fifteen,
        TipOption::Twenty,
    ];

    /// Basis points added on top of the subtotal.
    pub const fn bps(&self) -> u32 {
        match self {
            TipOption::NoTip => 0,
            TipOption::Ten => 1000,
            TipOption::Fifteen => 1500,
            TipOption::Twenty => 2000,
        }
    }

    /// Number shown next to this option in the tip prompt.
    pub const fn menu_number(&self) -> u8 {
        match self {
            TipOption::NoTip => 1,
            TipOption::Ten => 2,
            TipOption::Fifteen => 3,
            TipOption::Twenty => 4,
        }
    }

    /// Prompt label.
    pub const fn label(&self) -> &'static str {
        match self {
            TipOption::NoTip => "No tip",
            TipOption::Ten => "10%",
            TipOption::Fifteen => "15%",
            TipOption::Twenty => "20%",
        }
    }

    /// True for every option except [`TipOption::NoTip`].
    pub const fn is_tip(&self) -> bool {
        self.bps() > 0
    }
}

/// Accepts the menu number (`1`-`4`), the percentage (`10`, `15%`, ...) or
/// `no`/`none`/`0`.
impl FromStr for TipOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let normalized = raw.trim_end_matches('%').trim().to_lowercase();
        match normalized.as_str() {
            "1" | "0" | "no" | "none" | "no tip" => Ok(TipOption::NoTip),
            "2" | "10" => Ok(TipOption::Ten),
            "3" | "15" => Ok(TipOption::Fifteen),
            "4" | "20" => Ok(TipOption::Twenty),
            _ => Err(CoreError::invalid_selection(
                raw,
                "one of: no tip, 10%, 15%, 20% (1-4)",
            )),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// Which part of the shop an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Potion,
    HistoryBook,
    SpellBook,
    OtherBook,
    Runestone,
}

impl Category {
    /// Only potions have a recipe that can be edited.
    pub const fn is_modifiable(&self) -> bool {
        matches!(self, Category::Potion)
    }
}

/// The three book shelves of the book menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookShelf {
    History,
    Spells,
    Other,
}

impl BookShelf {
    /// Shelves in menu order.
    pub const ALL: [BookShelf; 3] = [BookShelf::History, BookShelf::Spells, BookShelf::Other];

    pub const fn category(&self) -> Category {
        match self {
            BookShelf::History => Category::HistoryBook,
            BookShelf::Spells => Category::SpellBook,
            BookShelf::Other => Category::OtherBook,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            BookShelf::History => "History",
            BookShelf::Spells => "Spells",
            BookShelf::Other => "Other",
        }
    }
}

// =============================================================================
// Shop Details
// =============================================================================

/// Header details printed at the top of every receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Default for ShopInfo {
    fn default() -> Self {
        ShopInfo {
            name: "Dew’s Potion Emporium".to_string(),
            address: "Number 4, Privet Drive, Little Whinging, Surrey".to_string(),
            phone: "(787)-000-0000".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1150).to_string(), "11.5%");
        assert_eq!(TaxRate::from_bps(825).to_string(), "8.25%");
        assert_eq!(TaxRate::from_bps(1000).to_string(), "10%");
        assert_eq!(TaxRate::zero().to_string(), "0%");
    }

    #[test]
    fn test_tax_rate_default_is_ivu() {
        assert_eq!(TaxRate::default().bps(), 1150);
    }

    #[test]
    fn test_tip_option_parsing() {
        assert_eq!("1".parse::<TipOption>().unwrap(), TipOption::NoTip);
        assert_eq!("no".parse::<TipOption>().unwrap(), TipOption::NoTip);
        assert_eq!("2".parse::<TipOption>().unwrap(), TipOption::Ten);
        assert_eq!(" 15% ".parse::<TipOption>().unwrap(), TipOption::Fifteen);
        assert_eq!("20".parse::<TipOption>().unwrap(), TipOption::Twenty);
    }

    #[test]
    fn test_tip_option_rejects_anything_else() {
        for input in ["5", "12", "25%", "", "lots", "-10"] {
            let err = input.parse::<TipOption>().unwrap_err();
            assert!(err.is_recoverable_by_prompt(), "{input} should be re-prompted");
        }
    }

    #[test]
    fn test_tip_option_menu_numbers_round_trip() {
        for option in TipOption::ALL {
            let parsed: TipOption = option.menu_number().to_string().parse().unwrap();
            assert_eq!(parsed, option);
        }
    }

    #[test]
    fn test_only_potions_are_modifiable() {
        assert!(Category::Potion.is_modifiable());
        assert!(!Category::SpellBook.is_modifiable());
        assert!(!Category::Runestone.is_modifiable());
    }
}
