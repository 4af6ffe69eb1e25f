//! # Order Ledger
//!
//! The customer's order for the current session: item name → quantity.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                                    │
//! │                                                                         │
//! │  Menu Action              Ledger Call             State Change          │
//! │  ───────────              ───────────             ────────────          │
//! │                                                                         │
//! │  Buy (new item) ─────────► upsert() ────────────► entries.push(item)   │
//! │                                                                         │
//! │  Buy (same item again) ──► upsert() ────────────► entries[i].qty = n   │
//! │                                                  (replaced, NOT added) │
//! │                                                                         │
//! │  Modify potion ──────────► set_composition() ───► entries[i].comp = c  │
//! │                                                                         │
//! │  Pay ────────────────────► items() ─────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by name (ignoring case)
//! - Every quantity is in `1..=MAX_ITEM_QUANTITY`
//! - Iteration order is first-insertion order; re-setting a quantity keeps
//!   the item's position

use serde::{Deserialize, Serialize};

use crate::catalog::{same_name, Catalog};
use crate::composition::Composition;
use crate::error::{CoreError, CoreResult};
use crate::validation::validate_quantity;
use crate::MAX_LEDGER_ITEMS;

/// One line of the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub name: String,
    pub quantity: u32,
    /// Ingredient edits, potions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<Composition>,
}

/// The in-session order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLedger {
    entries: Vec<LedgerEntry>,
}

impl OrderLedger {
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity of an item, inserting it if absent.
    ///
    /// ## Behavior
    /// - Item not in the ledger: appended at the end
    /// - Item already in the ledger: its quantity is **replaced**
    ///
    /// ## Example
    /// ```rust
    /// use emporium_core::OrderLedger;
    ///
    /// let mut ledger = OrderLedger::new();
    /// ledger.upsert("Healing Potion", 2).unwrap();
    /// ledger.upsert("Healing Potion", 5).unwrap();
    /// assert_eq!(ledger.quantity_of("Healing Potion"), Some(5));
    /// assert_eq!(ledger.len(), 1);
    /// ```
    pub fn upsert(&mut self, name: &str, quantity: u32) -> CoreResult<()> {
        let quantity = validate_quantity(quantity as i64)?;

        if let Some(entry) = self.entry_mut(name) {
            entry.quantity = quantity;
            return Ok(());
        }

        if self.entries.len() >= MAX_LEDGER_ITEMS {
            return Err(CoreError::LedgerFull {
                max: MAX_LEDGER_ITEMS,
            });
        }

        self.entries.push(LedgerEntry {
            name: name.trim().to_string(),
            quantity,
            composition: None,
        });
        Ok(())
    }

    /// Resolves `name` in the catalog and upserts it under its catalog name.
    ///
    /// ## Errors
    /// - `UnknownItem` if the catalog has no such item
    /// - `Unavailable` if the item is listed but not for sale
    /// - `InvalidQuantity` / `LedgerFull` from [`OrderLedger::upsert`]
    pub fn add_from_catalog(&mut self, catalog: &Catalog, name: &str, quantity: u32) -> CoreResult<()> {
        let entry = catalog.entry(name)?;
        if !entry.available {
            return Err(CoreError::Unavailable(entry.name.clone()));
        }
        self.upsert(&entry.name, quantity)
    }

    /// Deletes an item (and its composition). No-op if absent.
    pub fn remove(&mut self, name: &str) {
        self.entries.retain(|e| !same_name(&e.name, name));
    }

    /// `(name, quantity)` pairs in first-insertion order.
    ///
    /// Each call starts a fresh iteration.
    pub fn items(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|e| (e.name.as_str(), e.quantity))
    }

    /// Full entries in first-insertion order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.entry(name).map(|e| e.quantity)
    }

    pub fn composition_of(&self, name: &str) -> Option<&Composition> {
        self.entry(name).and_then(|e| e.composition.as_ref())
    }

    /// Stores ingredient edits for an item already in the ledger.
    ///
    /// An empty composition clears any previous edits.
    pub fn set_composition(&mut self, name: &str, composition: Composition) -> CoreResult<()> {
        let entry = self
            .entry_mut(name)
            .ok_or_else(|| CoreError::UnknownItem(name.trim().to_string()))?;
        entry.composition = if composition.is_empty() {
            None
        } else {
            Some(composition)
        };
        Ok(())
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.entries.iter().map(|e| e.quantity as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, name: &str) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| same_name(&e.name, name))
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut LedgerEntry> {
        self.entries.iter_mut().find(|e| same_name(&e.name, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_inserts() {
        let mut ledger = OrderLedger::new();
        ledger.upsert("Healing Potion", 2).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.quantity_of("healing potion"), Some(2));
        assert!(!ledger.is_empty());
    }

    #[test]
    fn test_upsert_same_item_replaces_quantity() {
        let mut ledger = OrderLedger::new();
        ledger.upsert("Healing Potion", 2).unwrap();
        ledger.upsert("Healing Potion", 3).unwrap();

        assert_eq!(ledger.len(), 1); // Still one entry
        assert_eq!(ledger.quantity_of("Healing Potion"), Some(3)); // Not 5
    }

    #[test]
    fn test_upsert_rejects_zero() {
        let mut ledger = OrderLedger::new();
        let err = ledger.upsert("Healing Potion", 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity { .. }));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_upsert_rejects_over_maximum() {
        let mut ledger = OrderLedger::new();
        ledger.upsert("Healing Potion", 2).unwrap();
        assert!(ledger.upsert("Healing Potion", 1000).is_err());
        assert_eq!(ledger.quantity_of("Healing Potion"), Some(2));
    }

    #[test]
    fn test_items_keep_first_insertion_order() {
        let mut ledger = OrderLedger::new();
        ledger.upsert("1984", 1).unwrap();
        ledger.upsert("Healing Potion", 2).unwrap();
        ledger.upsert("Fehu Runestone", 1).unwrap();
        ledger.upsert("1984", 4).unwrap();

        let items: Vec<(&str, u32)> = ledger.items().collect();
        assert_eq!(
            items,
            [("1984", 4), ("Healing Potion", 2), ("Fehu Runestone", 1)]
        );

        // restartable
        assert_eq!(ledger.items().count(), 3);
        assert_eq!(ledger.total_quantity(), 7);
    }

    #[test]
    fn test_remove() {
        let mut ledger = OrderLedger::new();
        ledger.upsert("1984", 1).unwrap();
        ledger.remove("1984");
        assert!(ledger.is_empty());

        // absent item is a no-op
        ledger.remove("1984");
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_ledger_capacity() {
        let mut ledger = OrderLedger::new();
        for i in 0..MAX_LEDGER_ITEMS {
            ledger.upsert(&format!("item-{i}"), 1).unwrap();
        }
        assert_eq!(
            ledger.upsert("one too many", 1),
            Err(CoreError::LedgerFull {
                max: MAX_LEDGER_ITEMS
            })
        );
        // existing items can still be updated
        ledger.upsert("item-0", 9).unwrap();
    }

    #[test]
    fn test_add_from_catalog_uses_catalog_name() {
        let catalog = Catalog::standard();
        let mut ledger = OrderLedger::new();
        ledger.add_from_catalog(&catalog, "healing potion", 2).unwrap();

        let items: Vec<(&str, u32)> = ledger.items().collect();
        assert_eq!(items, [("Healing Potion", 2)]);
    }

    #[test]
    fn test_add_from_catalog_rejects_unknown_and_unavailable() {
        let catalog = Catalog::standard();
        let mut ledger = OrderLedger::new();

        assert!(matches!(
            ledger.add_from_catalog(&catalog, "Philosopher's Stone", 1),
            Err(CoreError::UnknownItem(_))
        ));
        assert!(matches!(
            ledger.add_from_catalog(&catalog, "The History of the Void Century", 1),
            Err(CoreError::Unavailable(_))
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_composition_survives_upsert_and_clears_on_empty() {
        let base = vec!["Healing Herb".to_string(), "Troll Sweat".to_string()];
        let mut comp = Composition::new();
        comp.remove("Healing Potion", &base, "Troll Sweat").unwrap();

        let mut ledger = OrderLedger::new();
        ledger.upsert("Healing Potion", 1).unwrap();
        ledger.set_composition("Healing Potion", comp.clone()).unwrap();
        ledger.upsert("Healing Potion", 3).unwrap();
        assert_eq!(ledger.composition_of("Healing Potion"), Some(&comp));

        ledger.set_composition("Healing Potion", Composition::new()).unwrap();
        assert_eq!(ledger.composition_of("Healing Potion"), None);
    }

    #[test]
    fn test_set_composition_requires_item() {
        let mut ledger = OrderLedger::new();
        assert!(matches!(
            ledger.set_composition("Healing Potion", Composition::new()),
            Err(CoreError::UnknownItem(_))
        ));
    }
}
