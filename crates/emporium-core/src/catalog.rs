//! # Catalog
//!
//! The shop inventory: every item a customer can order, its unit price and,
//! for potions, its recipe.
//!
//! ## Shop Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Catalog                                        │
//! │                                                                         │
//! │  Potions ─────────── price + ingredients (modifiable)                  │
//! │  Books                                                                  │
//! │   ├── History ────── price                                             │
//! │   ├── Spells ─────── price                                             │
//! │   └── Other ──────── price                                             │
//! │  Runestones ──────── price                                             │
//! │                                                                         │
//! │  price_of(name)       → Money            | UnknownItem                 │
//! │  ingredients_of(name) → &[String]        | UnknownItem, NotModifiable  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is built once at startup and never changes during a session.
//! Name lookups ignore case and surrounding whitespace.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Category;
use crate::validation::{validate_item_name, validate_price_cents};

/// Case-insensitive name comparison used by every lookup.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// One orderable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name, unique across the whole catalog.
    pub name: String,

    /// Unit price in cents.
    #[serde(rename = "price_cents")]
    pub price: Money,

    pub category: Category,

    /// Recipe, in display order. Only potions have one.
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Unavailable items are listed but cannot be ordered.
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl CatalogEntry {
    /// Creates an available, ingredient-less entry.
    pub fn new(name: impl Into<String>, price: Money, category: Category) -> Self {
        CatalogEntry {
            name: name.into(),
            price,
            category,
            ingredients: Vec::new(),
            available: true,
        }
    }

    /// Creates a potion with its recipe.
    pub fn potion(name: impl Into<String>, price: Money, ingredients: &[&str]) -> Self {
        CatalogEntry {
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            ..CatalogEntry::new(name, price, Category::Potion)
        }
    }

    /// Marks the entry as not available for ordering.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    fn validate(&self) -> CoreResult<()> {
        validate_item_name(&self.name)?;
        validate_price_cents(self.price.cents())?;

        if self.category.is_modifiable() && self.ingredients.is_empty() {
            return Err(ValidationError::Required {
                field: format!("ingredients of {}", self.name),
            }
            .into());
        }

        if !self.category.is_modifiable() && !self.ingredients.is_empty() {
            return Err(ValidationError::InvalidFormat {
                field: format!("ingredients of {}", self.name),
                reason: "only potions have ingredients".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The full shop inventory, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog from entries, validating each one.
    ///
    /// ## Rules
    /// - Names are non-empty, at most 200 characters and unique (ignoring case)
    /// - Prices are non-negative
    /// - Potions list at least one ingredient, other items none
    pub fn from_entries(entries: Vec<CatalogEntry>) -> CoreResult<Self> {
        for (i, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if entries[..i].iter().any(|e| same_name(&e.name, &entry.name)) {
                return Err(ValidationError::Duplicate {
                    field: "item name".to_string(),
                    value: entry.name.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { entries })
    }

    /// Parses a JSON array of entries.
    ///
    /// ## Format
    /// ```json
    /// [
    ///   { "name": "Healing Potion", "price_cents": 500, "category": "potion",
    ///     "ingredients": ["Healing Herb", "Troll Sweat"] },
    ///   { "name": "1984", "price_cents": 899, "category": "other_book" }
    /// ]
    /// ```
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|e| ValidationError::InvalidFormat {
                field: "catalog".to_string(),
                reason: e.to_string(),
            })?;
        Self::from_entries(entries)
    }

    /// The shop's built-in inventory.
    pub fn standard() -> Self {
        let c = Money::from_cents;
        let entries = vec![
            // Potions
            CatalogEntry::potion(
                "Healing Potion",
                c(500),
                &["Healing Herb", "Troll Sweat", "Unicorn Hair"],
            ),
            CatalogEntry::potion(
                "Potion of Fire Resistance",
                c(750),
                &["Dragon Scale", "Frost Lotus", "Salamander Tail"],
            ),
            CatalogEntry::potion(
                "Invisibility Potion",
                c(1200),
                &["Ghost Orchid", "Moon Dew", "Chameleon Skin"],
            ),
            CatalogEntry::potion(
                "Potion of Strength",
                c(650),
                &["Giant's Toenail", "Ironroot", "Bull Horn Powder"],
            ),
            CatalogEntry::potion(
                "Elixir of Luck",
                c(2000),
                &["Four-Leaf Clover", "Rabbit's Foot", "Liquid Starlight"],
            ),
            // History books
            CatalogEntry::new(
                "A Bird's-Eye View of the Napoleonic Wars",
                c(1500),
                Category::HistoryBook,
            ),
            CatalogEntry::new("Where the Silk Road Sings", c(1299), Category::HistoryBook),
            CatalogEntry::new("The Last Cemí", c(1100), Category::HistoryBook),
            CatalogEntry::new(
                "The History of the Void Century",
                c(9999),
                Category::HistoryBook,
            )
            .unavailable(),
            // Spell books
            CatalogEntry::new("The Standard Book of Spells", c(999), Category::SpellBook),
            CatalogEntry::new(
                "Advanced Hexes and Counter-Hexes",
                c(1450),
                Category::SpellBook,
            ),
            CatalogEntry::new(
                "A Beginner's Guide to Transfiguration",
                c(1150),
                Category::SpellBook,
            ),
            // Books from another world
            CatalogEntry::new("1984", c(899), Category::OtherBook),
            CatalogEntry::new(
                "Pete the Cat: I Love My White Shoes",
                c(599),
                Category::OtherBook,
            ),
            CatalogEntry::new("Don Quixote", c(1399), Category::OtherBook),
            CatalogEntry::new("One Hundred Years of Solitude", c(1250), Category::OtherBook),
            // Runestones
            CatalogEntry::new("Fehu Runestone", c(300), Category::Runestone),
            CatalogEntry::new("Uruz Runestone", c(350), Category::Runestone),
            CatalogEntry::new("Thurisaz Runestone", c(400), Category::Runestone),
            CatalogEntry::new("Ansuz Runestone", c(450), Category::Runestone),
        ];

        Catalog { entries }
    }

    /// Looks up an entry by name.
    pub fn entry(&self, name: &str) -> CoreResult<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| same_name(&e.name, name))
            .ok_or_else(|| CoreError::UnknownItem(name.trim().to_string()))
    }

    /// Unit price of an item.
    ///
    /// ## Example
    /// ```rust
    /// use emporium_core::Catalog;
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.price_of("healing potion").unwrap().cents(), 500);
    /// assert!(catalog.price_of("Philosopher's Stone").is_err());
    /// ```
    pub fn price_of(&self, name: &str) -> CoreResult<Money> {
        self.entry(name).map(|e| e.price)
    }

    /// Recipe of a potion.
    ///
    /// Fails with [`CoreError::NotModifiable`] for books and runestones.
    pub fn ingredients_of(&self, name: &str) -> CoreResult<&[String]> {
        let entry = self.entry(name)?;
        if !entry.category.is_modifiable() {
            return Err(CoreError::NotModifiable(entry.name.clone()));
        }
        Ok(&entry.ingredients)
    }

    /// Entries of one category, in listing order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// All entries, in listing order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let standard = Catalog::standard();
        let rebuilt = Catalog::from_entries(standard.entries().to_vec()).unwrap();
        assert_eq!(rebuilt, standard);
    }

    #[test]
    fn test_price_of() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.price_of("Healing Potion").unwrap(), Money::from_cents(500));
        assert_eq!(catalog.price_of("  DON QUIXOTE ").unwrap(), Money::from_cents(1399));
    }

    #[test]
    fn test_price_of_unknown_item() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.price_of("Philosopher's Stone"),
            Err(CoreError::UnknownItem("Philosopher's Stone".to_string()))
        );
    }

    #[test]
    fn test_ingredients_of_potion() {
        let catalog = Catalog::standard();
        let ingredients = catalog.ingredients_of("Healing Potion").unwrap();
        assert_eq!(ingredients, ["Healing Herb", "Troll Sweat", "Unicorn Hair"]);
    }

    #[test]
    fn test_ingredients_of_book_is_not_modifiable() {
        let catalog = Catalog::standard();
        assert_eq!(
            catalog.ingredients_of("1984"),
            Err(CoreError::NotModifiable("1984".to_string()))
        );
        assert!(matches!(
            catalog.ingredients_of("Fehu Runestone"),
            Err(CoreError::NotModifiable(_))
        ));
        assert!(matches!(
            catalog.ingredients_of("Nope"),
            Err(CoreError::UnknownItem(_))
        ));
    }

    #[test]
    fn test_in_category_keeps_listing_order() {
        let catalog = Catalog::standard();
        let history: Vec<&str> = catalog
            .in_category(Category::HistoryBook)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(
            history,
            [
                "A Bird's-Eye View of the Napoleonic Wars",
                "Where the Silk Road Sings",
                "The Last Cemí",
                "The History of the Void Century",
            ]
        );
        assert!(!catalog.entry("The History of the Void Century").unwrap().available);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let entries = vec![
            CatalogEntry::new("Fehu Runestone", Money::from_cents(300), Category::Runestone),
            CatalogEntry::new("fehu runestone", Money::from_cents(310), Category::Runestone),
        ];
        assert!(matches!(
            Catalog::from_entries(entries),
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_potion_without_ingredients_rejected() {
        let entries = vec![CatalogEntry::new(
            "Plain Water",
            Money::from_cents(100),
            Category::Potion,
        )];
        assert!(Catalog::from_entries(entries).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let entries = vec![CatalogEntry::new("1984", Money::from_cents(-1), Category::OtherBook)];
        assert!(Catalog::from_entries(entries).is_err());
    }

    #[test]
    fn test_json_price_beyond_cap_rejected() {
        let json = format!(
            r#"[{{ "name": "Dragon Egg", "price_cents": {}, "category": "runestone" }}]"#,
            i64::MAX
        );
        assert!(Catalog::from_json_str(&json).is_err());
    }

    #[test]
    fn test_subtotal_at_price_cap_fits() {
        use crate::pricing::compute_subtotal;
        use crate::{OrderLedger, MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

        let json = format!(
            r#"[{{ "name": "Dragon Egg", "price_cents": {}, "category": "runestone" }}]"#,
            MAX_PRICE_CENTS
        );
        let catalog = Catalog::from_json_str(&json).unwrap();
        let mut ledger = OrderLedger::new();
        ledger.add_from_catalog(&catalog, "Dragon Egg", MAX_ITEM_QUANTITY).unwrap();

        let subtotal = compute_subtotal(&ledger, &catalog).unwrap();
        assert_eq!(subtotal.cents(), MAX_PRICE_CENTS * MAX_ITEM_QUANTITY as i64);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            { "name": "Healing Potion", "price_cents": 500, "category": "potion",
              "ingredients": ["Healing Herb"] },
            { "name": "1984", "price_cents": 899, "category": "other_book", "available": false }
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.price_of("1984").unwrap().cents(), 899);
        assert!(!catalog.entry("1984").unwrap().available);
        assert!(catalog.entry("Healing Potion").unwrap().available);
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidFormat { .. })
        ));
    }
}
