//! # Composition
//!
//! A customer's edits to a potion recipe, kept relative to the catalog recipe.
//!
//! ## Edit Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base recipe:  [Healing Herb, Troll Sweat, Unicorn Hair]                │
//! │                                                                         │
//! │  remove "troll sweat"   → removed = [Troll Sweat]                       │
//! │  add "Mint Leaf"        → added   = [Mint Leaf]                         │
//! │  remove "mint leaf"     → added   = []          (un-add)                │
//! │  add "Troll Sweat"      → removed = []          (restore)               │
//! │                                                                         │
//! │  remove something absent  → UnknownIngredient                           │
//! │  add something present    → IngredientAlreadyPresent                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::same_name;
use crate::error::{CoreError, CoreResult};

/// Removed and added ingredients for one ledger item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    removed: Vec<String>,
    added: Vec<String>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recipe after applying this composition to `base`.
    pub fn current(&self, base: &[String]) -> Vec<String> {
        base.iter()
            .filter(|b| !self.removed.iter().any(|r| same_name(r, b)))
            .chain(self.added.iter())
            .cloned()
            .collect()
    }

    /// Removes an ingredient currently in the recipe.
    pub fn remove(&mut self, item: &str, base: &[String], ingredient: &str) -> CoreResult<()> {
        let ingredient = ingredient.trim();

        if let Some(pos) = self.added.iter().position(|a| same_name(a, ingredient)) {
            self.added.remove(pos);
            return Ok(());
        }

        let in_base = base.iter().find(|b| same_name(b, ingredient));
        match in_base {
            Some(b) if !self.removed.iter().any(|r| same_name(r, b)) => {
                self.removed.push(b.clone());
                Ok(())
            }
            _ => Err(CoreError::UnknownIngredient {
                item: item.to_string(),
                ingredient: ingredient.to_string(),
            }),
        }
    }

    /// Adds an ingredient not currently in the recipe.
    pub fn add(&mut self, item: &str, base: &[String], ingredient: &str) -> CoreResult<()> {
        let ingredient = ingredient.trim();
        if ingredient.is_empty() {
            return Err(CoreError::UnknownIngredient {
                item: item.to_string(),
                ingredient: String::new(),
            });
        }

        if self.current(base).iter().any(|c| same_name(c, ingredient)) {
            return Err(CoreError::IngredientAlreadyPresent {
                item: item.to_string(),
                ingredient: ingredient.to_string(),
            });
        }

        if let Some(pos) = self.removed.iter().position(|r| same_name(r, ingredient)) {
            self.removed.remove(pos);
        } else {
            self.added.push(ingredient.to_string());
        }
        Ok(())
    }

    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    pub fn added(&self) -> &[String] {
        &self.added
    }

    /// True when the recipe is unchanged.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    /// One `- X` line per removal, then one `+ Y` line per addition.
    pub fn summary(&self) -> Vec<String> {
        self.removed
            .iter()
            .map(|r| format!("- {}", r))
            .chain(self.added.iter().map(|a| format!("+ {}", a)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Vec<String> {
        ["Healing Herb", "Troll Sweat", "Unicorn Hair"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_remove_and_add() {
        let mut comp = Composition::new();
        comp.remove("Healing Potion", &base(), "troll sweat").unwrap();
        comp.add("Healing Potion", &base(), "Mint Leaf").unwrap();

        assert_eq!(comp.removed(), ["Troll Sweat"]);
        assert_eq!(comp.added(), ["Mint Leaf"]);
        assert_eq!(
            comp.current(&base()),
            ["Healing Herb", "Unicorn Hair", "Mint Leaf"]
        );
        assert_eq!(comp.summary(), ["- Troll Sweat", "+ Mint Leaf"]);
    }

    #[test]
    fn test_remove_missing_ingredient() {
        let mut comp = Composition::new();
        let err = comp.remove("Healing Potion", &base(), "Eye of Newt").unwrap_err();
        assert!(matches!(err, CoreError::UnknownIngredient { .. }));
        assert!(comp.is_empty());
    }

    #[test]
    fn test_remove_twice_fails() {
        let mut comp = Composition::new();
        comp.remove("Healing Potion", &base(), "Unicorn Hair").unwrap();
        assert!(comp.remove("Healing Potion", &base(), "unicorn hair").is_err());
    }

    #[test]
    fn test_add_present_ingredient() {
        let mut comp = Composition::new();
        let err = comp.add("Healing Potion", &base(), "HEALING HERB").unwrap_err();
        assert!(matches!(err, CoreError::IngredientAlreadyPresent { .. }));
    }

    #[test]
    fn test_undo_edits_leaves_empty_composition() {
        let mut comp = Composition::new();
        comp.add("Healing Potion", &base(), "Mint Leaf").unwrap();
        comp.remove("Healing Potion", &base(), "mint leaf").unwrap();
        comp.remove("Healing Potion", &base(), "Troll Sweat").unwrap();
        comp.add("Healing Potion", &base(), "troll sweat").unwrap();

        assert!(comp.is_empty());
        assert_eq!(comp.current(&base()), base());
    }
}
