//! # Buy Commands
//!
//! Potions, books and runestones all follow the same three steps:
//!
//! ```text
//! numbered listing ──► pick one ──► "How many would you like?" ──► ledger
//!                         │                  │
//!                  InvalidSelection    InvalidQuantity
//!                  (re-asked, then      (back to the main menu,
//!                   back to the menu)    order unchanged)
//! ```
//!
//! Buying an item already in the order replaces its quantity.

use std::io::{BufRead, Write};
use tracing::info;

use emporium_core::validation::{parse_menu_number, parse_quantity};
use emporium_core::{BookShelf, Category, Money};

use crate::error::AppResult;
use crate::menu::Session;

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn buy_potion(&mut self) -> AppResult<()> {
        let choice = self.choose_item("> Which potion would you like to buy?", Category::Potion)?;
        match choice {
            Some(name) => self.order_item(&name),
            None => Ok(()),
        }
    }

    pub(crate) fn browse_books(&mut self) -> AppResult<()> {
        self.console
            .say("> Interested in my books? Which category would you like to browse?")?;
        for (i, shelf) in BookShelf::ALL.iter().enumerate() {
            self.console.say(format!("  ({}.) {}", i + 1, shelf.label()))?;
        }
        let n = self
            .console
            .select(|s| parse_menu_number(s, BookShelf::ALL.len()))?;
        let shelf = BookShelf::ALL[n - 1];

        let heading = match shelf {
            BookShelf::History => "> Which history book would you like to order?",
            BookShelf::Spells => "> Which spell book would you like to order?",
            BookShelf::Other => {
                "> These books are believed to be from another world, having somehow found their way here. Which book would you like to order?"
            }
        };

        match self.choose_item(heading, shelf.category())? {
            Some(name) => self.order_item(&name),
            None => Ok(()),
        }
    }

    pub(crate) fn browse_runestones(&mut self) -> AppResult<()> {
        let choice =
            self.choose_item("> Which runestone would you like to buy?", Category::Runestone)?;
        match choice {
            Some(name) => self.order_item(&name),
            None => Ok(()),
        }
    }

    /// Lists one category and returns the chosen item's name.
    ///
    /// Unavailable items are shown in braces after the numbered ones and
    /// cannot be picked. `None` when nothing in the category can be ordered.
    fn choose_item(&mut self, heading: &str, category: Category) -> AppResult<Option<String>> {
        let mut choices: Vec<(String, Money)> = Vec::new();
        let mut unavailable: Vec<String> = Vec::new();
        for entry in self.catalog.in_category(category) {
            if entry.available {
                choices.push((entry.name.clone(), entry.price));
            } else {
                unavailable.push(entry.name.clone());
            }
        }

        self.console.say(heading)?;
        for (i, (name, price)) in choices.iter().enumerate() {
            self.console.say(format!("  ({}.) {} - {}", i + 1, name, price))?;
        }
        for name in &unavailable {
            self.console.say(format!("  {{Not Available: {}}}", name))?;
        }

        if choices.is_empty() {
            self.console.say("> Nothing here can be ordered today.")?;
            return Ok(None);
        }

        let n = self.console.select(|s| parse_menu_number(s, choices.len()))?;
        Ok(Some(choices.swap_remove(n - 1).0))
    }

    fn order_item(&mut self, name: &str) -> AppResult<()> {
        let answer = self.console.ask_with("> How many would you like?")?;
        let quantity = parse_quantity(&answer)?;

        self.ledger.add_from_catalog(&self.catalog, name, quantity)?;
        info!(item = %name, quantity, "Item added to order");

        self.console
            .say(format!("> {} x{} is now in your order.", name, quantity))?;
        Ok(())
    }
}
