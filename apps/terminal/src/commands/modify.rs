//! # Modify Command
//!
//! Edits the recipe of a potion already in the order.
//!
//! ```text
//! pick ledger item ──► ingredients_of ── book / runestone? ──► NotModifiable
//!        │
//!        ▼
//! ┌─► (1.) Remove  (2.) Add  (3.) Exit
//! │      │
//! │      ▼
//! │   "The ingredients are ..." ──► ingredient name ──► Composition edit
//! │      │                                                   │
//! └──────┴──────────── error printed, loop continues ◄───────┘
//!
//! Exit ──► composition stored on the ledger entry, changes summarized
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::info;

use emporium_core::validation::parse_menu_number;
use emporium_core::CoreError;

use crate::error::{AppError, AppResult};
use crate::menu::Session;

/// Choices inside the ingredient editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditChoice {
    Remove,
    Add,
    Exit,
}

impl FromStr for EditChoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remove" => return Ok(EditChoice::Remove),
            "add" => return Ok(EditChoice::Add),
            "exit" => return Ok(EditChoice::Exit),
            _ => {}
        }
        match parse_menu_number(s, 3)? {
            1 => Ok(EditChoice::Remove),
            2 => Ok(EditChoice::Add),
            _ => Ok(EditChoice::Exit),
        }
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn modify_order(&mut self) -> AppResult<()> {
        if self.ledger.is_empty() {
            self.console
                .say("> Your order is empty. Buy a potion first, then come back to modify it.")?;
            return Ok(());
        }

        let names: Vec<String> = self.ledger.items().map(|(n, _)| n.to_string()).collect();
        self.console
            .say("> Which item in your order would you like to modify?")?;
        for (i, name) in names.iter().enumerate() {
            self.console.say(format!("  ({}.) {}", i + 1, name))?;
        }
        let n = self.console.select(|s| parse_menu_number(s, names.len()))?;
        let name = names[n - 1].clone();

        let base = self.catalog.ingredients_of(&name)?.to_vec();
        let mut composition = self.ledger.composition_of(&name).cloned().unwrap_or_default();

        loop {
            self.console.say("> Would you like to remove or add an ingredient?")?;
            self.console.say(" (1.) Remove")?;
            self.console.say(" (2.) Add")?;
            self.console.say(" (3.) Exit")?;

            let choice = match self.console.select(|s| s.parse::<EditChoice>()) {
                Ok(choice) => choice,
                Err(AppError::Core(err)) if err.is_recoverable_by_prompt() => {
                    self.console.say("> That is not one of the options.")?;
                    continue;
                }
                Err(err) => return Err(err),
            };
            if choice == EditChoice::Exit {
                break;
            }

            self.console.say(format!(
                "> The ingredients are {}",
                composition.current(&base).join(", ")
            ))?;
            let ingredient = self
                .console
                .ask_with("Which ingredient would you like to modify?")?;

            let (result, verb) = match choice {
                EditChoice::Remove => (composition.remove(&name, &base, &ingredient), "Removed"),
                _ => (composition.add(&name, &base, &ingredient), "Added"),
            };
            match result {
                Ok(()) => self.console.say(format!("> {} {}.", verb, ingredient.trim()))?,
                Err(err) => self.console.say(format!("> {}", err))?,
            }
        }

        let changes = composition.summary();
        self.ledger.set_composition(&name, composition)?;
        info!(item = %name, changes = changes.len(), "Potion modified");

        if changes.is_empty() {
            self.console.say(format!("> No changes made to {}.", name))?;
        } else {
            self.console.say(format!("> Changes to {}:", name))?;
            for change in changes {
                self.console.say(format!("  {}", change))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::SessionOutcome;
    use crate::test_support::*;

    #[test]
    fn test_edit_choice_parsing() {
        assert_eq!("1".parse::<EditChoice>().unwrap(), EditChoice::Remove);
        assert_eq!("Add".parse::<EditChoice>().unwrap(), EditChoice::Add);
        assert_eq!(" 3 ".parse::<EditChoice>().unwrap(), EditChoice::Exit);
        assert!("4".parse::<EditChoice>().is_err());
    }

    #[test]
    fn test_remove_and_add_ingredients() {
        // buy 2 Healing Potions, modify: remove Troll Sweat, add Mint Leaf, exit, pay
        let (mut session, _) = scripted_session(
            "1\n1\n2\n2\n1\n1\ntroll sweat\n2\nMint Leaf\n3\n5\n1\n",
        );
        let summary = completed(session.run().unwrap());

        let lines = summary.receipt.lines();
        assert_eq!(lines[8], "Healing potion x2");
        assert_eq!(lines[9], "  - Troll Sweat");
        assert_eq!(lines[10], "  + Mint Leaf");

        let out = output(&session);
        assert!(out.contains("> The ingredients are Healing Herb, Troll Sweat, Unicorn Hair"));
        assert!(out.contains("> The ingredients are Healing Herb, Unicorn Hair"));
        assert!(out.contains("> Changes to Healing Potion:\n  - Troll Sweat\n  + Mint Leaf\n"));

        // recipe edits do not change the price
        assert_eq!(summary.pricing.subtotal.to_string(), "$10.00");
    }

    #[test]
    fn test_unknown_ingredient_is_reported_and_loop_continues() {
        let (mut session, _) = scripted_session("1\n1\n1\n2\n1\n1\nDragon Scale\n3\n");
        assert!(matches!(session.run().unwrap(), SessionOutcome::Abandoned));

        let out = output(&session);
        assert!(out.contains("> Healing Potion does not contain Dragon Scale"));
        assert!(out.contains("> No changes made to Healing Potion."));
        assert_eq!(session.ledger().composition_of("Healing Potion"), None);
    }

    #[test]
    fn test_book_is_not_modifiable() {
        // buy 1984, try to modify it
        let (mut session, _) = scripted_session("3\n3\n1\n1\n2\n1\n");
        assert!(matches!(session.run().unwrap(), SessionOutcome::Abandoned));

        assert!(output(&session).contains("> 1984 cannot be modified"));
        assert_eq!(session.ledger().quantity_of("1984"), Some(1));
    }

    #[test]
    fn test_modify_with_empty_order() {
        let (mut session, _) = scripted_session("2\n");
        session.run().unwrap();
        assert!(output(&session).contains("> Your order is empty. Buy a potion first"));
    }

    #[test]
    fn test_edits_accumulate_across_visits() {
        // remove Troll Sweat, exit; modify again, add it back, exit
        let (mut session, _) =
            scripted_session("1\n1\n1\n2\n1\n1\nTroll Sweat\n3\n2\n1\n2\nTroll Sweat\n3\n");
        session.run().unwrap();
        assert_eq!(session.ledger().composition_of("Healing Potion"), None);
        assert!(output(&session).contains("> No changes made to Healing Potion."));
    }
}
