//! # Menu State Machine
//!
//! One [`Session`] is one customer visit: the main menu loops until the
//! customer pays or input ends.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │              ┌──────────────► MainMenu ◄──────────────┐                 │
//! │              │                  │                      │                 │
//! │      action done /      1 │ 2 │ 3 │ 4            EmptyOrder /           │
//! │      action error         ▼   ▼   ▼   ▼          tip prompt exhausted   │
//! │              │     Buy  Modify Books Runes             │                 │
//! │              └───────────┴─────┴─────┘                 │                 │
//! │                                 5 ──────────────► Checkout              │
//! │                                                        │                 │
//! │                                              completed ▼                 │
//! │                                               SessionOutcome::Completed │
//! │                                                                         │
//! │  End of input in any state ──────────────────► SessionOutcome::Abandoned│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger lives on the session and is dropped with it; nothing but the
//! order counter and the receipt file outlives a session.

use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use emporium_core::validation::parse_menu_number;
use emporium_core::{Catalog, CoreError, OrderLedger, ShopInfo, TaxRate, IVU_RATE};
use emporium_store::CounterStore;

use crate::commands::CheckoutSummary;
use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::render::ReceiptRenderer;

/// The five main-menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    BuyPotion,
    ModifyOrder,
    BrowseBooks,
    BrowseRunestones,
    Pay,
}

impl MenuAction {
    /// Actions in menu order.
    pub const ALL: [MenuAction; 5] = [
        MenuAction::BuyPotion,
        MenuAction::ModifyOrder,
        MenuAction::BrowseBooks,
        MenuAction::BrowseRunestones,
        MenuAction::Pay,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            MenuAction::BuyPotion => "Buy a Pre-Made Potion",
            MenuAction::ModifyOrder => "Modify existing Potions",
            MenuAction::BrowseBooks => "Browse Book Selection",
            MenuAction::BrowseRunestones => "Browse Runestone Selection",
            MenuAction::Pay => "Pay",
        }
    }
}

impl FromStr for MenuAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = parse_menu_number(s, MenuAction::ALL.len())?;
        Ok(MenuAction::ALL[n - 1])
    }
}

/// How a session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    /// The customer paid.
    Completed(CheckoutSummary),
    /// Input ended before checkout; nothing was persisted.
    Abandoned,
}

/// One customer visit.
pub struct Session<R, W> {
    pub(crate) console: Console<R, W>,
    pub(crate) catalog: Catalog,
    pub(crate) ledger: OrderLedger,
    pub(crate) shop: ShopInfo,
    pub(crate) tax_rate: TaxRate,
    pub(crate) counter: Box<dyn CounterStore>,
    pub(crate) renderer: Box<dyn ReceiptRenderer>,
    date: Option<NaiveDate>,
    id: Uuid,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        console: Console<R, W>,
        catalog: Catalog,
        counter: Box<dyn CounterStore>,
        renderer: Box<dyn ReceiptRenderer>,
    ) -> Self {
        Session {
            console,
            catalog,
            ledger: OrderLedger::new(),
            shop: ShopInfo::default(),
            tax_rate: IVU_RATE,
            counter,
            renderer,
            date: None,
            id: Uuid::new_v4(),
        }
    }

    pub fn with_shop(mut self, shop: ShopInfo) -> Self {
        self.shop = shop;
        self
    }

    pub fn with_tax_rate(mut self, rate: TaxRate) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Fixes the receipt date instead of using today's.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Runs the main menu until checkout completes or input ends.
    pub fn run(&mut self) -> AppResult<SessionOutcome> {
        let span = info_span!("session", session_id = %self.id);
        let _guard = span.enter();
        info!("Session started");

        loop {
            match self.step() {
                Ok(Some(summary)) => {
                    info!(order_number = %summary.order_number, "Session completed");
                    return Ok(SessionOutcome::Completed(summary));
                }
                Ok(None) => {}
                Err(AppError::InputClosed) => {
                    info!(items = self.ledger.len(), "Input closed, session abandoned");
                    return Ok(SessionOutcome::Abandoned);
                }
                Err(err) if err.aborts_action_only() => {
                    warn!(code = ?err.code(), error = %err, "Action aborted");
                    self.console.say(format!("> {}", err.user_message()))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Shows the main menu and performs one action.
    fn step(&mut self) -> AppResult<Option<CheckoutSummary>> {
        self.console.say("")?;
        self.console.say("> Choose an action below by typing its number:")?;
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            self.console.say(format!(" ({}.) {}", i + 1, action.label()))?;
        }

        let action: MenuAction = self.console.select(|s| s.parse())?;
        debug!(?action, "Menu action selected");

        match action {
            MenuAction::BuyPotion => self.buy_potion()?,
            MenuAction::ModifyOrder => self.modify_order()?,
            MenuAction::BrowseBooks => self.browse_books()?,
            MenuAction::BrowseRunestones => self.browse_runestones()?,
            MenuAction::Pay => return self.pay().map(Some),
        }
        Ok(None)
    }
}
