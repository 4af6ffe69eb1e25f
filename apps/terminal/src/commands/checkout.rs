//! # Checkout
//!
//! The Pay action: the only place an order number is consumed.
//!
//! ## Checkout Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. compute_subtotal(ledger)        empty ledger ──► EmptyOrder         │
//! │  2. tip prompt                      exhausted ─────► back to menu       │
//! │  3. PricingResult::compute          tip, then IVU on the post-tip sum   │
//! │  4. counter.next()                  failure ───────► Order #: ----      │
//! │  5. Receipt::build                                                      │
//! │  6. renderer.render()               failure ───────► warning only       │
//! │  7. "Your total is $T"                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Steps 1 and 2 can still send the customer back to the menu, so the
//! counter is not touched until both have succeeded.

use std::io::{BufRead, Write};
use tracing::{info, warn};

use emporium_core::pricing::compute_subtotal;
use emporium_core::{CoreError, OrderNumber, PricingResult, Receipt, TipOption};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::menu::Session;
use crate::render::RenderOutcome;

/// Everything a completed checkout produced.
#[derive(Debug)]
pub struct CheckoutSummary {
    pub pricing: PricingResult,
    pub order_number: OrderNumber,
    pub receipt: Receipt,
    /// `None` when the receipt artifact could not be written.
    pub render: Option<RenderOutcome>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn pay(&mut self) -> AppResult<CheckoutSummary> {
        if self.ledger.is_empty() {
            return Err(CoreError::EmptyOrder.into());
        }

        self.console.say("")?;
        self.console.say("Your final order:")?;
        let lines: Vec<String> = self
            .ledger
            .items()
            .map(|(name, qty)| format!("{} x{}", name, qty))
            .collect();
        for line in lines {
            self.console.say(line)?;
        }

        self.console.say("Your receipt:")?;
        let subtotal = compute_subtotal(&self.ledger, &self.catalog)?;
        self.console.say(format!("Your subtotal is {}", subtotal))?;

        let tip = self.ask_tip()?;
        let pricing = PricingResult::compute(subtotal, tip, self.tax_rate);

        let order_number = self.issue_order_number();
        self.console
            .say(format!("This was your order #{}.", order_number))?;

        let receipt = Receipt::build(
            &self.shop,
            self.today(),
            order_number,
            &self.ledger,
            &pricing,
        );
        self.console.say("")?;
        for line in receipt.lines() {
            self.console.say(line)?;
        }
        self.console.say("")?;

        let render = match self.renderer.render(&receipt) {
            Ok(outcome) => {
                for warning in &outcome.warnings {
                    self.console.say(format!("> {}", warning))?;
                }
                self.console
                    .say(format!("Receipt saved as {}", outcome.path.display()))?;
                Some(outcome)
            }
            Err(err) => {
                // user_message() logs the underlying error
                let err = AppError::from(err);
                self.console.say(format!("> {}", err.user_message()))?;
                None
            }
        };

        self.console.say(format!("Your total is {}", pricing.total))?;
        self.console
            .say(format!("Thank you for shopping at {}!", self.shop.name))?;

        info!(
            order_number = %order_number,
            subtotal = %pricing.subtotal,
            tip = ?pricing.tip,
            total = %pricing.total,
            "Checkout completed"
        );

        Ok(CheckoutSummary {
            pricing,
            order_number,
            receipt,
            render,
        })
    }

    fn ask_tip(&mut self) -> AppResult<TipOption> {
        self.console
            .say("> Would you like to leave a tip? Choose an option below:")?;
        for option in TipOption::ALL {
            self.console
                .say(format!(" ({}.) {}", option.menu_number(), option.label()))?;
        }
        self.console.select(|s| s.parse::<TipOption>())
    }

    /// Next order number, or the placeholder when the counter fails.
    fn issue_order_number(&mut self) -> OrderNumber {
        match self.counter.next() {
            Ok(n) => OrderNumber::Issued(n),
            Err(err) => {
                warn!(code = ?ErrorCode::CounterUnavailable, error = %err, "Order counter unavailable");
                OrderNumber::Unassigned
            }
        }
    }
}
