//! # Commands Module
//!
//! One file per main-menu action, each an `impl` block on [`Session`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── buy.rs       ◄─── (1) potions, (3) books, (4) runestones
//! ├── modify.rs    ◄─── (2) ingredient edits
//! └── checkout.rs  ◄─── (5) pay
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session::step()                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  self.buy_potion() -> AppResult<()>                                     │
//! │       │                                                                 │
//! │       ├── Ok ──────────────────────► main menu                          │
//! │       ├── Err(AppError::Core) ─────► message, main menu                 │
//! │       └── Err(AppError::InputClosed) ► session abandoned                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Session`]: crate::menu::Session

mod buy;
mod checkout;
mod modify;

pub use checkout::CheckoutSummary;
pub use modify::EditChoice;
