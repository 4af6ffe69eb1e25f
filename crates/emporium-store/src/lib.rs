//! # emporium-store: Persistence Layer
//!
//! Everything the shop keeps between sessions.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         emporium-store                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    CounterStore (trait)                         │   │
//! │  │                    next() -> u64                                │   │
//! │  └──────────────┬──────────────────────────────┬──────────────────┘   │
//! │                 │                              │                       │
//! │  ┌──────────────▼──────────────┐  ┌────────────▼─────────────────┐    │
//! │  │  FileCounterStore           │  │  MemoryCounterStore          │    │
//! │  │  Extra/OrderCount.txt       │  │  (tests, dry runs)           │    │
//! │  │  locked read-increment-write│  │                              │    │
//! │  └─────────────────────────────┘  └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use emporium_store::{CounterStore, FileCounterStore};
//!
//! let mut counter = FileCounterStore::new("Extra/OrderCount.txt");
//! let order_number = counter.next().unwrap();
//! ```

pub mod counter;
pub mod error;

pub use counter::{CounterStore, FileCounterStore, MemoryCounterStore};
pub use error::{StoreError, StoreResult};

/// File name of the order counter inside the data directory.
pub const COUNTER_FILE: &str = "OrderCount.txt";
