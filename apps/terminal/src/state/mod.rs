//! # State Module
//!
//! Startup configuration for the terminal app.
//!
//! The in-session order lives in [`crate::menu::Session`]; this module only
//! holds what is read once at startup and never changes afterwards.

mod config;

pub use config::{parse_percent_bps, AppConfig, CliArgs, PathsConfig, FALLBACK_DATA_DIR};
