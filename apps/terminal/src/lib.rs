//! # Emporium Terminal Library
//!
//! The interactive ordering app for Dew's Potion Emporium.
//!
//! ## Module Organization
//! ```text
//! emporium_terminal_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── config.rs   ◄─── CLI flags, config file, environment
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── buy.rs      ◄─── Potions, books, runestones
//! │   ├── modify.rs   ◄─── Ingredient edits
//! │   └── checkout.rs ◄─── Pay
//! ├── menu.rs         ◄─── Session and main-menu loop
//! ├── console.rs      ◄─── Prompts with bounded retries
//! ├── banner.rs       ◄─── ASCII banner and welcome text
//! ├── render.rs       ◄─── Receipt artifact
//! └── error.rs        ◄─── App error type
//! ```

pub mod banner;
pub mod commands;
pub mod console;
pub mod error;
pub mod menu;
pub mod render;
pub mod state;

#[cfg(test)]
mod test_support;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use emporium_core::Catalog;
use emporium_store::FileCounterStore;

use error::{AppError, AppResult};
use menu::{Session, SessionOutcome};
use render::TextReceiptRenderer;
use state::{AppConfig, CliArgs};

/// Runs the app against the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse CLI flags ─────────────────────────────────────────────────► │
/// │                                                                         │
/// │  2. Initialize Logging ──────────────────────────────────────────────► │
/// │     • tracing-subscriber to stderr, RUST_LOG overrides the default      │
/// │                                                                         │
/// │  3. Load Config ─────────────────────────────────────────────────────► │
/// │     • defaults → emporium.toml → EMPORIUM_* → flags                     │
/// │                                                                         │
/// │  4. Load Catalog ────────────────────────────────────────────────────► │
/// │     • built-in inventory, or the configured JSON file                   │
/// │                                                                         │
/// │  5. Banner, then one Session until Pay or end of input ──────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    let args = CliArgs::parse();
    init_tracing();

    let config = AppConfig::load(&args)?;
    info!(data_dir = ?config.paths.data_dir, "Starting Dew's Potion Emporium");

    let catalog = load_catalog(&config)?;

    let mut console = console::stdio(config.max_attempts);
    banner::show(
        &mut console,
        config.paths.banner_path().as_deref(),
        &config.shop.name,
    )?;

    let counter = FileCounterStore::new(config.paths.counter_path());
    let renderer = TextReceiptRenderer::new(
        config.paths.receipt_path(),
        config.paths.purchase_stamp_path(),
        config.paths.tip_stamp_path(),
    );

    let mut session = Session::new(console, catalog, Box::new(counter), Box::new(renderer))
        .with_shop(config.shop.clone())
        .with_tax_rate(config.tax_rate());

    match session.run()? {
        SessionOutcome::Completed(summary) => {
            info!(order_number = %summary.order_number, total = %summary.pricing.total, "Order placed");
        }
        SessionOutcome::Abandoned => info!("No order placed"),
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menus.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every prompt answer and menu choice
/// - `RUST_LOG=emporium_store=trace` - Trace the counter store only
/// - Default: WARN, INFO for the emporium crates
pub fn init_tracing() {
    // `emporium` prefixes every crate target in the workspace
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,emporium=info"));

    // a subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// The configured catalog file, or the built-in inventory.
pub fn load_catalog(config: &AppConfig) -> AppResult<Catalog> {
    match config.paths.catalog_path() {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|e| {
                AppError::config(format!("cannot read catalog {}: {}", path.display(), e))
            })?;
            let catalog = Catalog::from_json_str(&json)?;
            info!(?path, items = catalog.len(), "Catalog loaded");
            Ok(catalog)
        }
        None => Ok(Catalog::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_builtin_catalog_by_default() {
        let mut config = AppConfig::default();
        config.paths.catalog_file = None;
        assert_eq!(load_catalog(&config).unwrap(), Catalog::standard());
    }

    #[test]
    fn test_catalog_file_replaces_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{ "name": "Dragon Egg", "price_cents": 50000, "category": "runestone" }]"#,
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.paths.catalog_file = Some(path);
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.price_of("dragon egg").unwrap().cents(), 50000);
    }

    #[test]
    fn test_bad_catalog_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json").unwrap();

        let mut config = AppConfig::default();
        config.paths.catalog_file = Some(path);
        assert!(matches!(load_catalog(&config), Err(AppError::Core(_))));

        config.paths.catalog_file = Some(PathBuf::from("/no/such/catalog.json"));
        assert!(matches!(load_catalog(&config), Err(AppError::Config(_))));
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing();
        init_tracing();
    }
}
