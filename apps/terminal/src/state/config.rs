//! # App Configuration
//!
//! Shop details, the tax rate, prompt retries and file locations.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`--config`, or `emporium.toml` in the platform config dir)
//! 3. Environment variables (`EMPORIUM_*`)
//! 4. Command-line flags
//!
//! ## Example `emporium.toml`
//! ```toml
//! tax_rate_bps = 1150
//! max_attempts = 3
//!
//! [shop]
//! name = "Dew’s Potion Emporium"
//!
//! [paths]
//! data_dir = "Extra"
//! receipt_file = "receipt.txt"
//! ```

use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use emporium_core::validation::validate_tax_rate_bps;
use emporium_core::{ShopInfo, TaxRate, IVU_RATE};
use emporium_store::COUNTER_FILE;

use crate::error::{AppError, AppResult};

/// Data directory used when the platform has no home directory.
pub const FALLBACK_DATA_DIR: &str = "Extra";

/// Banner and stamp art shipped with the crate.
pub const BUNDLED_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

// =============================================================================
// Command Line
// =============================================================================

/// Dew's Potion Emporium: order potions, books and runestones.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "emporium", version, about)]
pub struct CliArgs {
    /// Config file (default: emporium.toml in the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the order counter, receipts and art assets
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Where to write the receipt
    #[arg(long, value_name = "PATH")]
    pub receipt: Option<PathBuf>,

    /// JSON catalog replacing the built-in inventory
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Skip the ASCII banner
    #[arg(long)]
    pub no_banner: bool,
}

// =============================================================================
// Config
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Printed at the top of every receipt
    pub shop: ShopInfo,

    /// IVU in basis points, e.g. 1150 = 11.5%
    pub tax_rate_bps: u32,

    /// How many times a prompt is asked before giving up
    pub max_attempts: u32,

    pub paths: PathsConfig,
}

/// File locations. Relative paths resolve against `data_dir`.
///
/// The banner and stamps fall back to `assets_dir` when `data_dir` has no
/// copy of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    pub assets_dir: Option<PathBuf>,
    pub counter_file: PathBuf,
    pub receipt_file: PathBuf,
    pub banner_file: Option<PathBuf>,
    pub purchase_stamp: PathBuf,
    pub tip_stamp: PathBuf,
    pub catalog_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            shop: ShopInfo::default(),
            tax_rate_bps: IVU_RATE.bps(),
            max_attempts: 3,
            paths: PathsConfig::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            data_dir: default_data_dir(),
            assets_dir: Some(PathBuf::from(BUNDLED_ASSETS_DIR)),
            counter_file: PathBuf::from(COUNTER_FILE),
            receipt_file: PathBuf::from("receipt.txt"),
            banner_file: Some(PathBuf::from("DewsASCII.txt")),
            purchase_stamp: PathBuf::from("PurchaseStamp.txt"),
            tip_stamp: PathBuf::from("TipStamp.txt"),
            catalog_file: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment and CLI flags.
    pub fn load(args: &CliArgs) -> AppResult<Self> {
        let mut config = match args.config.clone().or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                if args.config.is_some() {
                    return Err(AppError::config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.apply_cli_overrides(args);
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file; missing keys take their defaults.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&contents)
            .map_err(|e| AppError::config(format!("{}: {}", path.display(), e)))
    }

    /// Applies `EMPORIUM_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("EMPORIUM_SHOP_NAME") {
            debug!(shop_name = %name, "Overriding shop name from environment");
            self.shop.name = name;
        }

        if let Some(rate) = lookup("EMPORIUM_TAX_RATE") {
            match parse_percent_bps(&rate) {
                Some(bps) => {
                    debug!(tax_rate_bps = bps, "Overriding tax rate from environment");
                    self.tax_rate_bps = bps;
                }
                None => warn!(value = %rate, "Ignoring unparseable EMPORIUM_TAX_RATE"),
            }
        }

        if let Some(dir) = lookup("EMPORIUM_DATA_DIR") {
            self.paths.data_dir = PathBuf::from(dir);
        }

        if let Some(attempts) = lookup("EMPORIUM_MAX_ATTEMPTS") {
            match attempts.trim().parse() {
                Ok(n) => self.max_attempts = n,
                Err(_) => warn!(value = %attempts, "Ignoring unparseable EMPORIUM_MAX_ATTEMPTS"),
            }
        }
    }

    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(dir) = &args.data_dir {
            self.paths.data_dir = dir.clone();
        }
        if let Some(receipt) = &args.receipt {
            self.paths.receipt_file = receipt.clone();
        }
        if let Some(catalog) = &args.catalog {
            self.paths.catalog_file = Some(catalog.clone());
        }
        if args.no_banner {
            self.paths.banner_file = None;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        validate_tax_rate_bps(self.tax_rate_bps)
            .map_err(|e| AppError::config(e.to_string()))?;

        if self.max_attempts == 0 {
            return Err(AppError::config("max_attempts must be greater than 0"));
        }

        if self.shop.name.trim().is_empty() {
            return Err(AppError::config("shop name is required"));
        }

        Ok(())
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("emporium.toml"))
    }
}

impl PathsConfig {
    /// Resolves a configured path against the data directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    pub fn counter_path(&self) -> PathBuf {
        self.resolve(&self.counter_file)
    }

    pub fn receipt_path(&self) -> PathBuf {
        self.resolve(&self.receipt_file)
    }

    /// Resolves an art file: the data directory's copy, else the bundled one.
    ///
    /// When neither exists the data directory path is returned, so the
    /// missing-asset warning names the place the file was expected.
    pub fn resolve_asset(&self, path: &Path) -> PathBuf {
        let in_data_dir = self.resolve(path);
        if in_data_dir.exists() || path.is_absolute() {
            return in_data_dir;
        }
        match &self.assets_dir {
            Some(dir) if dir.join(path).exists() => dir.join(path),
            _ => in_data_dir,
        }
    }

    pub fn banner_path(&self) -> Option<PathBuf> {
        self.banner_file.as_deref().map(|p| self.resolve_asset(p))
    }

    pub fn purchase_stamp_path(&self) -> PathBuf {
        self.resolve_asset(&self.purchase_stamp)
    }

    pub fn tip_stamp_path(&self) -> PathBuf {
        self.resolve_asset(&self.tip_stamp)
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_file.as_deref().map(|p| self.resolve(p))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "dew", "emporium")
}

fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

/// Parses a percentage such as `11.5` or `8.25%` into basis points.
///
/// At most two decimal places; no floating point involved.
pub fn parse_percent_bps(input: &str) -> Option<u32> {
    let trimmed = input.trim().trim_end_matches('%').trim();
    let (whole, frac) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: u32 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac: u32 = format!("{:0<2}", frac).parse().ok()?;

    whole.checked_mul(100)?.checked_add(frac)
}
