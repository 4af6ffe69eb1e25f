//! # Receipt Renderer
//!
//! Turns a [`Receipt`] into the artifact the customer takes home.
//!
//! ## Artifact Layout
//! ```text
//! ┌────────────────────────────────────────┐
//! │          Dew’s Potion Emporium         │ ◄── each receipt line centered
//! │                                        │     in a 40-column canvas
//! │ Number 4, Privet Drive, Little Whin... │
//! │                  ...                   │
//! │         <<< CUSTOMER COPY >>>          │
//! │                                        │
//! │                       ╔════════════╗   │ ◄── tip stamp (tipped orders)
//! │                       ║  THANK YOU ║   │
//! │                       ╚════════════╝   │
//! │                       ╔════════════╗   │ ◄── purchase stamp (always)
//! │                       ║    PAID    ║   │
//! │                       ╚════════════╝   │
//! └────────────────────────────────────────┘
//! ```
//!
//! Stamps are text-art files, aligned to the right edge. A missing stamp asset
//! is a warning on the [`RenderOutcome`], never a failure.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use emporium_core::Receipt;

/// Width of the rendered canvas, in characters.
pub const CANVAS_WIDTH: usize = 40;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The receipt file could not be written.
    #[error("Failed to write receipt to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stamp asset could not be read.
    #[error("{stamp} stamp asset {path} is unavailable: {source}")]
    MissingAsset {
        stamp: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result of a successful render.
#[derive(Debug)]
pub struct RenderOutcome {
    /// Where the artifact was written.
    pub path: PathBuf,
    /// Stamps that could not be applied.
    pub warnings: Vec<RenderError>,
}

/// Produces a receipt artifact.
pub trait ReceiptRenderer {
    fn render(&self, receipt: &Receipt) -> Result<RenderOutcome, RenderError>;
}

/// Writes the receipt as a centered text file with text-art stamps.
#[derive(Debug, Clone)]
pub struct TextReceiptRenderer {
    output: PathBuf,
    purchase_stamp: PathBuf,
    tip_stamp: PathBuf,
    width: usize,
}

impl TextReceiptRenderer {
    pub fn new(
        output: impl Into<PathBuf>,
        purchase_stamp: impl Into<PathBuf>,
        tip_stamp: impl Into<PathBuf>,
    ) -> Self {
        TextReceiptRenderer {
            output: output.into(),
            purchase_stamp: purchase_stamp.into(),
            tip_stamp: tip_stamp.into(),
            width: CANVAS_WIDTH,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Receipt lines and stamps, as they will appear in the file.
    pub fn compose(&self, receipt: &Receipt) -> (String, Vec<RenderError>) {
        let mut body = String::new();
        for line in receipt.lines() {
            body.push_str(&center(line, self.width));
            body.push('\n');
        }

        let mut stamps = Vec::new();
        if receipt.tip_stamp() {
            stamps.push(("Tip", &self.tip_stamp));
        }
        stamps.push(("Purchase", &self.purchase_stamp));

        let mut warnings = Vec::new();
        for (stamp, path) in stamps {
            match fs::read_to_string(path) {
                Ok(art) => {
                    body.push('\n');
                    body.push_str(&align_right(&art, self.width));
                }
                Err(source) => {
                    warn!(stamp, ?path, error = %source, "Stamp asset unavailable, skipping");
                    warnings.push(RenderError::MissingAsset {
                        stamp,
                        path: path.clone(),
                        source,
                    });
                }
            }
        }

        (body, warnings)
    }
}

impl ReceiptRenderer for TextReceiptRenderer {
    fn render(&self, receipt: &Receipt) -> Result<RenderOutcome, RenderError> {
        let (body, warnings) = self.compose(receipt);

        let write_err = |source| RenderError::Write {
            path: self.output.clone(),
            source,
        };
        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(&self.output, body).map_err(write_err)?;

        info!(path = ?self.output, order_number = %receipt.order_number(), "Receipt saved");
        Ok(RenderOutcome {
            path: self.output.clone(),
            warnings,
        })
    }
}

/// Left-pads a line so it sits in the middle of `width` columns.
fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), line)
}

/// Shifts a block of art so its widest line ends at `width`.
fn align_right(art: &str, width: usize) -> String {
    let lines: Vec<&str> = art.lines().map(str::trim_end).collect();
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let pad = " ".repeat(width.saturating_sub(widest));

    let mut block = String::new();
    for line in lines {
        if !line.is_empty() {
            block.push_str(&pad);
            block.push_str(line);
        }
        block.push('\n');
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use emporium_core::pricing::price_order;
    use emporium_core::{Catalog, OrderLedger, OrderNumber, ShopInfo, TipOption, IVU_RATE};
    use tempfile::tempdir;

    fn receipt(tip: TipOption) -> Receipt {
        let catalog = Catalog::standard();
        let mut ledger = OrderLedger::new();
        ledger.add_from_catalog(&catalog, "Healing Potion", 2).unwrap();
        let pricing = price_order(&ledger, &catalog, tip, IVU_RATE).unwrap();
        Receipt::build(
            &ShopInfo::default(),
            NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
            OrderNumber::Issued(7),
            &ledger,
            &pricing,
        )
    }

    fn renderer_in(dir: &Path) -> TextReceiptRenderer {
        fs::write(dir.join("PurchaseStamp.txt"), "[ PAID ]\n").unwrap();
        fs::write(dir.join("TipStamp.txt"), "[ THANK YOU ]\n").unwrap();
        TextReceiptRenderer::new(
            dir.join("out").join("receipt.txt"),
            dir.join("PurchaseStamp.txt"),
            dir.join("TipStamp.txt"),
        )
    }

    #[test]
    fn test_center() {
        assert_eq!(center("abcd", 10), "   abcd");
        assert_eq!(center("x".repeat(45).as_str(), 40), "x".repeat(45));
    }

    #[test]
    fn test_align_right() {
        assert_eq!(align_right("ab\nabcd\n", 6), "    ab\n    abcd\n");
    }

    #[test]
    fn test_render_without_tip_has_purchase_stamp_only() {
        let dir = tempdir().unwrap();
        let renderer = renderer_in(dir.path());

        let outcome = renderer.render(&receipt(TipOption::NoTip)).unwrap();
        assert!(outcome.warnings.is_empty());

        let text = fs::read_to_string(&outcome.path).unwrap();
        assert!(text.starts_with(&center("Dew’s Potion Emporium", CANVAS_WIDTH)));
        assert!(text.contains("<<< CUSTOMER COPY >>>"));
        assert!(text.contains("[ PAID ]"));
        assert!(!text.contains("[ THANK YOU ]"));
    }

    #[test]
    fn test_render_with_tip_puts_tip_stamp_above_purchase_stamp() {
        let dir = tempdir().unwrap();
        let renderer = renderer_in(dir.path());

        let outcome = renderer.render(&receipt(TipOption::Twenty)).unwrap();
        let text = fs::read_to_string(&outcome.path).unwrap();

        let tip = text.find("[ THANK YOU ]").unwrap();
        let paid = text.find("[ PAID ]").unwrap();
        assert!(tip < paid);
        assert!(text.contains("$13.38"));
    }

    #[test]
    fn test_missing_stamp_asset_is_a_warning() {
        let dir = tempdir().unwrap();
        let renderer = TextReceiptRenderer::new(
            dir.path().join("receipt.txt"),
            dir.path().join("nope.txt"),
            dir.path().join("nope-either.txt"),
        );

        let outcome = renderer.render(&receipt(TipOption::Ten)).unwrap();
        assert_eq!(outcome.warnings.len(), 2);
        assert!(matches!(
            outcome.warnings[0],
            RenderError::MissingAsset { stamp: "Tip", .. }
        ));
        assert!(outcome.path.exists());
    }

    #[test]
    fn test_unwritable_output_is_an_error() {
        let dir = tempdir().unwrap();
        // output path is an existing directory
        let renderer = TextReceiptRenderer::new(dir.path(), "a.txt", "b.txt");
        assert!(matches!(
            renderer.render(&receipt(TipOption::NoTip)),
            Err(RenderError::Write { .. })
        ));
    }
}
