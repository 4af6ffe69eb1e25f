//! # Order Counter
//!
//! Issues order numbers: one persisted integer, incremented once per
//! completed checkout.
//!
//! ## Read-Increment-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  open OrderCount.txt (create if missing)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  try_lock_exclusive ── held elsewhere? ──► StoreError::Locked          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read "6" ── absent / empty / garbage? ──► treat as 0                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  truncate, write "7", fsync, unlock                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  return 7                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lock serializes sessions on the same machine. A crash between the
//! read and the write loses at most that one increment.

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Source of order numbers.
pub trait CounterStore {
    /// Increments the persisted value and returns the new one.
    fn next(&mut self) -> StoreResult<u64>;

    /// The last issued value (0 if none), without incrementing.
    fn peek(&self) -> StoreResult<u64>;
}

// =============================================================================
// File Counter
// =============================================================================

/// Counter persisted as a decimal number in a text file.
#[derive(Debug, Clone)]
pub struct FileCounterStore {
    path: PathBuf,
}

impl FileCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileCounterStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> StoreResult<File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))
    }

    fn read_value(&self, file: &mut File) -> StoreResult<u64> {
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| StoreError::io(&self.path, e))?;
        Ok(parse_count(&self.path, &contents))
    }

    fn write_value(&self, file: &mut File, value: u64) -> StoreResult<()> {
        file.set_len(0).map_err(|e| StoreError::io(&self.path, e))?;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| StoreError::io(&self.path, e))?;
        write!(file, "{}", value).map_err(|e| StoreError::io(&self.path, e))?;
        file.sync_all().map_err(|e| StoreError::io(&self.path, e))
    }
}

impl CounterStore for FileCounterStore {
    fn next(&mut self) -> StoreResult<u64> {
        let mut file = self.open()?;
        file.try_lock_exclusive().map_err(|_| StoreError::Locked {
            path: self.path.clone(),
        })?;

        let result = (|| -> StoreResult<u64> {
            let current = self.read_value(&mut file)?;
            let next = current
                .checked_add(1)
                .ok_or(StoreError::Overflow { value: current })?;
            self.write_value(&mut file, next)?;
            Ok(next)
        })();

        if let Err(e) = FileExt::unlock(&file) {
            warn!(path = ?self.path, error = %e, "Failed to release counter lock");
        }

        if let Ok(n) = result {
            info!(path = ?self.path, order_number = n, "Order number issued");
        }
        result
    }

    fn peek(&self) -> StoreResult<u64> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(parse_count(&self.path, &contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }
}

/// Parses the counter file body; anything unreadable counts as 0.
fn parse_count(path: &Path, contents: &str) -> u64 {
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        debug!(?path, "Counter file empty, starting at 0");
        return 0;
    }
    trimmed.parse().unwrap_or_else(|_| {
        warn!(?path, contents = %trimmed, "Counter file corrupt, starting at 0");
        0
    })
}

// =============================================================================
// Memory Counter
// =============================================================================

/// Counter held in memory; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryCounterStore {
    value: u64,
}

impl MemoryCounterStore {
    /// Starts from a previously issued value.
    pub fn starting_at(value: u64) -> Self {
        MemoryCounterStore { value }
    }
}

impl CounterStore for MemoryCounterStore {
    fn next(&mut self) -> StoreResult<u64> {
        self.value = self
            .value
            .checked_add(1)
            .ok_or(StoreError::Overflow { value: self.value })?;
        Ok(self.value)
    }

    fn peek(&self) -> StoreResult<u64> {
        Ok(self.value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
