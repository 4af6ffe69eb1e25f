//! Shared fixtures for session tests.

use chrono::NaiveDate;
use std::cell::RefCell;
use std::io::{self, Cursor};
use std::path::PathBuf;
use std::rc::Rc;

use emporium_core::{Catalog, Receipt};
use emporium_store::{CounterStore, MemoryCounterStore, StoreError, StoreResult};

use crate::commands::CheckoutSummary;
use crate::console::Console;
use crate::menu::{Session, SessionOutcome};
use crate::render::{ReceiptRenderer, RenderError, RenderOutcome};

pub type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

/// Receipts handed to a [`RecordingRenderer`].
pub type Rendered = Rc<RefCell<Vec<Receipt>>>;

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

pub fn scripted_console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 3)
}

/// Standard catalog, counter at 6 (next order is #7), recording renderer.
pub fn scripted_session(input: &str) -> (ScriptedSession, Rendered) {
    session_with(input, Box::new(MemoryCounterStore::starting_at(6)))
}

pub fn session_with(input: &str, counter: Box<dyn CounterStore>) -> (ScriptedSession, Rendered) {
    let rendered = Rendered::default();
    let session = Session::new(
        scripted_console(input),
        Catalog::standard(),
        counter,
        Box::new(RecordingRenderer(rendered.clone())),
    )
    .with_date(test_date());
    (session, rendered)
}

pub fn output(session: &ScriptedSession) -> String {
    String::from_utf8(session.console().output().clone()).unwrap()
}

pub fn completed(outcome: SessionOutcome) -> CheckoutSummary {
    match outcome {
        SessionOutcome::Completed(summary) => summary,
        SessionOutcome::Abandoned => panic!("session was abandoned"),
    }
}

pub struct RecordingRenderer(pub Rendered);

impl ReceiptRenderer for RecordingRenderer {
    fn render(&self, receipt: &Receipt) -> Result<RenderOutcome, RenderError> {
        self.0.borrow_mut().push(receipt.clone());
        Ok(RenderOutcome {
            path: PathBuf::from("receipt.txt"),
            warnings: Vec::new(),
        })
    }
}

pub struct FailingRenderer;

impl ReceiptRenderer for FailingRenderer {
    fn render(&self, _receipt: &Receipt) -> Result<RenderOutcome, RenderError> {
        Err(RenderError::Write {
            path: PathBuf::from("/read-only/receipt.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

pub struct FailingCounter;

impl CounterStore for FailingCounter {
    fn next(&mut self) -> StoreResult<u64> {
        Err(StoreError::Locked {
            path: PathBuf::from("OrderCount.txt"),
        })
    }

    fn peek(&self) -> StoreResult<u64> {
        Ok(0)
    }
}
