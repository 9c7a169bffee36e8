//! Append-only failure log shared by the roots of one build pass.
//!
//! Roots may be planned on different threads; each appends its failures as
//! it finishes. Completion order is arbitrary, so the log is only read back
//! through [`FailureLog::into_sorted`], which orders by root identity and
//! then by position to make diagnostics reproducible.

use parking_lot::Mutex;

use crate::{Diagnostic, ErrorGuaranteed, Failure};

#[derive(Debug, Default)]
pub struct FailureLog {
    failures: Mutex<Vec<Failure>>,
}

impl FailureLog {
    pub fn new() -> Self {
        FailureLog::default()
    }

    /// Append one failure. Safe to call from many threads.
    pub fn append(&self, failure: Failure) {
        self.failures.lock().push(failure);
    }

    /// Append every failure of one root under a single lock.
    pub fn extend(&self, failures: impl IntoIterator<Item = Failure>) {
        self.failures.lock().extend(failures);
    }

    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Proof that something failed, if it did.
    pub fn error_guaranteed(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.len())
    }

    /// Consume the log, returning failures in stable order.
    ///
    /// Exact duplicates (the same declaration reached through two branches)
    /// are reported once.
    pub fn into_sorted(self) -> Vec<Failure> {
        let mut failures = self.failures.into_inner();
        failures.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        failures.dedup();
        failures
    }

    /// Consume the log, rendering each failure in stable order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.into_sorted()
            .iter()
            .map(Failure::to_diagnostic)
            .collect()
    }
}
