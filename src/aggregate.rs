use serde::Serialize;

use crate::check::{Diagnostic, FileOutcome, FileResult};
use crate::error::ClassDocGuardError;

/// Counters accumulated over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    pub files_processed: u64,
    pub files_with_error: u64,
    pub total_diagnostics: u64,
}

impl RunTotals {
    /// A file counts once towards `files_with_error` however many
    /// diagnostics it produced.
    pub fn record(&mut self, result: &FileResult) {
        self.files_processed += 1;
        if result.had_error() {
            self.files_with_error += 1;
        }
        self.total_diagnostics += result.diagnostics.len() as u64;
    }

    /// Share of processed files with at least one violation, truncated.
    /// Zero when nothing was processed.
    #[must_use]
    pub const fn fail_percent(&self) -> u64 {
        if self.files_processed == 0 {
            0
        } else {
            self.files_with_error * 100 / self.files_processed
        }
    }
}

/// Everything a formatter needs, in scan order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
    pub totals: RunTotals,
}

impl RunReport {
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<FileOutcome>) -> Self {
        let mut totals = RunTotals::default();
        for outcome in &outcomes {
            if let FileOutcome::Processed(result) = outcome {
                totals.record(result);
            }
        }
        Self { outcomes, totals }
    }

    pub fn processed(&self) -> impl Iterator<Item = &FileResult> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Processed(result) => Some(result),
            FileOutcome::Skipped(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ClassDocGuardError> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Skipped(err) => Some(err),
            FileOutcome::Processed(_) => None,
        })
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.processed().flat_map(|result| result.diagnostics.iter())
    }

    #[must_use]
    pub const fn has_violations(&self) -> bool {
        self.totals.total_diagnostics > 0
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
