use std::fmt::Write;

use crate::aggregate::{RunReport, RunTotals};
use crate::error::Result;

use super::{FormattedOutput, OutputFormatter};

/// Console report: one numbered line per diagnostic on stderr, summary on stdout.
pub struct TextFormatter;

impl TextFormatter {
    #[must_use]
    pub fn summary_line(totals: &RunTotals) -> String {
        format!(
            "Complete. Fail: {}/{} ({}%)",
            totals.files_with_error,
            totals.files_processed,
            totals.fail_percent()
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<FormattedOutput> {
        let mut stderr = String::new();

        for err in report.skipped() {
            let _ = writeln!(stderr, "Error: {}", err.detail());
        }

        // Numbering runs across the whole report, not per file.
        for (index, diagnostic) in report.diagnostics().enumerate() {
            let _ = writeln!(
                stderr,
                "{}) {}: {}: {}",
                index + 1,
                diagnostic.message,
                diagnostic.path.display(),
                diagnostic.line
            );
        }

        let stdout = format!("\n{}\n", Self::summary_line(&report.totals));

        Ok(FormattedOutput { stdout, stderr })
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
