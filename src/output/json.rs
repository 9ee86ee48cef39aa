use std::fmt::Write;

use serde::Serialize;

use crate::aggregate::{RunReport, RunTotals};
use crate::check::FileResult;
use crate::classifier::ScanState;
use crate::error::Result;

use super::{FormattedOutput, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<JsonFile>,
    skipped: Vec<SkippedFile>,
}

#[derive(Serialize)]
struct Summary {
    #[serde(flatten)]
    totals: RunTotals,
    fail_percent: u64,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    lines: usize,
    end_state: ScanState,
    diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    line: usize,
    message: &'static str,
}

#[derive(Serialize)]
struct SkippedFile {
    path: Option<String>,
    kind: &'static str,
    error: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<FormattedOutput> {
        let output = JsonOutput {
            summary: Summary {
                totals: report.totals,
                fail_percent: report.totals.fail_percent(),
            },
            files: report.processed().map(convert_result).collect(),
            skipped: report
                .skipped()
                .map(|err| SkippedFile {
                    path: err.path().map(|p| p.display().to_string()),
                    kind: err.error_type(),
                    error: err.detail(),
                })
                .collect(),
        };

        let mut stdout = serde_json::to_string_pretty(&output)?;
        stdout.push('\n');

        // Read failures also go to stderr so they are not lost when stdout is piped.
        let mut stderr = String::new();
        for err in report.skipped() {
            let _ = writeln!(stderr, "Error: {}", err.detail());
        }

        Ok(FormattedOutput { stdout, stderr })
    }
}

fn convert_result(result: &FileResult) -> JsonFile {
    JsonFile {
        path: result.path.display().to_string(),
        lines: result.lines,
        end_state: result.end_state,
        diagnostics: result
            .diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                line: d.line,
                message: d.message,
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
