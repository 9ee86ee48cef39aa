use std::io::Write;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::aggregate::RunReport;
use crate::check::{FileOutcome, check_file};
use crate::cli::Cli;
use crate::error::Result;
use crate::output::{OutputFormat, ScanProgress};
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter, JAVA_EXTENSION};
use crate::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

#[must_use]
pub fn run(cli: &Cli) -> i32 {
    match run_impl(cli, &mut std::io::stdout(), &mut std::io::stderr()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e.detail());
            EXIT_RUNTIME_ERROR
        }
    }
}

/// Scan, report to the given streams and pick the exit code.
///
/// # Errors
/// Returns an error if an exclude pattern is invalid, the root path does not
/// exist, or the report cannot be written. Unreadable files are reported and
/// skipped instead.
pub fn run_impl<O: Write, E: Write>(cli: &Cli, stdout: &mut O, stderr: &mut E) -> Result<i32> {
    let filter = GlobFilter::new(JAVA_EXTENSION, &cli.exclude)?;
    let scanner = DirectoryScanner::new(filter)
        .with_gitignore(cli.gitignore)
        .with_follow_links(!cli.no_follow_links);

    if cli.format == OutputFormat::Text && !cli.quiet {
        writeln!(stdout, "* Beginning scan of {}", cli.path.display())?;
    }

    let files = scanner.scan(&cli.path)?;
    let report = RunReport::from_outcomes(check_files(&files, cli.quiet));
    tracing::info!(
        "Checked {} file(s), {} declaration(s) without a comment",
        report.totals.files_processed,
        report.totals.total_diagnostics
    );

    let output = cli.format.formatter().format(&report)?;
    stderr.write_all(output.stderr.as_bytes())?;
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;

    Ok(exit_code(&report, cli.strict))
}

/// Classify files in parallel. The result keeps the order of `files`.
fn check_files(files: &[PathBuf], quiet: bool) -> Vec<FileOutcome> {
    let progress = ScanProgress::new(files.len() as u64, quiet);

    let outcomes = files
        .par_iter()
        .map(|path| {
            let outcome = FileOutcome::from(check_file(path));
            if let FileOutcome::Processed(result) = &outcome {
                tracing::debug!(
                    "{}: {} line(s), {} undocumented declaration(s)",
                    path.display(),
                    result.lines,
                    result.diagnostics.len()
                );
            }
            progress.file_done(path);
            outcome
        })
        .collect();

    progress.finish();
    outcomes
}

const fn exit_code(report: &RunReport, strict: bool) -> i32 {
    if strict && report.has_violations() {
        EXIT_VIOLATIONS_FOUND
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
