use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classifier::{self, Classification, ScanState};
use crate::error::{ClassDocGuardError, Result};

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

pub const MISSING_COMMENT_MESSAGE: &str = "No comment found";

/// A declaration without a class-level comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub line: usize,
    pub message: &'static str,
}

impl Diagnostic {
    #[must_use]
    pub fn missing_comment(path: &Path, line: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            line,
            message: MISSING_COMMENT_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    pub lines: usize,
    pub end_state: ScanState,
}

impl FileResult {
    #[must_use]
    pub fn from_classification(path: &Path, classification: Classification) -> Self {
        let diagnostics = classification
            .violations
            .iter()
            .map(|&line| Diagnostic::missing_comment(path, line))
            .collect();

        Self {
            path: path.to_path_buf(),
            diagnostics,
            lines: classification.lines,
            end_state: classification.end_state,
        }
    }

    #[must_use]
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// What happened to a candidate file.
#[derive(Debug)]
pub enum FileOutcome {
    Processed(FileResult),
    /// The file could not be read; it is left out of the totals.
    Skipped(ClassDocGuardError),
}

impl From<Result<FileResult>> for FileOutcome {
    fn from(result: Result<FileResult>) -> Self {
        result.map_or_else(Self::Skipped, Self::Processed)
    }
}

/// Read and classify a single file.
///
/// # Errors
/// Returns `FileRead` if the file cannot be opened or read.
pub fn check_file(path: &Path) -> Result<FileResult> {
    let to_read_error = |source: std::io::Error| ClassDocGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(to_read_error)?;

    let classification = if metadata.len() >= LARGE_FILE_THRESHOLD {
        let file = File::open(path).map_err(to_read_error)?;
        classifier::classify_reader(BufReader::new(file)).map_err(to_read_error)?
    } else {
        let bytes = fs::read(path).map_err(to_read_error)?;
        classifier::classify(&String::from_utf8_lossy(&bytes))
    };

    if classification.end_state == ScanState::MultiLineComment {
        tracing::debug!("{}: block comment not closed at end of file", path.display());
    }

    Ok(FileResult::from_classification(path, classification))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
