use std::io::BufRead;

use super::NormalizedLine;
use super::lines::{LineReader, SourceLines};

/// Where the classifier stands relative to a comment block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanState {
    /// Not in a comment and not directly after one.
    #[default]
    Outside,
    /// The last significant line was a comment (or `@Deprecated`).
    CommentLast,
    /// Inside an unterminated `/* ... */` block.
    MultiLineComment,
}

/// Outcome of classifying one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// 1-based line numbers of undocumented declarations, ascending.
    pub violations: Vec<usize>,
    /// Number of lines read.
    pub lines: usize,
    /// State when the line stream ended.
    pub end_state: ScanState,
}

/// Line-by-line state machine that flags type declarations lacking a
/// preceding comment.
///
/// One classifier covers one file; [`classify`] and [`classify_reader`]
/// start a fresh one each time.
#[derive(Debug, Clone, Default)]
pub struct LineClassifier {
    state: ScanState,
    lines_read: usize,
}

impl LineClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ScanState::Outside,
            lines_read: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ScanState {
        self.state
    }

    #[must_use]
    pub const fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Feed the next line. Returns its 1-based number if it is an
    /// undocumented declaration.
    pub fn classify_line(&mut self, raw: &str) -> Option<usize> {
        self.lines_read += 1;
        let line = NormalizedLine::new(raw);

        // The declaration check and the comment-block exit both look at the
        // state as it was when the line started.
        let violation = self.state == ScanState::Outside && line.is_declaration();

        if self.state == ScanState::CommentLast && line.ends_comment_block() {
            self.state = ScanState::Outside;
        }

        if matches!(self.state, ScanState::Outside | ScanState::CommentLast) {
            if line.is_block_comment_start() {
                self.state = ScanState::MultiLineComment;
            } else if line.is_line_comment() || line.is_deprecated_annotation() {
                self.state = ScanState::CommentLast;
            }
        }

        if self.state == ScanState::MultiLineComment && line.is_block_comment_end() {
            self.state = ScanState::CommentLast;
        }

        violation.then_some(self.lines_read)
    }

    fn finish(self, violations: Vec<usize>) -> Classification {
        Classification {
            violations,
            lines: self.lines_read(),
            end_state: self.state(),
        }
    }
}

/// Classify an in-memory source file.
#[must_use]
pub fn classify(source: &str) -> Classification {
    let mut classifier = LineClassifier::new();
    let violations = SourceLines::new(source)
        .filter_map(|line| classifier.classify_line(line))
        .collect();
    classifier.finish(violations)
}

/// Classify lines from a buffered reader (streaming, memory-efficient for large files).
///
/// Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
/// Returns an I/O error if reading from the reader fails.
pub fn classify_reader<R: BufRead>(reader: R) -> std::io::Result<Classification> {
    let mut classifier = LineClassifier::new();
    let mut violations = Vec::new();
    let mut lines = LineReader::new(reader);
    let mut buf = Vec::new();

    while lines.read_line(&mut buf)? {
        let line = String::from_utf8_lossy(&buf);
        if let Some(line_number) = classifier.classify_line(&line) {
            violations.push(line_number);
        }
    }

    Ok(classifier.finish(violations))
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
