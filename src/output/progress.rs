use std::io::IsTerminal;
use std::path::Path;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}";

/// Per-file progress while checking, drawn on stderr.
///
/// Cloning shares the same bar, so rayon workers can each hold a copy.
#[derive(Clone)]
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    /// Stays hidden in quiet mode and when stderr is not a terminal, so
    /// piped diagnostics are never interleaved with bar redraws.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let visible = !quiet && std::io::stderr().is_terminal();
        Self::with_visibility(total, visible)
    }

    fn with_visibility(total: u64, visible: bool) -> Self {
        if !visible {
            return Self {
                bar: ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden()),
            };
        }

        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        // Falls back to the default style if the template were ever rejected.
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style.progress_chars("█▓░"));
        }
        Self { bar }
    }

    /// Mark `path` as checked.
    pub fn file_done(&self, path: &Path) {
        if let Some(name) = path.file_name() {
            self.bar.set_message(name.to_string_lossy().into_owned());
        }
        self.bar.inc(1);
    }

    /// Clears the bar so the report starts on a clean line.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
