use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{ClassDocGuardError, Result};

pub const JAVA_EXTENSION: &str = "java";

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

pub struct GlobFilter {
    /// Lower-cased, with the leading dot.
    suffix: String,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter with the given extension and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extension: &str, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| ClassDocGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| ClassDocGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffix: format!(".{}", extension.trim_start_matches('.').to_lowercase()),
            exclude_patterns,
        })
    }

    /// Compared on the whole file name, so `Foo.JAVA` and `.java` both match.
    fn has_valid_extension(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
