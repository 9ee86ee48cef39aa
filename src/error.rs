use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassDocGuardError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ClassDocGuardError {
    /// Short machine-readable name of the error variant.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::PathNotFound(_) => "PathNotFound",
            Self::Io(_) => "Io",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// The file or root path the error is about, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileRead { path, .. } | Self::PathNotFound(path) => Some(path.as_path()),
            _ => None,
        }
    }

    /// Error message including the underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::FileRead { source, .. } => format!("{self}: {source}"),
            Self::InvalidPattern { source, .. } => format!("{self}: {source}"),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassDocGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
