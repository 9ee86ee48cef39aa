#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the class-doc-guard binary.
#[macro_export]
macro_rules! class_doc_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("class-doc-guard"))
    };
}

pub const DOCUMENTED_CLASS: &str = "package com.example;\n\
    \n\
    import java.util.List;\n\
    \n\
    /**\n \
     * Documented.\n \
     */\n\
    public class Documented {\n\
    }\n";

pub const UNDOCUMENTED_CLASS: &str = "package com.example;\n\
    \n\
    import java.util.List;\n\
    \n\
    public class Undocumented {\n\
    }\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The path as the binary will print it.
    pub fn display(&self, relative_path: &str) -> String {
        self.dir.path().join(relative_path).display().to_string()
    }
}
