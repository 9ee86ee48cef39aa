pub mod aggregate;
pub mod check;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;
pub mod scanner;

pub use error::{ClassDocGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
