use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "class-doc-guard")]
#[command(
    author,
    version,
    about = "Report Java classes and interfaces that lack a class-level comment"
)]
#[command(long_about = "Walks a source tree and reports every Java class or interface \
    declaration that is not directly preceded by a comment.\n\n\
    Exit codes:\n  \
    0 - Scan completed\n  \
    1 - Undocumented declarations found (with --strict)\n  \
    2 - Usage or runtime error")]
pub struct Cli {
    /// Directory (or single file) to scan
    pub path: PathBuf,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Skip files ignored by .gitignore
    #[arg(long)]
    pub gitignore: bool,

    /// Do not follow symbolic links while walking the tree
    #[arg(long)]
    pub no_follow_links: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with code 1 when any declaration lacks a comment
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner, progress bar and warnings
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
