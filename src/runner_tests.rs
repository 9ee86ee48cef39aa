use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("class-doc-guard").chain(args.iter().copied())).unwrap()
}

fn run_captured(cli: &Cli) -> (Result<i32>, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = run_impl(cli, &mut stdout, &mut stderr);
    (
        result,
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(stderr).unwrap(),
    )
}

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("A.java"), "package a;\n\npublic class A {\n}\n").unwrap();
    fs::write(
        src.join("B.java"),
        "package b;\n\n/** B. */\npublic class B {\n}\n",
    )
    .unwrap();
    fs::write(src.join("notes.txt"), "class NotJava {}\n").unwrap();
    temp_dir
}

#[test]
fn run_reports_diagnostics_and_summary() {
    let temp_dir = project();
    let root = temp_dir.path().to_str().unwrap();

    let (result, stdout, stderr) = run_captured(&cli(&[root, "-q"]));

    assert_eq!(result.unwrap(), EXIT_SUCCESS);
    assert!(stdout.ends_with("\nComplete. Fail: 1/2 (50%)\n"));
    let a_path = temp_dir.path().join("src").join("A.java");
    assert_eq!(
        stderr,
        format!("1) No comment found: {}: 3\n", a_path.display())
    );
}

#[test]
fn run_prints_banner_unless_quiet() {
    let temp_dir = project();
    let root = temp_dir.path().to_str().unwrap();

    let (_, stdout, _) = run_captured(&cli(&[root]));
    assert!(stdout.starts_with(&format!("* Beginning scan of {root}\n")));

    let (_, stdout, _) = run_captured(&cli(&[root, "--quiet"]));
    assert!(!stdout.contains("Beginning scan"));
}

#[test]
fn run_strict_fails_on_violations() {
    let temp_dir = project();
    let root = temp_dir.path().to_str().unwrap();

    let (result, _, _) = run_captured(&cli(&[root, "-q", "--strict"]));

    assert_eq!(result.unwrap(), EXIT_VIOLATIONS_FOUND);
}

#[test]
fn run_strict_passes_when_clean() {
    let temp_dir = project();
    let root = temp_dir.path().to_str().unwrap();

    let (result, stdout, stderr) = run_captured(&cli(&[root, "-q", "--strict", "-x", "**/A.java"]));

    assert_eq!(result.unwrap(), EXIT_SUCCESS);
    assert!(stdout.contains("Complete. Fail: 0/1 (0%)"));
    assert!(stderr.is_empty());
}

#[test]
fn run_empty_directory_reports_zero_percent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap();

    let (result, stdout, _) = run_captured(&cli(&[root, "-q"]));

    assert_eq!(result.unwrap(), EXIT_SUCCESS);
    assert!(stdout.contains("Complete. Fail: 0/0 (0%)"));
}

#[test]
fn run_missing_root_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let (result, _, _) = run_captured(&cli(&[missing.to_str().unwrap(), "-q"]));

    assert_eq!(result.unwrap_err().error_type(), "PathNotFound");
}

#[test]
fn run_invalid_exclude_is_error() {
    let temp_dir = project();
    let root = temp_dir.path().to_str().unwrap();

    let (result, _, _) = run_captured(&cli(&[root, "-x", "[invalid"]));

    assert_eq!(result.unwrap_err().error_type(), "InvalidPattern");
}

#[test]
fn run_json_format() {
    let temp_dir = project();
    let root = temp_dir.path().to_str().unwrap();

    let (result, stdout, stderr) = run_captured(&cli(&[root, "--format", "json"]));

    assert_eq!(result.unwrap(), EXIT_SUCCESS);
    assert!(stderr.is_empty());
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["summary"]["files_processed"], 2);
    assert_eq!(json["summary"]["files_with_error"], 1);
    assert_eq!(json["summary"]["fail_percent"], 50);
}

#[test]
fn check_files_keeps_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let files: Vec<_> = (0..20)
        .map(|i| {
            let path = temp_dir.path().join(format!("F{i}.java"));
            fs::write(&path, "class F {}\n").unwrap();
            path
        })
        .collect();

    let outcomes = check_files(&files, true);

    let paths: Vec<_> = outcomes
        .iter()
        .map(|outcome| match outcome {
            FileOutcome::Processed(result) => result.path.clone(),
            FileOutcome::Skipped(err) => panic!("unexpected skip: {err}"),
        })
        .collect();
    assert_eq!(paths, files);
}
