//! Integration tests driving the lcw binary end to end.
//!
//! Each test gets its own fixture directory under the system temp dir and
//! runs the compiled binary against a word list written there.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Create an isolated fixture directory for one test.
fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("lcw_test_fixtures")
        .join(format!("{}_{}", name, std::process::id()));

    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create fixture dir");
    dir
}

/// Run lcw with the given args inside `dir`.
fn run_lcw(args: &[&str], dir: &Path) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_lcw"))
        .args(args)
        .args(["--color", "never", "--quiet"])
        .current_dir(dir)
        .output()
        .expect("Failed to run lcw");

    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
        output.status.success(),
    )
}

#[test]
fn test_finds_the_longest_compound_word() {
    let dir = fixture_dir("basic");
    fs::write(dir.join("words.txt"), "cat\ndog\ncatdog\nbird\n").unwrap();

    let (stdout, stderr, ok) = run_lcw(&["words.txt"], &dir);
    assert!(ok, "lcw failed: {}", stderr);
    assert_eq!(
        stdout,
        "The longest compound string in words.txt is \"catdog\"\n"
    );
}

#[test]
fn test_defaults_to_word_list_in_cwd() {
    let dir = fixture_dir("default_name");
    fs::write(dir.join("word.list"), "sun\nflower\nsunflower\n").unwrap();

    let (stdout, stderr, ok) = run_lcw(&[], &dir);
    assert!(ok, "lcw failed: {}", stderr);
    assert_eq!(
        stdout,
        "The longest compound string in word.list is \"sunflower\"\n"
    );
}

#[test]
fn test_reports_empty_quotes_when_nothing_qualifies() {
    let dir = fixture_dir("no_compound");
    fs::write(dir.join("words.txt"), "cat\ndog\nbird\n").unwrap();

    let (stdout, _, ok) = run_lcw(&["words.txt"], &dir);
    assert!(ok);
    assert_eq!(stdout, "The longest compound string in words.txt is \"\"\n");
}

#[test]
fn test_empty_list_is_not_an_error() {
    let dir = fixture_dir("empty");
    fs::write(dir.join("words.txt"), "").unwrap();

    let (stdout, _, ok) = run_lcw(&["words.txt"], &dir);
    assert!(ok);
    assert!(stdout.contains("is \"\""));
}

#[test]
fn test_first_of_equal_length_wins() {
    let dir = fixture_dir("tie_break");
    fs::write(dir.join("words.txt"), "ab\ncd\nef\nabcd\nefgh\nefcd\n").unwrap();

    let (stdout, _, ok) = run_lcw(&["words.txt"], &dir);
    assert!(ok);
    assert!(stdout.contains("is \"abcd\""), "stdout: {}", stdout);
}

#[test]
fn test_trailing_spaces_are_stripped() {
    let dir = fixture_dir("trailing_spaces");
    fs::write(dir.join("words.txt"), "cat  \ndog\ncatdog   \n").unwrap();

    let (stdout, _, ok) = run_lcw(&["words.txt"], &dir);
    assert!(ok);
    assert!(stdout.contains("is \"catdog\""), "stdout: {}", stdout);
}

#[test]
fn test_missing_list_fails_with_nonzero_exit() {
    let dir = fixture_dir("missing");

    let (stdout, stderr, ok) = run_lcw(&["nonexistent.list"], &dir);
    assert!(!ok, "expected failure, got stdout: {}", stdout);
    assert!(
        stderr.contains("nonexistent.list"),
        "stderr should name the list: {}",
        stderr
    );
}

#[test]
fn test_json_output() {
    let dir = fixture_dir("json");
    fs::write(dir.join("words.txt"), "rain\nbow\nrainbow\n").unwrap();

    let (stdout, stderr, ok) = run_lcw(&["--json", "words.txt"], &dir);
    assert!(ok, "lcw failed: {}", stderr);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["longest"], "rainbow");
    assert_eq!(value["length"], 7);
    assert_eq!(value["list"], "words.txt");
    assert_eq!(value["stats"]["words_total"], 3);
    assert_eq!(value["stats"]["words_unique"], 3);
}

#[test]
fn test_stats_block() {
    let dir = fixture_dir("stats");
    fs::write(dir.join("words.txt"), "book\nshelf\nbookshelf\n").unwrap();

    let (stdout, _, ok) = run_lcw(&["--stats", "words.txt"], &dir);
    assert!(ok);
    assert!(stdout.contains("is \"bookshelf\""));
    assert!(stdout.contains("Scan Statistics"));
    assert!(stdout.contains("Words scanned:     3"));
}

#[test]
fn test_runs_are_deterministic() {
    let dir = fixture_dir("deterministic");
    fs::write(dir.join("words.txt"), "wild\ncard\nwildcard\nab\ncd\nabcd\n").unwrap();

    let first = run_lcw(&["words.txt"], &dir);
    let second = run_lcw(&["words.txt"], &dir);
    assert_eq!(first, second);
}
