//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

const DICTIONARY: &str = ";;; test dictionary
SILVER  S IH1 L V ER0
SEA  S IY1
NIGHT  N AY1 T
BRIGHT  B R AY1 T
THE  DH AH0
ALL  AO1 L
THROUGH  TH R UW1
";

const POEM: &str = "Silver sea. All through the night. Bright night!";

/// A temp dir holding `dict.txt` and `poem.txt`.
fn fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("dict.txt"), DICTIONARY).unwrap();
    fs::write(tmp.path().join("poem.txt"), POEM).unwrap();
    tmp
}

fn path_arg(tmp: &TempDir, name: &str) -> String {
    tmp.path().join(name).to_str().unwrap().to_string()
}

fn json_stdout(args: &[&str]) -> Value {
    let output = cmd().args(args).output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let json = json_stdout(&["info", "--json"]);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["engine"]["syllable_strategy"].is_string());
}

#[test]
fn info_reports_dictionary_size() {
    let tmp = fixture();
    let dict = path_arg(&tmp, "dict.txt");
    let json = json_stdout(&["--dictionary", &dict, "info", "--json"]);
    assert_eq!(json["engine"]["dictionary_entries"], 7);
    assert_eq!(json["engine"]["phonetic_confidence"], "full");
}

#[test]
fn info_language_flag_switches_engine() {
    let json = json_stdout(&["--language", "german", "info", "--json"]);
    assert_eq!(json["engine"]["language"], "german");
    assert_eq!(json["engine"]["syllable_strategy"], "orthographic");
    assert_eq!(json["engine"]["phonetic_confidence"], "degraded");
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn unknown_language_rejected() {
    cmd()
        .args(["--language", "klingon", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_dictionary_fails() {
    cmd()
        .args(["--dictionary", "/nonexistent/cmudict.dict", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pronouncing dictionary"));
}

// =============================================================================
// Syllables Command
// =============================================================================

#[test]
fn syllables_german_orthographic() {
    let json = json_stdout(&["--language", "german", "syllables", "Silbe", "BYU", "1920er", "--json"]);
    assert_eq!(json["strategy"], "orthographic");
    assert_eq!(json["words"][0]["syllables"], 2);
    assert_eq!(json["words"][1]["syllables"], 5);
    assert_eq!(json["words"][2]["syllables"], 5);
    assert_eq!(json["total"], 12);
}

#[test]
fn syllables_strategy_flag_overrides_language_default() {
    let json = json_stdout(&["syllables", "Pietät", "--strategy", "orthographic", "--json"]);
    assert_eq!(json["words"][0]["syllables"], 3);
}

#[test]
fn syllables_uses_dictionary_then_vowel_letters() {
    let tmp = fixture();
    let dict = path_arg(&tmp, "dict.txt");
    let json = json_stdout(&["-d", &dict, "syllables", "silver", "queue", "--json"]);
    assert_eq!(json["strategy"], "phonemic");
    assert_eq!(json["words"][0]["syllables"], 2);
    // Not in the dictionary: vowel letters u, e, u, e.
    assert_eq!(json["words"][1]["syllables"], 4);
}

#[test]
fn syllables_requires_a_word() {
    cmd().arg("syllables").assert().failure();
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_profiles_every_clause() {
    let tmp = fixture();
    let json = json_stdout(&[
        "-d",
        &path_arg(&tmp, "dict.txt"),
        "analyze",
        &path_arg(&tmp, "poem.txt"),
        "--json",
    ]);
    assert_eq!(json["sentences"], 3);
    assert_eq!(json["total_clauses"], 3);
    assert_eq!(json["clauses"][0]["text"], "Silver sea.");
    assert_eq!(json["clauses"][0]["syllables"], 3);
    assert_eq!(json["clauses"][0]["alliterative"], true);
    assert_eq!(json["clauses"][0]["rhyme"], "SIY1");
    assert_eq!(json["rhyme_groups"][0]["key"], "NAY1T");
    assert_eq!(json["rhyme_groups"][0]["clauses"], serde_json::json!([1, 2]));
}

#[test]
fn analyze_rhyming_filter() {
    let tmp = fixture();
    let json = json_stdout(&[
        "-d",
        &path_arg(&tmp, "dict.txt"),
        "analyze",
        &path_arg(&tmp, "poem.txt"),
        "--rhyming",
        "--json",
    ]);
    let indices: Vec<u64> = json["clauses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn analyze_alliterative_and_syllable_filters() {
    let tmp = fixture();
    let dict = path_arg(&tmp, "dict.txt");
    let poem = path_arg(&tmp, "poem.txt");
    let json = json_stdout(&["-d", &dict, "analyze", &poem, "--alliterative", "--json"]);
    assert_eq!(json["clauses"].as_array().unwrap().len(), 1);
    assert_eq!(json["clauses"][0]["index"], 0);

    let json = json_stdout(&["-d", &dict, "analyze", &poem, "--syllables", "99", "--json"]);
    assert!(json["clauses"].as_array().unwrap().is_empty());
}

#[test]
fn analyze_splits_multiclause_sentences() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("poem.txt"), "The sea is calm; the night is bright.").unwrap();
    let json = json_stdout(&["analyze", &path_arg(&tmp, "poem.txt"), "--json"]);
    assert_eq!(json["sentences"], 1);
    assert_eq!(json["clauses"][0]["text"], "The sea is calm");
    assert_eq!(json["clauses"][1]["text"], "the night is bright.");
}

#[test]
fn analyze_text_output() {
    let tmp = fixture();
    cmd()
        .args([
            "--color",
            "never",
            "-d",
            &path_arg(&tmp, "dict.txt"),
            "analyze",
            &path_arg(&tmp, "poem.txt"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 sentences"))
        .stdout(predicate::str::contains("NAY1T"))
        .stdout(predicate::str::contains("Bright night!"));
}

#[test]
fn analyze_empty_file_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("empty.txt"), "  \n").unwrap();
    cmd()
        .args(["analyze", &path_arg(&tmp, "empty.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no analyzable sentences"));
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/poem.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn analyze_respects_input_limit() {
    let tmp = fixture();
    let config = tmp.path().join("limit.toml");
    fs::write(&config, "max_input_bytes = 8\n").unwrap();
    cmd()
        .args([
            "--config",
            config.to_str().unwrap(),
            "analyze",
            &path_arg(&tmp, "poem.txt"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Rhymes & Stems Commands
// =============================================================================

#[test]
fn rhymes_lists_groups() {
    let tmp = fixture();
    cmd()
        .args([
            "--color",
            "never",
            "-d",
            &path_arg(&tmp, "dict.txt"),
            "rhymes",
            &path_arg(&tmp, "poem.txt"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAY1T"))
        .stdout(predicate::str::contains("All through the night."))
        .stdout(predicate::str::contains("Silver sea.").not());
}

#[test]
fn rhymes_without_dictionary_finds_none() {
    let tmp = fixture();
    cmd()
        .args(["--color", "never", "rhymes", &path_arg(&tmp, "poem.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("no rhyming clauses"));
}

#[test]
fn stems_per_sentence() {
    let json = json_stdout(&["stems", "Sailing ships, darkness! The waves.", "--json"]);
    assert_eq!(json[0]["stems"], serde_json::json!(["sail", "ship", "dark"]));
    assert_eq!(json[1]["sentence"], "The waves.");
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
