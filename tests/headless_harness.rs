#![allow(unused)]
//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness exercises `docseek` as a compiled binary via
//! [`std::process::Command`]. It validates headless mode from the outside,
//! the way a script piping its output would observe it.
//!
//! - **Query flags**: `--query`, `--format`, `--prefix`, `--all-on-empty`,
//!   `--max-results`, `--link-prefix`, `--section`.
//! - **Dump**: `--dump` reproduces the input file byte for byte.
//! - **Exit codes**: zero matches = 0; unloadable input or bad flags = non-zero.
//! - **Warnings** for malformed records go to stderr, never stdout.
//!
//! # What this does NOT cover
//!
//! - TUI rendering (that requires a real terminal; see the tui crate tests)
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

mod common;
use common::*;
use std::path::Path;
use std::process::{Command, Output};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn docseek(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docseek"));
    // Keep the user's real config out of the picture.
    cmd.env("XDG_CONFIG_HOME", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf-8 stderr")
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[test]
fn query_prints_text_groups() {
    let dir = search_dir();
    let output = docseek(dir.path())
        .arg(dir.path().join("functions_9.js"))
        .args(["--query", "initialise"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "initialise  ComPWA::GaussAmp\n    ../d0/daa/classComPWA_1_1GaussAmp.html#ac5bcf655\n"
    );
}

#[test]
fn query_json_output() {
    let dir = search_dir();
    let output = docseek(dir.path())
        .arg(dir.path())
        .args(["--section", "functions", "-q", "init", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let labels: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["init", "initAxis", "initialise"]);
    assert_eq!(json[0]["links"].as_array().unwrap().len(), 3);
}

#[test]
fn zero_matches_exit_zero() {
    let dir = search_dir();
    let output = docseek(dir.path())
        .arg(dir.path().join("functions_9.js"))
        .args(["-q", "zzz"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn prefix_and_limit_flags() {
    let dir = search_dir();
    let output = docseek(dir.path())
        .arg(dir.path().join("functions_9.js"))
        .args(["-q", "in", "--prefix", "-n", "2", "-f", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["key"], "incoherentintensity");
}

#[test]
fn all_on_empty_lists_everything() {
    let dir = search_dir();
    let output = docseek(dir.path())
        .arg(dir.path().join("functions_10.js"))
        .args(["-q", "", "--all-on-empty", "-f", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn link_prefix_flag() {
    let dir = search_dir();
    let output = docseek(dir.path())
        .arg(dir.path().join("functions_10.js"))
        .args(["-q", "jacobian", "--link-prefix", "https://docs.example.org/search/"])
        .output()
        .unwrap();
    assert!(stdout(&output).contains("https://docs.example.org/search/../d4/d1a/"));
}

#[test]
fn config_file_sets_defaults() {
    let dir = search_dir();
    let config = dir.path().join("docseek.toml");
    std::fs::write(&config, "[search]\nmatch_mode = \"prefix\"\n").unwrap();
    let output = docseek(dir.path())
        .arg(dir.path().join("functions_9.js"))
        .arg("--config")
        .arg(&config)
        .args(["-q", "phsp"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
}

// ---------------------------------------------------------------------------
// Dump
// ---------------------------------------------------------------------------

#[test]
fn dump_reproduces_input() {
    let dir = search_dir();
    let output = docseek(dir.path())
        .arg(dir.path().join("functions_9.js"))
        .arg("--dump")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), FUNCTIONS_I);
}

// ---------------------------------------------------------------------------
// Failures and warnings
// ---------------------------------------------------------------------------

#[test]
fn missing_file_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output = docseek(dir.path())
        .arg(dir.path().join("functions_0.js"))
        .args(["-q", "init"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("functions_0.js"));
}

#[test]
fn missing_section_exits_nonzero() {
    let dir = search_dir();
    let output = docseek(dir.path())
        .arg(dir.path())
        .args(["--section", "enums", "-q", "x"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn no_paths_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = docseek(dir.path()).args(["-q", "init"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn malformed_records_warn_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "functions_0.js", WITH_MALFORMED);
    let output = docseek(dir.path())
        .arg(dir.path().join("functions_0.js"))
        .args(["-q", "good"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stderr(&output).contains("skipping malformed record"));
    let out = stdout(&output);
    assert!(out.contains("good.html#1"));
    assert!(out.contains("also.html#2"));
    assert!(!out.contains("skipping"));
}
