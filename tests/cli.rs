//! End-to-end CLI tests.
//!
//! Everything here runs the built binary with piped stdio, so playback
//! delays are skipped automatically (no TTY) and the suite stays fast.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("smartchunk-demo").expect("binary builds")
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("scripts"))
        .stdout(predicate::str::contains("docs"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_starts_with_crate_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn scripts_lists_every_trigger() {
    cmd()
        .arg("scripts")
        .assert()
        .success()
        .stdout(predicate::str::contains("pip install smartchunk"))
        .stdout(predicate::str::contains("smartchunk chunk"))
        .stdout(predicate::str::contains("smartchunk compare"));
}

#[test]
fn docs_prints_quick_start() {
    cmd()
        .arg("docs")
        .assert()
        .success()
        .stdout(predicate::str::contains("SmartChunk Quick Start"))
        .stdout(predicate::str::contains("pip install"))
        .stdout(predicate::str::contains("JSONL"));
}

#[test]
fn play_chunk_emits_frames_in_order() {
    // Piped stdout is not a TTY, so this finishes without any delay.
    cmd()
        .args(["play", "chunk"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            "(?s)smartchunk chunk.*Reading document\\.md.*Parsing structure.*\
             Scoring semantic.*Packing chunks.*Wrote 23 chunks.*Done in 0\\.4s",
        )
        .unwrap());
}

#[test]
fn play_install_ends_with_closing_line() {
    cmd()
        .args(["play", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully installed smartchunk-1.4.2",
        ));
}

#[test]
fn play_accepts_instant_flag() {
    cmd()
        .args(["play", "compare", "--instant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("smartchunk wins on 47/50 queries"));
}

#[test]
fn play_unknown_script_fails() {
    cmd()
        .args(["play", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown script 'nope'"));
}

#[test]
fn completions_generate_for_bash() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("smartchunk-demo"));
}
