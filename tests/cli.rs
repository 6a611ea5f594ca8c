use assert_cmd::prelude::*;
use predicates::str::{contains, is_match};
use std::process::Command;

#[test]
fn passforge_cli() {
    Command::cargo_bin("passforge")
        .unwrap()
        .assert()
        .failure()
        .stderr(contains(
            "passforge - Secure password generation with guaranteed class coverage",
        ))
        .stderr(contains("generate"))
        .stderr(contains("Generate a password"))
        .stderr(contains("classify"))
        .stderr(contains("Classify the strength of an existing password"))
        .stderr(contains("-h, --help"))
        .stderr(contains("Print help"))
        .stderr(contains("-V, --version"))
        .stderr(contains("Print version"));
}

#[test]
fn passforge_cli_generate_help() {
    Command::cargo_bin("passforge")
        .unwrap()
        .arg("generate")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--length"))
        .stdout(contains("--uppercase"))
        .stdout(contains("--lowercase"))
        .stdout(contains("--digits"))
        .stdout(contains("--symbols"))
        .stdout(contains("--config"))
        .stdout(contains("--show-strength"));
}

#[test]
fn generate_default_length() {
    Command::cargo_bin("passforge")
        .unwrap()
        .arg("generate")
        .assert()
        .success()
        .stdout(is_match(r"\A.{16}\n\z").unwrap());
}

#[test]
fn generate_digits_only() {
    Command::cargo_bin("passforge")
        .unwrap()
        .args(["generate", "--length", "6", "--digits"])
        .assert()
        .success()
        .stdout(is_match(r"\A[0-9]{6}\n\z").unwrap());
}

#[test]
fn generate_length_out_of_bounds_fails() {
    Command::cargo_bin("passforge")
        .unwrap()
        .args(["generate", "--length", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid request"))
        .stderr(contains("outside supported range"));
}

#[test]
fn generate_show_strength_reports_on_stderr() {
    Command::cargo_bin("passforge")
        .unwrap()
        .args(["generate", "--length", "16", "--show-strength"])
        .assert()
        .success()
        .stdout(is_match(r"\A.{16}\n\z").unwrap())
        .stderr(contains("strength: strong"));
}

#[test]
fn generate_missing_config_fails() {
    Command::cargo_bin("passforge")
        .unwrap()
        .args(["generate", "--config", "/nonexistent/passforge.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Failed to load config"));
}

#[test]
fn classify_strong_password() {
    Command::cargo_bin("passforge")
        .unwrap()
        .args(["classify", "Ab1!Ab1!Ab1!"])
        .assert()
        .success()
        .stdout(contains("strong (score 6/6)"));
}

#[test]
fn classify_weak_password() {
    Command::cargo_bin("passforge")
        .unwrap()
        .args(["classify", "abcdefgh"])
        .assert()
        .success()
        .stdout(contains("weak (score 2/6)"));
}

#[test]
fn classify_medium_password() {
    Command::cargo_bin("passforge")
        .unwrap()
        .args(["classify", "Abcdefgh12"])
        .assert()
        .success()
        .stdout(contains("medium (score 4/6)"));
}
