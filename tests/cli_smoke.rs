#![allow(clippy::unwrap_used)]
//! CLI smoke tests for the modes that never reach the network.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn translate() -> Command {
    let mut cmd = Command::cargo_bin("translate").unwrap();
    cmd.env_remove("TRANSLATE_API_KEY")
        .env_remove("TRANSLATE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    translate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Google translation API"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--api-key"));
}

#[test]
fn test_version_displays_version() {
    translate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_short_help_flag_is_translated_text() {
    translate()
        .args(["--endpoint", "http://127.0.0.1:1", "-h", "en", "de"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stdout("")
        .stderr(predicate::str::contains("failed to reach"));
}

#[test]
fn test_short_version_flag_is_translated_text() {
    translate()
        .args(["--endpoint", "http://127.0.0.1:1", "-V", "en", "de"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("failed to reach"));
}

#[test]
fn test_double_dash_passes_option_text() {
    translate()
        .args(["--endpoint", "http://127.0.0.1:1", "--", "--quiet", "en", "de"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stdout("")
        .stderr(predicate::str::contains("failed to reach"));
}

#[test]
fn test_list_languages_single_line() {
    let output = translate().arg("-c").output().unwrap();

    assert_eq!(output.status.code(), Some(exitcode::OK));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.ends_with(" \n"));

    let codes: Vec<_> = stdout.split_whitespace().collect();
    assert!(codes.contains(&"en"));
    assert!(codes.contains(&"de"));
    assert!(codes.contains(&"zh-TW"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_list_languages_ignores_unreachable_endpoint() {
    translate()
        .args(["--endpoint", "http://127.0.0.1:1", "-c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en "));
}

#[test]
fn test_no_operands_is_usage_error() {
    translate()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: invalid arguments"))
        .stdout(predicate::str::starts_with("Usage:"));
}

#[test]
fn test_wrong_operand_counts_are_usage_errors() {
    for operands in [
        &["Hello"][..],
        &["Hello", "en"][..],
        &["Hello", "en", "de", "fr"][..],
        &["-c", "extra"][..],
    ] {
        translate()
            .args(operands)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("error: invalid arguments"))
            .stdout(predicate::str::contains("translate \"Hello World\" en de"));
    }
}

#[test]
fn test_usage_error_does_not_attempt_translation() {
    // Unreachable endpoint: any attempt would print a network error instead.
    translate()
        .args(["--endpoint", "http://127.0.0.1:1", "Hello", "en"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to reach").not());
}
