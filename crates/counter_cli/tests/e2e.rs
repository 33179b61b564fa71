//! End-to-end tests for the `counter` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a Command for the counter binary with a clean environment.
#[allow(deprecated)]
fn counter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("counter").unwrap();
    cmd.env_remove("COUNTER_CONFIG").env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Render
// =============================================================================

mod render {
    use super::*;

    #[test]
    fn test_render_initial_view() {
        counter_cmd()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"data-test="component-app""#))
            .stdout(predicate::str::contains(
                r#"<h1 data-test="counter-display">The counter is now 0</h1>"#,
            ))
            .stdout(predicate::str::contains(r#"data-test="increment-button""#))
            .stdout(predicate::str::contains(r#"data-test="decrement-button""#));
    }

    #[test]
    fn test_render_preset_counter() {
        counter_cmd()
            .args(["render", "--counter", "7"])
            .assert()
            .success()
            .stdout(predicate::str::contains("The counter is now 7"));
    }

    #[test]
    fn test_render_error() {
        counter_cmd()
            .args(["render", "--error"])
            .assert()
            .success()
            .stdout(predicate::str::contains(">error!<"));
    }

    #[test]
    fn test_render_invalid_state_fails() {
        counter_cmd()
            .args(["render", "--counter", "2", "--error"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid widget state"));
    }
}

// =============================================================================
// Play
// =============================================================================

mod play {
    use super::*;

    #[test]
    fn test_play_prints_each_step() {
        counter_cmd()
            .args(["play", "++-"])
            .assert()
            .success()
            .stdout(predicate::eq(
                "The counter is now 1\nThe counter is now 2\nThe counter is now 1\n",
            ));
    }

    #[test]
    fn test_play_below_zero_shows_error_then_clears() {
        counter_cmd()
            .args(["play", "--", "--+"])
            .assert()
            .success()
            .stdout(predicate::eq("error!\nerror!\nThe counter is now 0\n"));
    }

    #[test]
    fn test_play_html() {
        counter_cmd()
            .args(["play", "--html", "i,i,i,d"])
            .assert()
            .success()
            .stdout(predicate::str::contains("The counter is now 2"))
            .stdout(predicate::str::starts_with("<div"));
    }

    #[test]
    fn test_play_invalid_action() {
        counter_cmd()
            .args(["play", "+x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid action 'x' at position 1"));
    }
}

// =============================================================================
// Config
// =============================================================================

mod config {
    use super::*;

    #[test]
    fn test_config_defaults() {
        counter_cmd()
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""initial_counter": 0"#))
            .stdout(predicate::str::contains(r#""log_level": "warn""#));
    }

    #[test]
    fn test_config_file_applies_to_play() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("widget.toml");
        fs::write(&path, "initial_counter = 10\n").unwrap();

        counter_cmd()
            .arg("--config")
            .arg(&path)
            .args(["play", "-"])
            .assert()
            .success()
            .stdout(predicate::eq("The counter is now 9\n"));
    }

    #[test]
    fn test_config_from_env() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("widget.json");
        fs::write(&path, r#"{"increment_label": "Add one"}"#).unwrap();

        counter_cmd()
            .env("COUNTER_CONFIG", &path)
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains(">Add one<"));
    }

    #[test]
    fn test_missing_config_fails() {
        counter_cmd()
            .args(["--config", "does-not-exist.toml", "config"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does-not-exist.toml"));
    }

    #[test]
    fn test_verbose_logs_to_stderr_only() {
        counter_cmd()
            .args(["-vv", "play", "+"])
            .assert()
            .success()
            .stdout(predicate::eq("The counter is now 1\n"))
            .stderr(predicate::str::contains("counter transition"));
    }

    #[test]
    fn test_verbose_reports_config_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("widget.toml");
        fs::write(&path, "initial_counter = 2\n").unwrap();

        counter_cmd()
            .arg("-v")
            .arg("--config")
            .arg(&path)
            .arg("config")
            .assert()
            .success()
            .stderr(predicate::str::contains("loaded widget config"))
            .stderr(predicate::str::contains("widget.toml"));
    }

    #[test]
    fn test_piped_logs_have_no_ansi_escapes() {
        counter_cmd()
            .args(["-vv", "play", "+-"])
            .assert()
            .success()
            .stderr(predicate::str::contains("counter transition"))
            .stderr(predicate::str::contains("\x1b[").not());
    }
}
