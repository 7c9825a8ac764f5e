//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("muchtodo-config"));
    cmd.env_clear();
    cmd
}

fn dir_arg(dir: &TempDir) -> &str {
    dir.path().to_str().expect("utf8 path")
}

#[test]
fn test_cli_version() {
    let mut cmd = cli();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("muchtodo-config"));
}

#[test]
fn test_cli_help() {
    let mut cmd = cli();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_show_defaults_without_settings_file() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = cli();
    cmd.args(["show", dir_arg(&dir)]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PORT=8080"))
        .stdout(predicate::str::contains("JWT_EXPIRATION_HOURS=72"))
        .stdout(predicate::str::contains("COOKIE_DOMAINS=localhost"))
        .stdout(predicate::str::contains("ALLOWED_ORIGINS=http://localhost:5173"));
}

#[test]
fn test_show_environment_overrides_file() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(".env"), "PORT=3000\nDB_NAME=much_todo\n").expect("write .env");

    let mut cmd = cli();
    cmd.args(["show", dir_arg(&dir)]).env("PORT", "4000");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PORT=4000"))
        .stdout(predicate::str::contains("DB_NAME=much_todo"));
}

#[test]
fn test_show_masks_secrets_by_default() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(".env"), "JWT_SECRET_KEY=topsecret\n").expect("write .env");

    let mut cmd = cli();
    cmd.args(["show", dir_arg(&dir)]);
    cmd.assert().success().stdout(predicate::str::contains("topsecret").not());

    let mut reveal = cli();
    reveal.args(["show", dir_arg(&dir), "--show-secrets"]);
    reveal.assert().success().stdout(predicate::str::contains("JWT_SECRET_KEY=topsecret"));
}

#[test]
fn test_show_json_output() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = cli();
    cmd.args(["show", dir_arg(&dir), "--format", "json"])
        .env("ALLOWED_ORIGINS", "http://a.com, 'http://b.com' ,  ");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"ALLOWED_ORIGINS\""))
        .stdout(predicate::str::contains("\"http://b.com\""))
        .stdout(predicate::str::contains("'http://b.com'").not());
}

#[test]
fn test_check_succeeds_for_valid_configuration() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(".env"), "ENABLE_CACHE=true\nJWT_EXPIRATION_HOURS=1\n")
        .expect("write .env");

    let mut cmd = cli();
    cmd.args(["check", dir_arg(&dir)]);
    cmd.assert().success().stdout(predicate::str::contains("configuration OK"));
}

#[test]
fn test_check_fails_for_non_integer_expiration() {
    let dir = TempDir::new().expect("temp dir");
    let mut cmd = cli();
    cmd.args(["check", dir_arg(&dir)]).env("JWT_EXPIRATION_HOURS", "forever");
    cmd.assert().failure().stderr(predicate::str::contains("not usable"));
}

#[test]
fn test_check_fails_for_malformed_settings_file() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(".env"), "THIS LINE IS BROKEN\n").expect("write .env");

    let mut cmd = cli();
    cmd.args(["check", dir_arg(&dir)]);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid settings file"));
}
