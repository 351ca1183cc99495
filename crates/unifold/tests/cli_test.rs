//! Integration tests for the `unifold` binary.
//!
//! Argument parsing, config handling and exit codes run without a
//! controller; the listing tests run against a wiremock controller.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// A `unifold` command with its config directory pointed at `home` and
/// every `UNIFOLD_*` variable cleared.
fn unifold_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unifold");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG");
    for var in [
        "UNIFOLD_PROFILE",
        "UNIFOLD_CONTROLLER",
        "UNIFOLD_SITE",
        "UNIFOLD_USERNAME",
        "UNIFOLD_PASSWORD",
        "UNIFOLD_PLATFORM",
        "UNIFOLD_OUTPUT",
        "UNIFOLD_INSECURE",
        "UNIFOLD_TIMEOUT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "meta": { "rc": "ok" }, "data": data }))
}

async fn mock_controller() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(envelope(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(envelope(json!([])))
        .mount(&server)
        .await;
    server
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run_blocking(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    unifold_cmd(home.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    unifold_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("sites")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("stations"))
            .and(predicate::str::contains("alarms")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    unifold_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unifold"));
}

#[test]
fn test_unknown_output_format_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    unifold_cmd(home.path())
        .args(["--output", "xml", "sites"])
        .assert()
        .code(2);
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_uses_config_dir() {
    let home = tempfile::tempdir().unwrap();
    let expected = home.path().join("unifold").join("config.toml");
    unifold_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_path_survives_malformed_config() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("unifold");
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("config.toml");
    std::fs::write(&file, "default_profile = [unclosed\n").unwrap();

    unifold_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(file.display().to_string()));

    unifold_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .code(1);
}

#[test]
fn test_config_init_then_show() {
    let home = tempfile::tempdir().unwrap();

    unifold_cmd(home.path())
        .args([
            "config",
            "init",
            "home",
            "--controller",
            "https://192.168.1.1",
            "--platform",
            "unifi-os",
            "--username",
            "admin",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Profile 'home' written"));

    assert!(home.path().join("unifold").join("config.toml").exists());

    unifold_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#"default_profile = "home""#)
                .and(predicate::str::contains("[profiles.home]"))
                .and(predicate::str::contains(r#"platform = "unifi-os""#)),
        );
}

#[test]
fn test_config_show_masks_passwords() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("unifold");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        r#"
[profiles.default]
controller = "https://10.0.0.1:8443"
username = "admin"
password = "hunter2"
"#,
    )
    .unwrap();

    unifold_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("****").and(predicate::str::contains("hunter2").not()));
}

#[test]
fn test_config_init_rejects_bad_url() {
    let home = tempfile::tempdir().unwrap();
    unifold_cmd(home.path())
        .args(["config", "init", "--controller", "not a url"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("controller"));
}

// ── Exit codes without a controller ─────────────────────────────────

#[test]
fn test_missing_config_exits_not_found() {
    let home = tempfile::tempdir().unwrap();
    unifold_cmd(home.path())
        .arg("devices")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No controller configured"));
}

#[test]
fn test_unknown_profile_exits_not_found() {
    let home = tempfile::tempdir().unwrap();
    unifold_cmd(home.path())
        .args(["--profile", "office", "sites"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("office"));
}

#[test]
fn test_missing_username_exits_auth() {
    let home = tempfile::tempdir().unwrap();
    unifold_cmd(home.path())
        .args(["--controller", "https://127.0.0.1:8443", "stations"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No credentials"));
}

#[test]
fn test_unreachable_controller_exits_connection() {
    let home = tempfile::tempdir().unwrap();
    unifold_cmd(home.path())
        .args(["--controller", "http://127.0.0.1:1", "-u", "admin", "alarms"])
        .env("UNIFOLD_PASSWORD", "pw")
        .assert()
        .code(7);
}

// ── Against a mock controller ───────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_devices_plain_lists_ids() {
    let server = mock_controller().await;
    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/device"))
        .respond_with(envelope(json!([
            { "_id": "ap-1", "type": "uap", "inform_ip": "10.0.0.5", "name": "Lobby" },
            { "_id": "sw-1", "type": "usw", "inform_ip": "10.0.0.6", "name": "Core" }
        ])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = unifold_cmd(home.path());
    cmd.args(["--controller", &server.uri(), "-u", "admin", "-o", "plain"])
        .args(["devices", "--kind", "switch"])
        .env("UNIFOLD_PASSWORD", "pw");

    let output = run_blocking(cmd).await;
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "sw-1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_alarms_json_hides_archived() {
    let server = mock_controller().await;
    Mock::given(method("GET"))
        .and(path("/api/s/branch/list/alarm"))
        .respond_with(envelope(json!([
            { "_id": "a1", "ap": "de:ad:be:ef:de:ad", "datetime": "2016-01-01T00:00:00Z",
              "key": "EVT_AP_Lost_Contact", "archived": false },
            { "_id": "a2", "ap": "de:ad:be:ef:de:ad", "datetime": "2016-01-02T00:00:00Z",
              "key": "EVT_AP_Lost_Contact", "archived": true }
        ])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = unifold_cmd(home.path());
    cmd.args(["-c", &server.uri(), "-u", "admin", "-s", "branch"])
        .args(["-o", "json-compact", "alarms"])
        .env("UNIFOLD_PASSWORD", "pw");

    let output = run_blocking(cmd).await;
    assert!(output.status.success(), "{output:?}");
    let alarms: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(alarms.as_array().unwrap().len(), 1);
    assert_eq!(alarms[0]["id"], "a1");
    assert_eq!(alarms[0]["ap_mac"], "de:ad:be:ef:de:ad");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_undecodable_station_exits_decode() {
    let server = mock_controller().await;
    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/sta"))
        .respond_with(envelope(json!([
            { "_id": "x", "ip": "192.168.1.2", "mac": "not-a-mac" }
        ])))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = unifold_cmd(home.path());
    cmd.args(["-c", &server.uri(), "-u", "admin", "stations"])
        .env("UNIFOLD_PASSWORD", "pw");

    let output = run_blocking(cmd).await;
    assert_eq!(output.status.code(), Some(9));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not-a-mac"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_login_exits_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.Invalid" }, "data": []
        })))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let mut cmd = unifold_cmd(home.path());
    cmd.args(["-c", &server.uri(), "-u", "admin", "sites"])
        .env("UNIFOLD_PASSWORD", "wrong");

    let output = run_blocking(cmd).await;
    assert_eq!(output.status.code(), Some(3));
}
