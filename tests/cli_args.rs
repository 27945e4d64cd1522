//! Integration tests for the fetchkit binary
//!
//! Tests argument handling and a full run against a mock server.

use std::process::{Command, Output};

use mockito::Server;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fetchkit"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute fetchkit")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fetchkit"), "Help should mention fetchkit");
    assert!(stdout.contains("--base-url"), "Help should mention --base-url");
    assert!(stdout.contains("--retries"), "Help should mention --retries");
}

#[test]
fn test_invalid_retry_mode_prints_error_and_exits() {
    let output = run_cli(&["--retry-mode", "sometimes"]);
    assert!(!output.status.success(), "Expected invalid retry mode to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid retry mode"),
        "Should print error about retry mode: {}",
        stderr
    );
}

#[test]
fn test_invalid_base_url_prints_error_and_exits() {
    let output = run_cli(&["--base-url", "not-a-url"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid base URL"), "stderr: {}", stderr);
}

#[test]
fn test_full_run_prints_processed_and_search_results() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/people")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"name": "Leanne Graham", "active": true},
                {"name": "Ervin Howell", "active": true},
                {"name": "Clementine Bauch", "active": false}
            ]"#,
        )
        .expect(1)
        .create();

    let url = server.url();
    let output = run_cli(&["--base-url", &url, "--endpoint", "/people", "--query", "ervin"]);

    mock.assert();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Name: Ervin Howell, Active: true\n\
         Name: Leanne Graham, Active: true\n\
         Search results for \"ervin\":\n\
         Name: Ervin Howell, Active: true\n"
    );
}

#[test]
fn test_server_errors_exhaust_retries_and_fail() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/users")
        .with_status(500)
        .expect(2)
        .create();

    let url = server.url();
    let output = run_cli(&["--base-url", &url, "--retries", "2"]);

    mock.assert();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to process data"), "stderr: {}", stderr);
    assert!(stderr.contains("status: 500"), "stderr: {}", stderr);
}
