//! Binary-level tests: exit codes and stdout/stderr routing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use mockito::{Matcher, Mock, Server, ServerGuard};
use predicates::str::{contains, is_empty};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("renovate-config-comment").expect("binary built");
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_REPOSITORY")
        .env_remove("GITHUB_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Command wired to the mock server with valid credentials.
fn cmd_for(server: &ServerGuard) -> Command {
    let mut cmd = cmd();
    cmd.env("GITHUB_TOKEN", "ghs_test")
        .env("GITHUB_REPOSITORY", "octo/repo")
        .env("GITHUB_API_URL", server.url());
    cmd
}

/// A mock that fails the test if any request reaches the server.
fn no_requests(server: &mut ServerGuard) -> Vec<Mock> {
    ["GET", "POST", "PATCH"]
        .into_iter()
        .map(|method| server.mock(method, Matcher::Any).expect(0).create())
        .collect()
}

#[test]
fn creates_comment() {
    let mut server = Server::new();
    let _list = server
        .mock("GET", "/repos/octo/repo/issues/12/comments")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create();
    let create = server
        .mock("POST", "/repos/octo/repo/issues/12/comments")
        .match_body(Matcher::Regex("INFO: all good".into()))
        .with_status(201)
        .with_body(r#"{"id": 55}"#)
        .create();

    cmd_for(&server)
        .args(["INFO: all good", "12"])
        .assert()
        .success()
        .stdout(contains("Created new PR comment #55"));
    create.assert();
}

#[test]
fn updates_comment() {
    let mut server = Server::new();
    let _list = server
        .mock("GET", "/repos/octo/repo/issues/12/comments")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"id": 4, "body": "<-- renovate-config-workflow-comment -->\nold"}]"#)
        .create();
    let _update = server
        .mock("PATCH", "/repos/octo/repo/issues/comments/4")
        .with_status(200)
        .with_body(r#"{"id": 4}"#)
        .create();

    cmd_for(&server)
        .args(["INFO: all good", "12"])
        .assert()
        .success()
        .stdout(contains("Updated existing PR comment #4"));
}

#[test]
fn non_numeric_pr_number_exits_one_without_request() {
    let mut server = Server::new();
    let guards = no_requests(&mut server);

    cmd_for(&server)
        .args(["output", "12abc"])
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("PR number must be a positive integer"));

    guards.iter().for_each(Mock::assert);
}

#[test]
fn empty_pr_number_exits_one_without_request() {
    let mut server = Server::new();
    let guards = no_requests(&mut server);

    cmd_for(&server)
        .args(["output", ""])
        .assert()
        .code(1)
        .stderr(contains("PR number cannot be empty"));

    guards.iter().for_each(Mock::assert);
}

#[test]
fn empty_validation_output_exits_one() {
    cmd()
        .args(["", "3"])
        .assert()
        .code(1)
        .stderr(contains("validation output cannot be empty"));
}

#[test]
fn missing_token_exits_one_without_request() {
    let mut server = Server::new();
    let guards = no_requests(&mut server);

    cmd_for(&server)
        .env_remove("GITHUB_TOKEN")
        .args(["output", "3"])
        .assert()
        .code(1)
        .stderr(contains("GITHUB_TOKEN environment variable not set"));

    guards.iter().for_each(Mock::assert);
}

#[test]
fn missing_repository_exits_one_without_request() {
    let mut server = Server::new();
    let guards = no_requests(&mut server);

    cmd_for(&server)
        .env_remove("GITHUB_REPOSITORY")
        .args(["output", "3"])
        .assert()
        .code(1)
        .stderr(contains("GITHUB_REPOSITORY environment variable not set"));

    guards.iter().for_each(Mock::assert);
}

#[test]
fn wrong_argument_count_exits_one() {
    cmd().arg("only-output").assert().code(1);
    cmd().args(["a", "1", "extra"]).assert().code(1);
    cmd().assert().code(1);
}

#[test]
fn list_failure_exits_one() {
    let mut server = Server::new();
    let _list = server
        .mock("GET", "/repos/octo/repo/issues/12/comments")
        .match_query(Matcher::Any)
        .with_status(401)
        .create();
    let create = server.mock("POST", Matcher::Any).expect(0).create();

    cmd_for(&server)
        .args(["output", "12"])
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("failed to fetch comments: 401 Unauthorized"));
    create.assert();
}

#[test]
fn help_and_version_succeed() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("GITHUB_TOKEN"));
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn json_error_output_goes_to_stderr() {
    cmd()
        .args(["--format", "json", "output", "x"])
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains(r#""kind": "usage""#));
}

/// Mocks an empty listing and a create whose body must match `pattern`.
fn expect_create(server: &mut ServerGuard, pattern: &str) -> (Mock, Mock) {
    let list = server
        .mock("GET", "/repos/octo/repo/issues/12/comments")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create();
    let create = server
        .mock("POST", "/repos/octo/repo/issues/12/comments")
        .match_body(Matcher::Regex(pattern.into()))
        .with_status(201)
        .with_body(r#"{"id": 56}"#)
        .expect(1)
        .create();
    (list, create)
}

#[test]
fn hyphen_leading_output_is_posted() {
    let mut server = Server::new();
    let (_list, create) = expect_create(&mut server, "- ERROR: bad key");

    cmd_for(&server)
        .args(["- ERROR: bad key", "12"])
        .assert()
        .success()
        .stdout(contains("Created new PR comment #56"));
    create.assert();
}

#[test]
fn output_with_fences_and_rules_is_posted_verbatim() {
    let mut server = Server::new();
    let output = "--- validation failed\n```json\n{\"extends\": 1}\n```";
    // JSON-escaped form of the output inside the request body.
    let (_list, create) = expect_create(
        &mut server,
        r#"--- validation failed\\n```json\\n\{\\"extends\\": 1\}\\n```"#,
    );

    cmd_for(&server)
        .args([output, "12"])
        .assert()
        .success()
        .stdout(contains("Created new PR comment #56"));
    create.assert();
}

#[test]
fn flag_named_output_after_separator_is_posted() {
    let mut server = Server::new();
    let (_list, create) = expect_create(&mut server, "```\\\\n--help\\\\n```");

    cmd_for(&server)
        .args(["--", "--help", "12"])
        .assert()
        .success()
        .stdout(contains("Created new PR comment #56"));
    create.assert();
}

#[test]
fn zero_timeout_exits_one_without_request() {
    let mut server = Server::new();
    let guards = no_requests(&mut server);

    cmd_for(&server)
        .args(["--timeout", "0", "output", "12"])
        .assert()
        .failure()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("timeout must be at least 1 second"));
    for guard in guards {
        guard.assert();
    }
}

#[test]
fn token_flag_is_rejected() {
    let mut server = Server::new();
    let guards = no_requests(&mut server);

    cmd_for(&server)
        .args(["--token", "ghs_cli", "output", "12"])
        .assert()
        .failure()
        .code(1);
    for guard in guards {
        guard.assert();
    }
}
