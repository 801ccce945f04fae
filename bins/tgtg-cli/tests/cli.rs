//! End-to-end runs of the `tgtg` binary

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;

const SESSION_VARS: &[&str] = &[
    "TGTG_API_URL",
    "TGTG_TIMEOUT_SECS",
    "TGTG_USER_AGENT",
    "TGTG_ACCESS_TOKEN",
    "TGTG_USER_ID",
    "TGTG_LANGUAGE",
    "TGTG_CURRENCY",
    "RUST_LOG",
];

fn tgtg() -> Command {
    let mut cmd = Command::cargo_bin("tgtg").unwrap();
    for var in SESSION_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_lists_operations() {
    tgtg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("nearby"))
        .stdout(predicate::str::contains("manufacturer-items"))
        .stdout(predicate::str::contains("rate"));
}

#[test]
fn test_malformed_language_fails_fast() {
    tgtg()
        .args(["--language", "english", "startup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language tag 'english'"));
}

#[test]
fn test_nearby_prints_response() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/location/v1/lookup")
        .match_header("authorization", "Bearer abc")
        .match_header("accept-language", "en-GB")
        .match_body(Matcher::Json(json!({ "latitude": 51.5, "longitude": -0.1 })))
        .with_status(200)
        .with_body(r#"{"restaurants":[{"name":"Bakery"}]}"#)
        .create();

    tgtg()
        .env("TGTG_API_URL", server.url())
        .env("TGTG_ACCESS_TOKEN", "abc")
        .args(["--language", "en-GB", "--compact", "nearby", "--lat", "51.5", "--lon", "-0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"restaurants":[{"name":"Bakery"}]}"#));

    mock.assert();
}

#[test]
fn test_rate_prints_status_code() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/order/v6/o1/rate")
        .match_body(Matcher::PartialJson(json!({
            "overall": { "score": 5 },
            "positive_feedback": ["PositiveFeedback_quick_collection"]
        })))
        .with_status(403)
        .create();

    tgtg()
        .args(["--api-url", &server.url(), "--token", "abc"])
        .args(["rate", "o1", "--overall", "5", "--content", "4", "--service", "5"])
        .args(["--feedback", "PositiveFeedback_quick_collection"])
        .assert()
        .success()
        .stdout(predicate::str::contains("403"));

    mock.assert();
}

#[test]
fn test_api_error_exits_with_failure() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/order/v6/active")
        .with_status(401)
        .with_body("Unauthorized")
        .create();

    tgtg()
        .args(["--api-url", &server.url(), "active-orders"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API error (401)"));
}
