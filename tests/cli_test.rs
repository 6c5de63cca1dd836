//! End-to-end CLI tests running the built binary against a mock backend.

mod common;

use common::TriageTest;
use common::mock_data::{TicketBuilder, collection_body, ticket_body};
use serde_json::json;
use triage::types::{TicketPriority, TicketStatus};

#[test]
fn test_help_lists_commands() {
    let triage = TriageTest::new();
    let output = triage.run_success(&["--help"]);
    for command in ["view", "submit", "ls", "status", "doctor", "config"] {
        assert!(output.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_config_set_get_roundtrip() {
    let triage = TriageTest::new();
    triage.run_success(&["config", "set", "api.url", "http://backend:9000"]);
    let output = triage.run_success(&["config", "get", "api.url"]);
    assert_eq!(output.trim(), "http://backend:9000");
}

#[test]
fn test_config_set_rejects_bad_url() {
    let triage = TriageTest::new();
    let stderr = triage.run_failure(&["config", "set", "api.url", "not a url"]);
    assert!(stderr.contains("invalid URL"));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let triage = TriageTest::new();
    let stderr = triage.run_failure(&["config", "set", "api.token", "x"]);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_completions_generate() {
    let triage = TriageTest::new();
    let output = triage.run_success(&["completions", "bash"]);
    assert!(output.contains("triage"));
}

#[test]
fn test_ls_filters_client_side() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/tickets")
        .with_status(200)
        .with_body(collection_body(&[
            TicketBuilder::new("t-1")
                .category("Networking")
                .tags(&["VPN"])
                .build(),
            TicketBuilder::new("t-2").category("Software").build(),
        ]))
        .create();

    let triage = TriageTest::new().with_api_url(&server.url());
    let output = triage.run_success(&["ls", "--category", "Networking", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["id"], "t-1");
}

#[test]
fn test_submit_merges_and_prints_assigned_id() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/ai/suggest")
        .with_status(200)
        .with_body(
            json!({
                "category": "Auth",
                "tags": ["login"],
                "priority": "High",
                "suggested_response": "Reset password"
            })
            .to_string(),
        )
        .create();
    let create = server
        .mock("POST", "/api/tickets")
        .match_body(mockito::Matcher::PartialJson(json!({
            "priority": "High",
            "category": "Auth"
        })))
        .with_status(200)
        .with_body(ticket_body(
            &TicketBuilder::new("t-42")
                .title("Login broken")
                .priority(TicketPriority::High)
                .category("Auth")
                .tags(&["login"])
                .build(),
        ))
        .create();

    let triage = TriageTest::new().with_api_url(&server.url());
    let output = triage.run_success(&[
        "submit",
        "--title",
        "Login broken",
        "--description",
        "Cannot log in",
        "--email",
        "a@b.com",
        "--json",
    ]);

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["id"], "t-42");
    assert_eq!(parsed["priority"], "High");
    create.assert();
}

#[test]
fn test_status_update_round_trips() {
    let mut server = mockito::Server::new();
    server
        .mock("PATCH", "/api/tickets/t-1")
        .match_body(mockito::Matcher::Json(json!({ "status": "Resolved" })))
        .with_status(200)
        .with_body(ticket_body(
            &TicketBuilder::new("t-1").status(TicketStatus::Resolved).build(),
        ))
        .create();

    let triage = TriageTest::new().with_api_url(&server.url());
    let output = triage.run_success(&["status", "t-1", "resolved", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["new_status"], "Resolved");
}

#[test]
fn test_status_unknown_ticket_fails() {
    let mut server = mockito::Server::new();
    server
        .mock("PATCH", "/api/tickets/missing")
        .with_status(404)
        .with_body("{\"detail\":\"Ticket not found\"}")
        .create();

    let triage = TriageTest::new().with_api_url(&server.url());
    let stderr = triage.run_failure(&["status", "missing", "resolved"]);
    assert!(stderr.contains("404"));
}

#[test]
fn test_apply_requires_at_least_one_field() {
    let triage = TriageTest::new();
    let stderr = triage.run_failure(&["apply", "t-1"]);
    assert!(stderr.contains("nothing to apply"));
}

#[test]
fn test_doctor_reports_unreachable_backend() {
    // Nothing listens on this port.
    let triage = TriageTest::new().with_api_url("http://127.0.0.1:1");
    let stderr = triage.run_failure(&["doctor"]);
    assert!(!stderr.is_empty());
}

#[test]
fn test_doctor_reports_healthy_backend() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/")
        .with_status(200)
        .with_body("{\"message\":\"AI Ticket System Backend Running\"}")
        .create();

    let triage = TriageTest::new().with_api_url(&server.url());
    let output = triage.run_success(&["doctor", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["reachable"], true);
}

#[test]
fn test_invalid_status_argument_rejected_before_network() {
    let triage = TriageTest::new().with_api_url("http://127.0.0.1:1");
    let stderr = triage.run_failure(&["status", "t-1", "done"]);
    assert!(stderr.contains("invalid status"));
}
