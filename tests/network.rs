mod common;

use common::{serve_once, Reply};
use filebox_cli::api::ApiClient;
use filebox_cli::cli::{run, Commands};
use filebox_cli::config::AppConfig;
use filebox_cli::report::{MemorySink, Reporter};
use log::Level;
use std::time::Duration;
use tempfile::TempDir;

fn run_with_user_endpoint(command: Commands, random_user_url: &str) -> MemorySink {
    let workspace = TempDir::new().expect("failed to create temp workspace");
    let mut config = AppConfig::rooted_at(workspace.path().join("files"));
    config.random_user_url = random_user_url.to_string();
    let (mut reporter, sink) = Reporter::capture();
    run(command, &config, &mut reporter).expect("network commands never fail the run");
    sink
}

fn fetch(url: String) -> MemorySink {
    run_with_user_endpoint(Commands::Fetch { url }, "http://127.0.0.1:9/unused")
}

#[test]
fn fetch_prints_json_body_pretty() {
    let url = serve_once(Reply::ok("application/json", r#"{"id":7,"tags":["a"]}"#));
    let entries = fetch(url).entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].message, "Fetching data...");
    assert_eq!(entries[1].level, Level::Info);
    assert_eq!(
        entries[1].message,
        "Response Data:\n{\n  \"id\": 7,\n  \"tags\": [\n    \"a\"\n  ]\n}"
    );
}

#[test]
fn fetch_prints_plain_body_verbatim() {
    let url = serve_once(Reply::ok("text/plain", "just text"));
    let entries = fetch(url).entries();
    assert_eq!(entries[1].message, "Response Data:\njust text");
}

#[test]
fn fetch_non_success_status_is_logged() {
    let url = serve_once(Reply::ok("text/plain", "nope").status("404 Not Found"));
    let entries = fetch(url).entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].level, Level::Error);
    assert!(entries[1].message.starts_with("Error fetching data:"));
    assert!(entries[1].message.contains("404"));
}

// Slower than the blocking client's built-in default of 30 seconds.
#[test]
fn fetch_waits_for_slow_servers() {
    let url = serve_once(Reply::ok("text/plain", "ok").after(Duration::from_secs(31)));
    let api = ApiClient::new("http://127.0.0.1:9/unused").unwrap();
    let body = api.fetch(&url).expect("a slow reply must not time out");
    assert_eq!(body, "ok");
}

#[test]
fn random_user_prints_name_and_email() {
    let body = r#"{
        "results": [{
            "name": {"title": "Ms", "first": "Ana", "last": "Silva"},
            "email": "ana.silva@example.com"
        }],
        "info": {"results": 1}
    }"#;
    let url = serve_once(Reply::ok("application/json", body));
    let entries = run_with_user_endpoint(Commands::RandomUser, &url).entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].message, "Fetching random user data...");
    assert_eq!(entries[1].level, Level::Info);
    assert_eq!(entries[1].message, "User: Ana Silva | Email: ana.silva@example.com");
}

#[test]
fn random_user_with_empty_results_is_logged() {
    let url = serve_once(Reply::ok("application/json", r#"{"results": []}"#));
    let entries = run_with_user_endpoint(Commands::RandomUser, &url).entries();
    assert_eq!(entries[1].level, Level::Error);
    assert!(entries[1].message.starts_with("Error fetching user data:"));
    assert!(entries[1].message.contains("no results"));
}

#[test]
fn random_user_with_missing_field_is_logged() {
    let body = r#"{"results": [{"name": {"first": "A", "last": "B"}}]}"#;
    let url = serve_once(Reply::ok("application/json", body));
    let entries = run_with_user_endpoint(Commands::RandomUser, &url).entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].level, Level::Error);
    assert!(entries[1].message.starts_with("Error fetching user data:"));
}

#[test]
fn random_user_server_error_is_logged() {
    let url = serve_once(Reply::ok("text/plain", "boom").status("500 Internal Server Error"));
    let entries = run_with_user_endpoint(Commands::RandomUser, &url).entries();
    assert_eq!(entries[1].level, Level::Error);
    assert!(entries[1].message.contains("500"));
}
