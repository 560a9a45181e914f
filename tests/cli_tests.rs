//! End-to-end runs of the console commands against a temporary state directory.

use std::time::Duration;

use tempfile::tempdir;

use sentinel_console::cli::{execute, parse_args, Invocation};
use sentinel_console::config::ConsoleConfig;

fn invocation(dir: &std::path::Path, argv: &[&str]) -> Invocation {
    let base = ConsoleConfig::default()
        .with_state_dir(dir)
        .with_sign_in_latency(Duration::ZERO);
    let args: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
    parse_args(&args, base).expect("valid arguments")
}

#[tokio::test]
async fn login_persists_across_invocations() {
    let tmp = tempdir().unwrap();

    let out = execute(&invocation(tmp.path(), &["login", "admin@sentinel.ai", "pw"])).await.unwrap();
    assert_eq!(out, "signed in as Admin User <admin@sentinel.ai> (administrator)");

    let who = execute(&invocation(tmp.path(), &["whoami"])).await.unwrap();
    let v: serde_json::Value = serde_json::from_str(&who).unwrap();
    assert_eq!(v["organization"], "SentinelAI Corp");

    let out = execute(&invocation(tmp.path(), &["logout"])).await.unwrap();
    assert_eq!(out, "signed out admin@sentinel.ai");
    let who = execute(&invocation(tmp.path(), &["whoami"])).await.unwrap();
    assert_eq!(who, "not signed in");
}

#[tokio::test]
async fn bad_login_is_an_auth_error() {
    let tmp = tempdir().unwrap();
    let err = execute(&invocation(tmp.path(), &["login", "unknown@x.com", "pw"])).await.unwrap_err();
    assert_eq!(err.code_str(), "invalid_credentials");
    assert_eq!(err.exit_code(), 77);
}

#[tokio::test]
async fn nav_lists_viewer_entries_only() {
    let tmp = tempdir().unwrap();
    execute(&invocation(tmp.path(), &["login", "viewer@sentinel.ai", "pw"])).await.unwrap();

    let out = execute(&invocation(tmp.path(), &["nav"])).await.unwrap();
    assert!(out.contains("| Alerts"), "{out}");
    assert!(out.contains("/ai"), "{out}");
    assert!(!out.contains("/incidents"), "{out}");
    assert!(!out.contains("system"), "{out}");
    assert!(out.ends_with("rows: 4"), "{out}");
}

#[tokio::test]
async fn nav_without_session_says_so() {
    let tmp = tempdir().unwrap();
    let out = execute(&invocation(tmp.path(), &["nav"])).await.unwrap();
    assert_eq!(out, "no navigation available (not signed in)");
}

#[tokio::test]
async fn check_enforces_hidden_routes() {
    let tmp = tempdir().unwrap();
    execute(&invocation(tmp.path(), &["login", "enterprise@acme.com", "pw"])).await.unwrap();

    assert_eq!(execute(&invocation(tmp.path(), &["check", "/settings"])).await.unwrap(), "/settings allowed");
    let err = execute(&invocation(tmp.path(), &["check", "/yara"])).await.unwrap_err();
    assert_eq!(err.code_str(), "route_hidden");
    let err = execute(&invocation(tmp.path(), &["check", "/nowhere"])).await.unwrap_err();
    assert_eq!(err.code_str(), "unknown_route");
}

#[tokio::test]
async fn routes_marks_visibility_per_role() {
    let tmp = tempdir().unwrap();
    execute(&invocation(tmp.path(), &["login", "analyst@sentinel.ai", "pw"])).await.unwrap();

    let out = execute(&invocation(tmp.path(), &["routes"])).await.unwrap();
    let settings = out.lines().find(|l| l.contains("/settings")).expect("settings row");
    assert!(settings.contains("| no"), "{settings}");
    let yara = out.lines().find(|l| l.contains("/yara")).expect("yara row");
    assert!(yara.contains("| yes"), "{yara}");
    assert!(out.ends_with("rows: 22"), "{out}");
}

#[tokio::test]
async fn help_needs_no_state() {
    let tmp = tempdir().unwrap();
    let out = execute(&invocation(tmp.path(), &["--help"])).await.unwrap();
    assert!(out.contains("USAGE"));
    assert!(!tmp.path().join("sentinel_user.json").exists());
}
