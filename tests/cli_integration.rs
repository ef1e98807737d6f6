//! Integration tests for the `td` CLI.
//!
//! Each test runs `td` as a subprocess against the seeded sample data and
//! verifies stdout (plain and JSON).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `td` binary.
fn td_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("td");
    path
}

/// Run `td` with the given args in the given directory, returning
/// (stdout, stderr, success).
fn run_td(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(td_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run td");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `td` expecting success, return stdout.
fn run_td_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_td(dir, args);
    if !success {
        panic!(
            "td {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[test]
fn test_tasks_default_lists_all() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["tasks"]);
    assert!(out.contains("Update User Interface"));
    assert!(out.contains("Database Optimization"));
    assert!(out.contains("Security Testing"));
    assert!(out.contains("Mobile App Testing"));
    assert!(out.contains("Content Migration"));
}

#[test]
fn test_tasks_priority_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["tasks", "--priority", "high"]);
    assert!(out.contains("Update User Interface"));
    assert!(out.contains("Security Testing"));
    assert!(!out.contains("Database Optimization"));
}

#[test]
fn test_tasks_status_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["tasks", "--status", "in-progress"]);
    assert!(out.contains("Update User Interface"));
    assert!(out.contains("Mobile App Testing"));
    assert!(!out.contains("Security Testing"));
}

#[test]
fn test_tasks_combined_filters_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["tasks", "--priority", "low", "--status", "done"]);
    assert!(out.contains("no matching tasks"));
}

#[test]
fn test_tasks_all_keyword_means_no_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    let all = run_td_ok(tmp.path(), &["tasks", "--priority", "all", "--status", "all"]);
    let plain = run_td_ok(tmp.path(), &["tasks"]);
    assert_eq!(all, plain);
}

#[test]
fn test_tasks_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["tasks", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 5);
    assert_eq!(arr[0]["id"], 1);
    assert_eq!(arr[0]["title"], "Update User Interface");
    assert_eq!(arr[0]["status"], "in-progress");
    assert_eq!(arr[0]["priority"], "high");
    assert_eq!(arr[0]["due_date"], "2025-05-10");
    assert_eq!(arr[0]["project"], "Website Redesign");
}

#[test]
fn test_tasks_json_filter_preserves_order() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["tasks", "--priority", "medium", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let ids: Vec<i64> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 5]);
}

#[test]
fn test_tasks_invalid_priority_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_td(tmp.path(), &["tasks", "--priority", "urgent"]);
    assert!(!success);
    assert!(stderr.contains("invalid priority"));
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[test]
fn test_projects_default_lists_all() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["projects"]);
    assert!(out.contains("Website Redesign"));
    assert!(out.contains("UI/UX Improvements"));
    assert!(out.contains("Apr 01, 2025"));
    assert!(out.contains("75%"));
}

#[test]
fn test_projects_status_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["projects", "--status", "completed"]);
    assert!(out.contains("Mobile App Development"));
    assert!(out.contains("UI/UX Improvements"));
    assert!(!out.contains("Security Audit"));
}

#[test]
fn test_projects_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["projects", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 5);
    assert_eq!(arr[1]["name"], "Mobile App Development");
    assert_eq!(arr[1]["progress"], 90);
    assert_eq!(arr[1]["status"], "completed");
    assert_eq!(arr[1]["start_date"], "2025-03-15");
}

#[test]
fn test_projects_invalid_status_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_td(tmp.path(), &["projects", "--status", "archived"]);
    assert!(!success);
    assert!(stderr.contains("invalid status"));
}

// ---------------------------------------------------------------------------
// Mine
// ---------------------------------------------------------------------------

#[test]
fn test_mine_lists_employee_tasks() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["mine"]);
    assert!(out.contains("Update user documentation"));
    assert!(out.contains("Implement new feature"));
    assert!(out.contains("Bug fixes for login page"));
    // Done task is always completed; the 2024 deadlines are long past
    assert!(out.contains("[completed]"));
    assert!(out.contains("[overdue]"));
    assert!(out.contains("(2 comments)"));
}

#[test]
fn test_mine_json_includes_schedule_and_comments() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["mine", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["schedule"], "completed");
    assert_eq!(arr[0]["comments"].as_array().unwrap().len(), 2);
    assert_eq!(arr[2]["schedule"], "overdue");
    // Task 3 has no comments; the field is skipped entirely
    assert!(arr[2].get("comments").is_none());
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[test]
fn test_stats_plain() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["stats"]);
    assert!(out.contains("taskdeck"));
    assert!(out.contains("projects: 5 total, 3 active, 2 completed"));
    assert!(out.contains("tasks: 5 total"));
    assert!(out.contains("team members: 5"));
}

#[test]
fn test_stats_reads_workspace_config() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("taskdeck.toml"),
        "[workspace]\nname = \"acme\"\n",
    )
    .unwrap();
    let out = run_td_ok(tmp.path(), &["stats"]);
    assert!(out.contains("acme"));
}

#[test]
fn test_stats_dash_c_flag() {
    let tmp = tempfile::TempDir::new().unwrap();
    let other = tempfile::TempDir::new().unwrap();
    fs::write(
        other.path().join("taskdeck.toml"),
        "[workspace]\nname = \"elsewhere\"\n",
    )
    .unwrap();
    let out = run_td_ok(
        tmp.path(),
        &["stats", "-C", other.path().to_str().unwrap()],
    );
    assert!(out.contains("elsewhere"));
}

#[test]
fn test_stats_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_td_ok(tmp.path(), &["stats", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["projects"]["total"], 5);
    assert_eq!(parsed["projects"]["completion_rate"], 40);
    assert_eq!(parsed["projects"]["avg_progress"], 74);
    assert_eq!(parsed["tasks"]["todo"], 2);
    assert_eq!(parsed["tasks"]["in_progress"], 2);
    assert_eq!(parsed["tasks"]["done"], 1);
    assert_eq!(parsed["tasks"]["pending"], 4);
    assert_eq!(parsed["team_members"], 5);
}

#[test]
fn test_malformed_config_is_an_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("taskdeck.toml"), "not toml [[[").unwrap();
    let (_, stderr, success) = run_td(tmp.path(), &["stats"]);
    assert!(!success);
    assert!(stderr.contains("cannot parse"));
}
