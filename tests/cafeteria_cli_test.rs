// ABOUTME: Integration tests for the cafeteria-cli binary
// ABOUTME: Runs the built binary against a temporary SQLite file and checks its JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Integration tests for the cafeteria-cli binary.
//!
//! These tests verify command structure, help output, and a seed-then-query
//! round through a real database file.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;

const FIXTURE: &str = r#"{
  "tenant_id": "campus-north",
  "menu_items": [
    { "id": "pasta", "name": "Pasta bake", "calories": 600, "stock": 0, "min_stock": 10 },
    { "id": "salad", "name": "Garden salad", "category": "vegetarian", "calories": 350 }
  ],
  "consumption": [
    { "menu_id": "salad", "date": "2024-01-14", "quantity": 40 }
  ]
}"#;

/// Helper to run the CLI and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_cafeteria-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn database_url(dir: &Path) -> String {
    format!("sqlite:{}", dir.join("nested").join("cafeteria.db").display())
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["seed", "recommend", "forecast", "plan", "alerts", "report"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
    assert!(stdout.contains("Cafeteria Intelligence Engine"));
}

#[test]
fn test_cli_rejects_unknown_period() {
    let (exit_code, _stdout, stderr) = run_cli(&["report", "--period", "decade"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("decade"));
}

#[test]
fn test_cli_rejects_non_sqlite_database() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "--database-url",
        "postgresql://localhost/cafeteria",
        "plan",
    ]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    let body = stderr.find('{').map(|start| &stderr[start..]).unwrap();
    let error: Value = serde_json::from_str(body).unwrap();
    assert_eq!(error["error"]["code"], "INVALID_INPUT");
    assert_eq!(error["error"]["status"], 400);
}

#[test]
fn test_cli_seed_then_plan() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = dir.path().join("fixture.json");
    fs::write(&fixture, FIXTURE).unwrap();
    let url = database_url(dir.path());

    let (exit_code, stdout, stderr) = run_cli(&[
        "--database-url",
        &url,
        "seed",
        "--fixture",
        fixture.to_str().unwrap(),
    ]);
    assert_eq!(exit_code, 0, "seed failed: {stderr}");
    let summary: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["tenant_id"], "campus-north");
    assert_eq!(summary["menu_items"], 2);

    let (exit_code, stdout, stderr) = run_cli(&[
        "--database-url",
        &url,
        "plan",
        "--tenant",
        "campus-north",
        "--date",
        "2024-01-15",
    ]);
    assert_eq!(exit_code, 0, "plan failed: {stderr}");
    let plan: Value = serde_json::from_str(&stdout).unwrap();
    let suggestions = plan["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["menu_id"], "pasta");
    assert_eq!(suggestions[0]["action"], "produce");
    assert_eq!(suggestions[0]["suggested_quantity"], 10);
}
