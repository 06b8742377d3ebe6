// ABOUTME: Output and input helpers for cafeteria-cli
// ABOUTME: Pretty JSON on stdout, JSON error bodies on stderr, and typed JSON file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use anyhow::{Context, Error, Result};
use cafeteria_engine::errors::{AppError, ErrorResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
    println!("{rendered}");
    Ok(())
}

/// Report a failed command on stderr; engine errors keep their code and status
pub fn print_error(error: Error) {
    match error.downcast::<AppError>() {
        Ok(app_error) => {
            let response = ErrorResponse::from(app_error);
            match serde_json::to_string_pretty(&response) {
                Ok(rendered) => eprintln!("{rendered}"),
                Err(_) => eprintln!("Error: {}", response.error.message),
            }
        }
        Err(other) => eprintln!("Error: {other:?}"),
    }
}

/// Read and deserialize a JSON file
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}
