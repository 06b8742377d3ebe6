// ABOUTME: Main library entry point for the cafeteria intelligence engine
// ABOUTME: Wires repositories, services, logging, and configuration around the pure algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Cafeteria Engine
//!
//! Nutrition profiling, menu recommendation, and demand forecasting for a
//! cafeteria. The algorithms live in the `cafeteria-intelligence` crate and
//! are pure; this crate supplies the storage adapters behind the repository
//! ports, the orchestration services, and the `cafeteria-cli` binary.
//!
//! ## Architecture
//!
//! - **Core**: errors, domain models, constants, repository ports (`cafeteria-core`)
//! - **Intelligence**: nutrition, scoring, forecasting, alerts, reports (`cafeteria-intelligence`)
//! - **Database**: SQLite and in-memory implementations of the ports
//! - **Services**: dependency-injected use cases composing ports and algorithms
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cafeteria_engine::database::Database;
//! use cafeteria_engine::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let database = Database::new("sqlite::memory:").await?;
//!     println!("Connected to {}", database.url());
//!     Ok(())
//! }
//! ```

/// Environment configuration and intelligence configuration re-exports
pub mod config;

/// SQLite and in-memory repository implementations
pub mod database;

/// Unified error handling re-exported from `cafeteria-core`
pub mod errors;

/// Intelligence algorithms re-exported from `cafeteria-intelligence`
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Orchestration services over the repository ports
pub mod services;

pub use cafeteria_core::{constants, models, repositories};
