// ABOUTME: Core types and constants for the cafeteria intelligence engine
// ABOUTME: Foundation crate with error handling, domain models, constants, and repository ports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Cafeteria Core
//!
//! Foundation crate providing shared types for the cafeteria intelligence engine.
//! This crate is designed to change infrequently, enabling incremental compilation
//! benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **constants**: Energy conversion factors, calendar names, service names
//! - **models**: Profiles, menu items, consumption/waste facts, forecasts, alerts
//! - **repositories**: Async ports the engine reads from and writes to

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profiles, menus, forecasts, alerts)
pub mod models;

/// Repository ports implemented by storage collaborators
pub mod repositories;
