// ABOUTME: Error module re-exports from cafeteria-core
// ABOUTME: Keeps crate::errors import paths stable for services and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unified Error Handling
//!
//! All error types are defined in `cafeteria-core` so the algorithms crate
//! and this crate share one taxonomy.

pub use cafeteria_core::errors::*;
