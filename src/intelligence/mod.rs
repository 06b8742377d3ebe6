// ABOUTME: Intelligence module re-exports from the cafeteria-intelligence crate
// ABOUTME: Gives services and binaries crate::intelligence paths to every algorithm
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Intelligence Module
//!
//! Re-exports the pure algorithms and their configuration.

pub use cafeteria_intelligence::*;
