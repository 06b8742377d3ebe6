// ABOUTME: Helper modules for cafeteria-cli
// ABOUTME: Provides JSON output and input file helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

pub mod display;
