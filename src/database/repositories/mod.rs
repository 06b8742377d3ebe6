// ABOUTME: SQLite-backed implementations of the engine's repository ports
// ABOUTME: Each wrapper owns a Database handle and delegates to the table managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Repository implementations
//!
//! The port traits live in `cafeteria_core::repositories`; these types bind
//! them to [`Database`](super::Database).

mod alert_repository;
mod catalog_repository;
mod consumption_repository;
mod waste_repository;

pub use alert_repository::AlertRepositoryImpl;
pub use catalog_repository::CatalogRepositoryImpl;
pub use consumption_repository::ConsumptionRepositoryImpl;
pub use waste_repository::WasteRepositoryImpl;

pub use crate::repositories::{
    AlertRepository, CatalogRepository, ConsumptionRepository, WasteRepository,
};
