// ABOUTME: Structured error types for repository and database operations
// ABOUTME: Returned by every repository port so storage failures propagate to callers unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#[cfg(feature = "database-errors")]
use sqlx::Error as SqlxError;
use thiserror::Error;

/// Errors raised by storage collaborators
///
/// The engine never retries or masks these; they bubble up to whoever
/// invoked the operation.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not open or reach the backing store
    #[error("Database connection failed: {context}")]
    ConnectionError {
        /// Underlying failure description
        context: String,
    },

    /// A query or statement failed
    #[error("Database query failed: {context}")]
    QueryError {
        /// Underlying failure description
        context: String,
    },

    /// A referenced entity does not exist
    #[error("{entity_type} '{entity_id}' not found")]
    NotFound {
        /// Kind of entity (`menu_item`, `alert`, ...)
        entity_type: &'static str,
        /// Identifier that was looked up
        entity_id: String,
    },

    /// Stored data could not be converted to or from its domain type
    #[error("Serialization failed: {context}")]
    SerializationError {
        /// Underlying failure description
        context: String,
    },

    /// Schema migration failed
    #[error("Migration failed: {context}")]
    MigrationError {
        /// Underlying failure description
        context: String,
    },
}

#[cfg(feature = "database-errors")]
impl From<SqlxError> for DatabaseError {
    fn from(error: SqlxError) -> Self {
        match error {
            SqlxError::RowNotFound => Self::NotFound {
                entity_type: "row",
                entity_id: String::new(),
            },
            SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
                Self::ConnectionError {
                    context: error.to_string(),
                }
            }
            SqlxError::ColumnDecode { .. } | SqlxError::Decode(_) => {
                Self::SerializationError {
                    context: error.to_string(),
                }
            }
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationError {
            context: error.to_string(),
        }
    }
}
