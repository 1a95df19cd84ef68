// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Error types for journal database operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for journal database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during journal database operations.
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open database with context
    #[error("Failed to open database at '{path}': {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to create the database directory
    #[error("Failed to create database directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Update targeted a column outside the allow-list
    #[error("Column '{0}' is not updatable")]
    DisallowedColumn(String),

    /// Failed to encode a column value
    #[error("Failed to encode column value: {0}")]
    Encode(#[from] serde_json::Error),
}
