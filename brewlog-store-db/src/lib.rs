// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! SQLite database interface for the brew journal.
//!
//! This crate provides read and write access to the journal's SQLite
//! database: inserting validated brews, fetching and filtering rows, and
//! applying in-place updates to a fixed set of columns.
//!
//! # Key Features
//!
//! - Idempotent schema creation and column migration on every open
//! - Allow-listed column updates (identity and required fields are immutable)
//! - Transactional batch insert for document import
//! - In-memory database for testing
//!
//! # Example
//!
//! ```ignore
//! use brewlog_store_db::{ListFilter, Store};
//!
//! let store = Store::open("~/.brewlog/brews.db")?;
//! for row in store.list_brews(&ListFilter::default())? {
//!     println!("#{} {}", row.id, row.date);
//! }
//! ```

mod connection;
mod error;
mod query;
mod schema;
mod types;
mod write;

pub use connection::Store;
pub use error::{Error, Result};
pub use schema::{RATING_COLUMNS, UPDATABLE_COLUMNS};
pub use types::*;
pub use write::*;
