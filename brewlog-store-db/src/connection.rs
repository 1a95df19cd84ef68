// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database connection management.

use std::collections::HashSet;
use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::schema::{RATING_COLUMNS, SCHEMA_SQL};

/// SQLite database connection for the brew journal.
pub struct Store {
    pub(crate) conn: Connection,
}

impl Store {
    /// Open or create the journal database at `path`.
    ///
    /// Creates the parent directory if missing, applies pragmas, creates the
    /// schema, and runs column migration. Every step is idempotent, so
    /// opening an already current database is a no-op beyond the connection.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| Error::CreateDir {
                path: parent.to_owned(),
                source: e,
            })?;
        }

        let conn = Connection::open(path).map_err(|e| Error::DatabaseOpen {
            path: path.to_owned(),
            source: e,
        })?;
        let store = Self { conn };
        store.initialize()?;

        debug!("Opened database at {}", path.display());
        Ok(store)
    }

    /// Create an in-memory database (for testing).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        debug!("Created in-memory database");
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.configure_pragmas()?;
        self.create_schema()?;
        self.migrate()?;
        Ok(())
    }

    /// Configure SQLite pragmas for safe concurrent use.
    fn configure_pragmas(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            "#,
        )?;
        Ok(())
    }

    /// Create the database schema and index (idempotent).
    fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Add any rating columns missing from databases created by older
    /// releases. Existing rows keep their values; the new columns read NULL.
    fn migrate(&self) -> Result<()> {
        let existing = self.table_columns("brews")?;
        for col in RATING_COLUMNS {
            if !existing.contains(col) {
                // Column names come from a fixed compile-time list, so the
                // statement text is static apart from the name itself.
                self.conn
                    .execute_batch(&format!("ALTER TABLE brews ADD COLUMN {col} INTEGER"))?;
                debug!("Migration added column {col}");
            }
        }
        Ok(())
    }

    /// Column names of `table` per `PRAGMA table_info`.
    fn table_columns(&self, table: &str) -> Result<HashSet<String>> {
        let mut stmt = self
            .conn
            .prepare(&format!("PRAGMA table_info({table})"))?;
        let mut columns = HashSet::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            columns.insert(row.get(1)?);
        }
        Ok(columns)
    }

    /// Check if the database has the expected schema table.
    pub fn has_schema(&self) -> Result<bool> {
        let count: i32 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='brews'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
