// Database service module
// SQLite database connection and schema management

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;

/// Thin wrapper around the application's SQLite connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the provided path and
    /// enables foreign keys immediately.
    ///
    /// # Examples
    /// ```
    /// use chronos_board::services::database::Database;
    /// let db = Database::new(":memory:").unwrap();
    /// ```
    pub fn new(path: &str) -> Result<Self> {
        let conn =
            Connection::open(path).context(format!("Failed to open database at {}", path))?;

        conn.execute("PRAGMA foreign_keys = ON", [])
            .context("Failed to enable foreign keys")?;

        Ok(Self { conn })
    }

    /// Provides read/write access to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Creates tables and seeds default data.
    pub fn initialize_schema(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS time_slots (
                    date TEXT NOT NULL,
                    hour INTEGER NOT NULL CHECK (hour >= 0 AND hour < 24),
                    category TEXT NOT NULL,
                    rating INTEGER CHECK (rating BETWEEN 1 AND 5),
                    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
                    PRIMARY KEY (date, hour)
                )",
                [],
            )
            .context("Failed to create time_slots table")?;

        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS settings (
                    id INTEGER PRIMARY KEY CHECK (id = 1),
                    theme TEXT NOT NULL DEFAULT 'dark',
                    time_format TEXT NOT NULL DEFAULT '24h',
                    show_analytics INTEGER NOT NULL DEFAULT 1,
                    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
                    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )
            .context("Failed to create settings table")?;

        self.conn
            .execute(
                "INSERT OR IGNORE INTO settings (id, theme, time_format, show_analytics)
                 VALUES (1, 'dark', '24h', 1)",
                [],
            )
            .context("Failed to insert default settings")?;

        Ok(())
    }
}

/// Platform-appropriate location for the application database.
pub fn default_database_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "chronos-board")
        .context("Failed to resolve application data directory")?;
    let data_dir = dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .context(format!("Failed to create data directory {:?}", data_dir))?;
    Ok(data_dir.join("chronos.db"))
}
