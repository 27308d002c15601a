use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const SCHEMA: [&str; 4] = [
    "
    CREATE TABLE IF NOT EXISTS photographers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        document TEXT NOT NULL,
        company_name TEXT NOT NULL,
        logo TEXT NOT NULL,
        description TEXT NOT NULL
    )
    ",
    "
    CREATE TABLE IF NOT EXISTS folders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        photographer_id INTEGER NOT NULL,
        FOREIGN KEY (photographer_id) REFERENCES photographers(id)
    )
    ",
    "
    CREATE TABLE IF NOT EXISTS albums (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        access_hash TEXT NOT NULL,
        download_count INTEGER NOT NULL DEFAULT 0,
        download_limit INTEGER NOT NULL DEFAULT 0,
        folder_id INTEGER NOT NULL,
        name TEXT NOT NULL,
        FOREIGN KEY (folder_id) REFERENCES folders(id)
    )
    ",
    "
    CREATE TABLE IF NOT EXISTS photos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        url TEXT NOT NULL,
        album_id INTEGER NOT NULL,
        FOREIGN KEY (album_id) REFERENCES albums(id)
    )
    ",
];

/// Handle to the SQLite store shared by every handler.
///
/// Backed by a pool capped at a single connection, so the process talks to the
/// database through one logical connection. Foreign keys are declared in the
/// schema but not enforced: deletes never cascade and orphaned children are
/// left in place.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating the file if missing) and make sure the schema exists.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(false);

        Self::connect_with(options).await
    }

    /// Private in-memory database.
    #[cfg(test)]
    pub async fn connect_in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);

        Self::connect_with(options).await
    }

    async fn connect_with(options: SqliteConnectOptions) -> Result<Self, sqlx::Error> {
        // The one connection must never be recycled: an in-memory database
        // lives exactly as long as its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let db = Database { pool };
        db.create_schema().await?;

        Ok(db)
    }

    async fn create_schema(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
