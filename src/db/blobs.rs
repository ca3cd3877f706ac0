use super::db::Db;
use super::BlobStore;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

/// Key under which the task collection is stored.
pub const TASKS_KEY: &str = "sheettask_ai_data";

const SCHEMA_BLOBS: &str = "CREATE TABLE IF NOT EXISTS blobs (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const SELECT_BLOB: &str = "SELECT value FROM blobs WHERE key = ?";
const UPSERT_BLOB: &str = "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_BLOB: &str = "DELETE FROM blobs WHERE key = ?";

/// Blob slot kept in a SQLite key/value table.
pub struct SqliteBlobStore {
    conn: Connection,
    key: String,
}

impl SqliteBlobStore {
    /// Opens the slot for the task collection in the application database.
    pub fn new() -> Result<Self> {
        Self::with_db(Db::new()?, TASKS_KEY)
    }

    pub fn with_db(db: Db, key: &str) -> Result<Self> {
        db.conn.execute(SCHEMA_BLOBS, [])?;
        Ok(Self {
            conn: db.conn,
            key: key.to_string(),
        })
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(SELECT_BLOB, params![self.key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, blob: &str) -> Result<()> {
        self.conn.execute(UPSERT_BLOB, params![self.key, blob])?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.conn.execute(DELETE_BLOB, params![self.key])?;
        Ok(())
    }
}
