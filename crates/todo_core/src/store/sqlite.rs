//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Open a database file (or memory) holding the `kv_entries` table.
//! - Upsert, read and delete single entries.
//!
//! # Invariants
//! - The table layout version is mirrored to `PRAGMA user_version`.
//! - Files stamped with a newer version are refused, never rewritten.
//! - `set` is a single upsert statement.

use crate::store::kv::{validate_key, KeyValueStorage, StorageError, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// `kv_entries` layout understood by this build.
pub const SCHEMA_VERSION: u32 = 1;

const CREATE_KV_ENTRIES_SQL: &str = "CREATE TABLE IF NOT EXISTS kv_entries (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

/// Key-value storage over an owned SQLite connection.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (creating when missing) the database file at `path`.
    ///
    /// # Side effects
    /// - Creates `kv_entries` on first open.
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Self::open_with("file", || Connection::open(path))
    }

    /// Opens a private in-memory database; contents vanish on drop.
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::open_with("memory", Connection::open_in_memory)
    }

    /// Read access to the underlying connection for diagnostics.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn open_with(
        mode: &'static str,
        connect: impl FnOnce() -> rusqlite::Result<Connection>,
    ) -> StorageResult<Self> {
        let started_at = Instant::now();
        let opened = connect()
            .map_err(StorageError::from)
            .and_then(|mut conn| {
                conn.busy_timeout(Duration::from_secs(5))?;
                ensure_schema(&mut conn)?;
                Ok(conn)
            });

        match opened {
            Ok(conn) => {
                info!(
                    "event=storage_open module=store backend=sqlite status=ok mode={} duration_ms={}",
                    mode,
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=storage_open module=store backend=sqlite status=error mode={} duration_ms={} error={}",
                    mode,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Creates `kv_entries` on a fresh file and refuses newer layouts.
fn ensure_schema(conn: &mut Connection) -> StorageResult<()> {
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if found > SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchema {
            found,
            supported: SCHEMA_VERSION,
        });
    }
    if found == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(CREATE_KV_ENTRIES_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;
    Ok(())
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}
