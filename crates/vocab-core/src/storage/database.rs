//! SQLite-backed snapshot storage.
//!
//! The whole library (articles, words, progress) is stored as one JSON value
//! in a key-value table, loaded on start and rewritten after every change.
//! The in-flight review session is kept under a second key so that separate
//! CLI invocations can continue the same queue.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{data_dir, Config};
use crate::error::{CoreError, Result, StorageError};
use crate::library::Library;
use crate::session::ReviewSession;

/// Key of the library snapshot. Matches the browser app's storage key so
/// exported snapshots can be restored verbatim.
pub const LIBRARY_KEY: &str = "vocab_booster_data_v1";
pub const SESSION_KEY: &str = "review_session";

/// SQLite database holding the persisted snapshot.
pub struct SnapshotDb {
    conn: Connection,
}

impl SnapshotDb {
    /// Open the database in the data directory, named per `storage.database_file`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open(config: &Config) -> Result<Self> {
        let path = data_dir()?.join(&config.storage.database_file);
        Self::open_at(&path)
    }

    /// Open (or create) the database at `path`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        tracing::debug!(path = %path.display(), "opened snapshot database");
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    // ── Key-value ────────────────────────────────────────────────────

    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn kv_delete(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(json) = self.kv_get(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&json).map_err(|e| StorageError::CorruptSnapshot {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(value))
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.kv_set(key, &json)?;
        Ok(())
    }

    // ── Snapshot ─────────────────────────────────────────────────────

    /// Load the library, or `None` if nothing has been imported yet.
    ///
    /// # Errors
    /// Returns [`StorageError::CorruptSnapshot`] if the stored JSON does not
    /// decode.
    pub fn load_library(&self) -> Result<Option<Library>> {
        let library: Option<Library> = self.load_json(LIBRARY_KEY)?;
        if let Some(lib) = &library {
            tracing::debug!(
                words = lib.words.len(),
                progress = lib.progress.len(),
                "loaded library snapshot"
            );
        }
        Ok(library)
    }

    pub fn save_library(&self, library: &Library) -> Result<()> {
        self.save_json(LIBRARY_KEY, library)?;
        tracing::debug!(
            words = library.words.len(),
            progress = library.progress.len(),
            "saved library snapshot"
        );
        Ok(())
    }

    /// Load the in-flight session. A session that fails to decode is
    /// discarded rather than reported, since it can always be rebuilt.
    pub fn load_session(&self) -> Result<ReviewSession> {
        match self.load_json::<ReviewSession>(SESSION_KEY) {
            Ok(session) => Ok(session.unwrap_or_default()),
            Err(CoreError::Storage(StorageError::CorruptSnapshot { message, .. })) => {
                tracing::warn!(%message, "discarding unreadable review session");
                Ok(ReviewSession::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save_session(&self, session: &ReviewSession) -> Result<()> {
        self.save_json(SESSION_KEY, session)
    }

    /// Full data reset: drop the library, its progress and the session.
    pub fn reset(&self) -> Result<()> {
        self.conn.execute("DELETE FROM kv", [])?;
        tracing::info!("all stored data removed");
        Ok(())
    }
}
