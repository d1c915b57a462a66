//! Persistent key-value storage bootstrap.
//!
//! # Responsibility
//! - Define the string-keyed store contract used by collection mirrors.
//! - Open and configure the SQLite backing for that contract.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Collections never share a key: notes and tasks each own one fixed
//!   entry and cannot collide.
//! - Storage failures are non-fatal to callers; in-memory state stays
//!   authoritative for the running session.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod sqlite;

pub use sqlite::SqliteKeyValueStore;

/// Fixed entry key for the serialized notes collection.
pub const NOTES_KEY: &str = "notes";
/// Fixed entry key for the serialized tasks collection.
pub const TASKS_KEY: &str = "tasks";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// String-keyed blob store contract.
///
/// Collection mirrors and the background persister talk to storage only
/// through this seam, so the backing can be swapped without touching the
/// stores.
pub trait KeyValueStore: Send {
    /// Reads one entry. `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Overwrites one entry, creating it when absent.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
