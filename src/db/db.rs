use crate::db::migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::{Result, StoreError};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DB_FILE_NAME: &str = "tasks.db";

/// Owns the SQLite connection for the lifetime of the process.
///
/// Exactly one `Db` (via one [`crate::db::tasks::Tasks`]) may hold a given
/// backing file; SQLite's own file locking governs that boundary. There is
/// no explicit close, the connection is released on drop.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the well-known per-OS data location.
    pub fn new() -> Result<Self> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens (creating if absent) the database at `path` and applies all
    /// pending migrations. Safe to call against an existing data file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| StoreError::DataDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut conn = Connection::open(path)?;
        migrations::init_with_migrations(&mut conn)?;
        debug!(path = %path.display(), "connected to task database");

        Ok(Db { conn })
    }

    /// Opens a connection without running migrations. Used by migration
    /// tests that need to drive the manager manually.
    pub fn open_without_migrations<P: AsRef<Path>>(path: P) -> Result<Connection> {
        Ok(Connection::open(path.as_ref())?)
    }
}
