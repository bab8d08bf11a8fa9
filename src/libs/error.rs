//! Typed errors for the task store.
//!
//! Every storage call returns an explicit result instead of logging and
//! continuing, so a failed mutation is always visible to the caller. The
//! store itself never decides how a failure is surfaced to the user.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures the task store can report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The parent directory for the database file could not be created.
    #[error("failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Connection, schema, write or read failure in the backing database.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A task title must contain at least one non-whitespace character.
    #[error("task title must not be empty")]
    EmptyTitle,
}
