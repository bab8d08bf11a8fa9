//! Database layer for the taskdeck store.
//!
//! Provides the persistence layer built on SQLite: connection lifecycle,
//! versioned schema migrations, and the task store itself. The schema is
//! kept column-compatible with data files written by earlier versions of
//! the application.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::db::tasks::Tasks;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut store = Tasks::open("data/tasks.db")?;
//! store.add("Review code", Some("Work"), None, Some("High"))?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that manages the SQLite connection, ensures the
/// storage directory exists and applies pending migrations.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes and tracks migration history.
pub mod migrations;

/// The task store.
///
/// CRUD operations for tasks plus the authoritative in-memory snapshot
/// consumers render from.
pub mod tasks;
