//! # Taskdeck - Task Persistence Core
//!
//! The persistence manager behind a multi-view to-do application. Owns the
//! SQLite-backed task table and the authoritative in-memory snapshot that
//! presentation layers (list, calendar, Gantt, statistics views) render from.
//!
//! ## Features
//!
//! - **Durable Storage**: Single embedded SQLite table, schema-compatible
//!   with existing data files
//! - **Consistent Snapshot**: The full task list is reloaded wholesale after
//!   every mutation, so readers always see committed state
//! - **Typed Errors**: Every storage failure surfaces as a `StoreError`
//!   instead of being swallowed inside the store
//! - **Schema Migrations**: Versioned, idempotent schema management
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::db::tasks::Tasks;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut store = Tasks::open("data/tasks.db")?;
//!     store.add("Buy milk", Some("Home"), Some("2025-01-01"), Some("Low"))?;
//!     for task in store.tasks() {
//!         println!("{} [{}]", task.title, if task.done { "x" } else { " " });
//!     }
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod libs;

pub use libs::error::{Result, StoreError};
pub use libs::task::Task;
