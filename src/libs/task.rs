//! Task record type shared between the store and its consumers.

use serde::{Deserialize, Serialize};

/// A single to-do item as read from storage.
///
/// Instances are only ever produced by the store's snapshot reload, so `id`
/// and `created_at` are always populated. `tag`, `due_date` and `priority`
/// are free-form labels and may be absent. `due_date` uses `YYYY-MM-DD` and
/// is not validated as a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub tag: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub created_at: String,
}
