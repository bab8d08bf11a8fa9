//! The task store: sole authority over task durability and the canonical
//! task list.
//!
//! Every mutation writes to the backing table and then reloads the complete
//! table into the in-memory snapshot, so the snapshot never drifts from
//! committed storage. Consumers (the list, calendar, Gantt and statistics
//! views) read [`Tasks::tasks`] and re-render after calling a mutator; the
//! store emits no events.
//!
//! Mutations referencing an id with no matching row are silent no-ops, not
//! errors. Callers that need to know whether an operation took effect
//! re-check the snapshot.

use crate::db::db::Db;
use crate::libs::error::{Result, StoreError};
use crate::libs::task::Task;
use chrono::Local;
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

const INSERT_TASK: &str = "INSERT INTO tasks (title, done, tag, due_date, priority, created_at) VALUES (?1, 0, ?2, ?3, ?4, ?5)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, tag = ?3, due_date = ?4, priority = ?5 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
// Negates in place so the flip is atomic at the storage layer and stays
// correct even if a second writer ever appears.
const TOGGLE_TASK: &str = "UPDATE tasks SET done = 1 - done WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, done, tag, due_date, priority, created_at FROM tasks ORDER BY id";

/// SQLite-backed task store with a synchronized in-memory snapshot.
///
/// One instance exclusively owns the connection to its backing file for the
/// lifetime of the process. Construct it once and hand references to every
/// consumer; do not keep a second store on the same file.
pub struct Tasks {
    conn: Connection,
    tasks: Vec<Task>,
}

impl Tasks {
    /// Opens the store at the well-known per-OS data location.
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Self::from_db(db)
    }

    /// Opens the store at `path`, creating the file, its parent directory
    /// and the tasks table as needed, then loads the snapshot.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Db::open(path)?;
        Self::from_db(db)
    }

    fn from_db(db: Db) -> Result<Self> {
        let mut store = Tasks {
            conn: db.conn,
            tasks: Vec::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// The current snapshot, ordered by ascending id.
    ///
    /// Always a complete reflection of durable storage as of the last
    /// completed mutation.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task in the snapshot by id.
    pub fn get_by_id(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Inserts a new task with `done = false` and a creation timestamp
    /// taken from the local wall clock, then reloads the snapshot. The new
    /// task is the snapshot entry with the highest id.
    pub fn add(&mut self, title: &str, tag: Option<&str>, due_date: Option<&str>, priority: Option<&str>) -> Result<()> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let created_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.conn.execute(INSERT_TASK, params![title, tag, due_date, priority, created_at])?;
        debug!(title, "inserted task");

        self.reload()
    }

    /// Updates title, tag, due date and priority of the matching task.
    /// `done` and `created_at` are untouched. A missing id affects zero
    /// rows and is not an error.
    pub fn edit(&mut self, id: i64, title: &str, tag: Option<&str>, due_date: Option<&str>, priority: Option<&str>) -> Result<()> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let affected = self.conn.execute(UPDATE_TASK, params![id, title, tag, due_date, priority])?;
        debug!(id, affected, "updated task");

        self.reload()
    }

    /// Removes the matching task (no-op if absent). Deleted ids are never
    /// reassigned.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        debug!(id, affected, "deleted task");

        self.reload()
    }

    /// Flips the completion flag of the matching task in a single update
    /// statement (no-op if absent).
    pub fn toggle_done(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(TOGGLE_TASK, params![id])?;
        debug!(id, affected, "toggled task");

        self.reload()
    }

    /// Replaces the snapshot wholesale with all rows ordered by id. The
    /// single read path; there is no filtered or paged variant.
    fn reload(&mut self) -> Result<()> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], |row| {
            Ok(Task {
                id: row.get(0)?,
                title: row.get(1)?,
                done: row.get::<_, i64>(2)? != 0,
                tag: row.get(3)?,
                due_date: row.get(4)?,
                priority: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        debug!(count = tasks.len(), "loaded tasks from storage");
        self.tasks = tasks;

        Ok(())
    }
}
