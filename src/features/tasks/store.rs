//! Task persistence.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::types::Task;
use crate::error::NudgeError;
use crate::storage::Database;

/// Storage for tasks.
pub struct TaskStore {
    db: Database,
}

impl TaskStore {
    /// Create a new task store at the default database location.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, NudgeError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create a store with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert a task, filling in its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&self, task: &mut Task) -> Result<(), NudgeError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO tasks (owner_id, subject, due_at, done, created_at)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                task.owner_id,
                task.subject,
                task.due_at.map(|t| t.to_rfc3339()),
                task.done,
                task.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| NudgeError::Database(format!("Failed to insert task: {e}")))?;

        task.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Get a task by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<Task>, NudgeError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, owner_id, subject, due_at, done, created_at
                  FROM tasks WHERE id = ?1",
            )
            .map_err(|e| NudgeError::Database(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([id], row_to_task)
            .optional()
            .map_err(|e| NudgeError::Database(format!("Failed to query task: {e}")))?;

        Ok(result)
    }

    /// List an owner's open tasks, soonest due first (undated last).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_open(&self, owner: &str) -> Result<Vec<Task>, NudgeError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, owner_id, subject, due_at, done, created_at
                  FROM tasks
                  WHERE owner_id = ?1 AND done = 0
                  ORDER BY due_at IS NULL, due_at ASC, id ASC",
            )
            .map_err(|e| NudgeError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([owner], row_to_task)
            .map_err(|e| NudgeError::Database(format!("Failed to query tasks: {e}")))?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row.map_err(|e| NudgeError::Database(format!("Bad task row: {e}")))?);
        }
        Ok(tasks)
    }

    /// Mark a task as done.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such task exists.
    pub fn complete(&self, id: i64) -> Result<(), NudgeError> {
        let conn = self.db.connection();

        let updated = conn
            .execute("UPDATE tasks SET done = 1 WHERE id = ?1", [id])
            .map_err(|e| NudgeError::Database(format!("Failed to complete task: {e}")))?;

        if updated == 0 {
            return Err(NudgeError::NotFound(format!("task {id}")));
        }
        Ok(())
    }
}

/// Convert a database row to a task.
fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let due_at: Option<String> = row.get(3)?;
    let created_at: String = row.get(5)?;

    Ok(Task {
        id: Some(row.get(0)?),
        owner_id: row.get(1)?,
        subject: row.get(2)?,
        due_at: due_at.and_then(|s| parse_timestamp(&s)),
        done: row.get(4)?,
        created_at: parse_timestamp(&created_at).unwrap_or_default(),
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
