//! Task data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A captured task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Database ID (None if not yet persisted).
    pub id: Option<i64>,
    /// Owner the task belongs to.
    pub owner_id: String,
    /// What needs doing.
    pub subject: String,
    /// When it is due, if known.
    pub due_at: Option<DateTime<Utc>>,
    /// Whether it has been completed.
    pub done: bool,
    /// When it was captured.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create an unsaved task.
    #[must_use]
    pub fn new(
        owner_id: &str,
        subject: &str,
        due_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            owner_id: owner_id.to_string(),
            subject: subject.to_string(),
            due_at,
            done: false,
            created_at,
        }
    }

    /// Whether the task is past its due instant.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.done && self.due_at.is_some_and(|due| due < now)
    }
}
