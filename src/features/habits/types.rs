//! Habit data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Database ID (None if not yet persisted).
    pub id: Option<i64>,
    /// Owner the habit belongs to.
    pub owner_id: String,
    /// The practice to repeat.
    pub subject: String,
    /// Consecutive days checked in.
    pub streak: i64,
    /// Last check-in instant.
    pub last_checked: Option<DateTime<Utc>>,
    /// When the habit was created.
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create an unsaved habit.
    #[must_use]
    pub fn new(owner_id: &str, subject: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            owner_id: owner_id.to_string(),
            subject: subject.to_string(),
            streak: 0,
            last_checked: None,
            created_at,
        }
    }

    /// Whether the habit was already checked in on the given day.
    #[must_use]
    pub fn checked_on(&self, now: DateTime<Utc>) -> bool {
        self.last_checked
            .is_some_and(|t| t.date_naive() == now.date_naive())
    }
}
