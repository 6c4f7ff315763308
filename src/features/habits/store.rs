//! Habit persistence.

use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::types::Habit;
use crate::error::NudgeError;
use crate::storage::Database;

/// Storage for habits.
pub struct HabitStore {
    db: Database,
}

impl HabitStore {
    /// Create a new habit store at the default database location.
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

    /// Insert a habit, filling in its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&self, habit: &mut Habit) -> Result<(), NudgeError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO habits (owner_id, subject, streak, last_checked, created_at)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                habit.owner_id,
                habit.subject,
                habit.streak,
                habit.last_checked.map(|t| t.to_rfc3339()),
                habit.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| NudgeError::Database(format!("Failed to insert habit: {e}")))?;

        habit.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Get a habit by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<Habit>, NudgeError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, owner_id, subject, streak, last_checked, created_at
                  FROM habits WHERE id = ?1",
            )
            .map_err(|e| NudgeError::Database(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([id], row_to_habit)
            .optional()
            .map_err(|e| NudgeError::Database(format!("Failed to query habit: {e}")))?;

        Ok(result)
    }

    /// List an owner's habits, longest streak first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self, owner: &str) -> Result<Vec<Habit>, NudgeError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, owner_id, subject, streak, last_checked, created_at
                  FROM habits
                  WHERE owner_id = ?1
                  ORDER BY streak DESC, id ASC",
            )
            .map_err(|e| NudgeError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([owner], row_to_habit)
            .map_err(|e| NudgeError::Database(format!("Failed to query habits: {e}")))?;

        let mut habits = Vec::new();
        for row in rows {
            habits.push(row.map_err(|e| NudgeError::Database(format!("Bad habit row: {e}")))?);
        }
        Ok(habits)
    }

    /// Check a habit in for the day.
    ///
    /// The streak extends when the previous check-in was yesterday, resets
    /// to 1 after a gap, and is idempotent within one day.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such habit exists.
    pub fn check_in(&self, id: i64, now: DateTime<Utc>) -> Result<Habit, NudgeError> {
        let mut habit = self
            .get(id)?
            .ok_or_else(|| NudgeError::NotFound(format!("habit {id}")))?;

        if habit.checked_on(now) {
            return Ok(habit);
        }

        let yesterday = now.date_naive() - Duration::days(1);
        habit.streak = match habit.last_checked {
            Some(prev) if prev.date_naive() == yesterday => habit.streak + 1,
            _ => 1,
        };
        habit.last_checked = Some(now);

        let conn = self.db.connection();
        conn.execute(
            "UPDATE habits SET streak = ?1, last_checked = ?2 WHERE id = ?3",
            params![habit.streak, now.to_rfc3339(), id],
        )
        .map_err(|e| NudgeError::Database(format!("Failed to update habit: {e}")))?;

        Ok(habit)
    }
}

/// Convert a database row to a habit.
fn row_to_habit(row: &Row<'_>) -> rusqlite::Result<Habit> {
    let last_checked: Option<String> = row.get(4)?;
    let created_at: String = row.get(5)?;

    Ok(Habit {
        id: Some(row.get(0)?),
        owner_id: row.get(1)?,
        subject: row.get(2)?,
        streak: row.get(3)?,
        last_checked: last_checked.and_then(|s| parse_timestamp(&s)),
        created_at: parse_timestamp(&created_at).unwrap_or_default(),
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
