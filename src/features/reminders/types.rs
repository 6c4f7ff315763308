//! Reminder data types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Identifies an armed reminder for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderHandle(pub(super) u64);

impl std::fmt::Display for ReminderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A reminder with exactly one future firing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledReminder {
    /// Owner the reminder belongs to.
    pub owner_id: String,
    /// Text delivered when it fires.
    pub text: String,
    /// The instant it fires.
    pub fire_at: DateTime<Utc>,
}

/// A recurring reminder. At most one exists per owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalReminder {
    /// Owner the reminder belongs to.
    pub owner_id: String,
    /// Text re-delivered on every firing.
    pub text: String,
    /// Recurrence period in minutes.
    pub interval_minutes: i64,
    /// When the reminder was started.
    pub started_at: DateTime<Utc>,
    /// How many times it has fired so far.
    pub firings: u64,
    /// Next scheduled firing.
    pub(super) next_fire_at: DateTime<Utc>,
}

/// Live status of an interval reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalStatus {
    /// Text re-delivered on every firing.
    pub text: String,
    /// Recurrence period in minutes.
    pub interval_minutes: i64,
    /// Time since the reminder started.
    #[serde(serialize_with = "crate::output::serialize_duration_secs")]
    pub elapsed: Duration,
    /// Firings so far.
    pub firings: u64,
}
