//! Reminder scheduling.
//!
//! One-shot reminders fire once at a computed instant and discard
//! themselves. Interval reminders recur every fixed number of minutes, at
//! most one per owner. Nothing here is persisted: a process restart drops
//! every pending reminder by design.

mod scheduler;
mod types;

pub use scheduler::{ReminderScheduler, SNOOZE_LONG_MINUTES, SNOOZE_SHORT_MINUTES};
pub use types::{IntervalReminder, IntervalStatus, ReminderHandle, ScheduledReminder};
