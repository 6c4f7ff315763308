//! The reminder scheduler service.
//!
//! Owns two owner-keyed tables: armed one-shot reminders and active interval
//! reminders. All mutation happens synchronously on the caller's thread;
//! firing is driven by `tick()`, which the host pumps while idle. The clock
//! and delivery sink are injected so tests run on simulated time.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use super::types::{IntervalReminder, IntervalStatus, ReminderHandle, ScheduledReminder};
use crate::core::{Clock, DeliverySink, ReplyAction};
use crate::error::NudgeError;
use crate::features::temporal::{MAX_INTERVAL_MINUTES, MIN_INTERVAL_MINUTES};

/// Short snooze offered on every one-shot firing.
pub const SNOOZE_SHORT_MINUTES: i64 = 15;
/// Long snooze offered on every one-shot firing.
pub const SNOOZE_LONG_MINUTES: i64 = 60;

/// In-process scheduler for one-shot and interval reminders.
pub struct ReminderScheduler {
    clock: Arc<dyn Clock>,
    sink: Arc<dyn DeliverySink>,
    one_shots: HashMap<ReminderHandle, ScheduledReminder>,
    intervals: HashMap<String, IntervalReminder>,
    next_handle: u64,
}

impl ReminderScheduler {
    /// Create a scheduler with injected clock and delivery sink.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, sink: Arc<dyn DeliverySink>) -> Self {
        Self {
            clock,
            sink,
            one_shots: HashMap::new(),
            intervals: HashMap::new(),
            next_handle: 0,
        }
    }

    fn issue_handle(&mut self) -> ReminderHandle {
        self.next_handle += 1;
        ReminderHandle(self.next_handle)
    }

    // ── One-shot reminders ───────────────────────────────────────────

    /// Arm a reminder that fires once at `fire_at`.
    ///
    /// An instant already in the past arms with zero delay and fires on the
    /// next tick.
    pub fn schedule_one_shot(
        &mut self,
        owner: &str,
        text: &str,
        fire_at: DateTime<Utc>,
    ) -> ReminderHandle {
        let handle = self.issue_handle();
        let now = self.clock.now();
        let effective = fire_at.max(now);
        debug!(%handle, owner, %effective, "arming one-shot reminder");
        self.one_shots.insert(
            handle,
            ScheduledReminder {
                owner_id: owner.to_string(),
                text: text.to_string(),
                fire_at: effective,
            },
        );
        handle
    }

    /// Re-enter a delivered reminder `minutes` from now.
    pub fn snooze(&mut self, owner: &str, text: &str, minutes: i64) -> ReminderHandle {
        let fire_at = self.clock.now() + Duration::minutes(minutes);
        self.schedule_one_shot(owner, text, fire_at)
    }

    /// Cancel an armed one-shot reminder.
    ///
    /// Returns whether the handle was still armed. Cancellation is
    /// cooperative: a firing already in flight is unaffected.
    pub fn cancel(&mut self, handle: ReminderHandle) -> bool {
        self.one_shots.remove(&handle).is_some()
    }

    /// The armed one-shot reminders for an owner, soonest first.
    #[must_use]
    pub fn pending_for(&self, owner: &str) -> Vec<&ScheduledReminder> {
        let mut pending: Vec<&ScheduledReminder> = self
            .one_shots
            .values()
            .filter(|r| r.owner_id == owner)
            .collect();
        pending.sort_by_key(|r| r.fire_at);
        pending
    }

    // ── Interval reminders ───────────────────────────────────────────

    /// Start a recurring reminder for an owner.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` outside `[1, 1440]` minutes, and
    /// `ActiveIntervalConflict` if the owner already has one running; the
    /// caller must explicitly stop or replace it.
    pub fn start_interval(
        &mut self,
        owner: &str,
        text: &str,
        interval_minutes: i64,
    ) -> Result<ReminderHandle, NudgeError> {
        if !(MIN_INTERVAL_MINUTES..=MAX_INTERVAL_MINUTES).contains(&interval_minutes) {
            return Err(NudgeError::InvalidInterval {
                minutes: interval_minutes,
            });
        }
        if let Some(existing) = self.intervals.get(owner) {
            return Err(NudgeError::ActiveIntervalConflict {
                existing: existing.text.clone(),
            });
        }

        let handle = self.issue_handle();
        let now = self.clock.now();
        debug!(%handle, owner, interval_minutes, "starting interval reminder");
        self.intervals.insert(
            owner.to_string(),
            IntervalReminder {
                owner_id: owner.to_string(),
                text: text.to_string(),
                interval_minutes,
                started_at: now,
                firings: 0,
                next_fire_at: now + Duration::minutes(interval_minutes),
            },
        );
        Ok(handle)
    }

    /// Stop the owner's interval reminder and start a new one in its place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` outside `[1, 1440]` minutes.
    pub fn replace_interval(
        &mut self,
        owner: &str,
        text: &str,
        interval_minutes: i64,
    ) -> Result<ReminderHandle, NudgeError> {
        if !(MIN_INTERVAL_MINUTES..=MAX_INTERVAL_MINUTES).contains(&interval_minutes) {
            return Err(NudgeError::InvalidInterval {
                minutes: interval_minutes,
            });
        }
        self.intervals.remove(owner);
        self.start_interval(owner, text, interval_minutes)
    }

    /// Stop the owner's interval reminder, returning the removed entry.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveInterval` if none is running.
    pub fn stop_interval(&mut self, owner: &str) -> Result<IntervalReminder, NudgeError> {
        self.intervals
            .remove(owner)
            .ok_or(NudgeError::NoActiveInterval)
    }

    /// The owner's active interval reminder, if any.
    #[must_use]
    pub fn active_interval(&self, owner: &str) -> Option<&IntervalReminder> {
        self.intervals.get(owner)
    }

    /// Live status of the owner's interval reminder.
    #[must_use]
    pub fn interval_status(&self, owner: &str) -> Option<IntervalStatus> {
        let reminder = self.intervals.get(owner)?;
        Some(IntervalStatus {
            text: reminder.text.clone(),
            interval_minutes: reminder.interval_minutes,
            elapsed: self.clock.now() - reminder.started_at,
            firings: reminder.firings,
        })
    }

    // ── Firing ───────────────────────────────────────────────────────

    /// The next instant anything is due, for host pump pacing.
    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        let one_shot = self.one_shots.values().map(|r| r.fire_at).min();
        let interval = self.intervals.values().map(|r| r.next_fire_at).min();
        match (one_shot, interval) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fire everything due at the current instant. Returns the number of
    /// deliveries attempted.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        fired += self.fire_due_one_shots(now);
        fired += self.fire_due_intervals(now);
        fired
    }

    /// Fire and discard due one-shots. A failed delivery is logged and
    /// dropped without retry.
    fn fire_due_one_shots(&mut self, now: DateTime<Utc>) -> usize {
        let mut due: Vec<ReminderHandle> = self
            .one_shots
            .iter()
            .filter(|(_, r)| r.fire_at <= now)
            .map(|(h, _)| *h)
            .collect();
        due.sort_by_key(|h| self.one_shots.get(h).map(|r| r.fire_at));

        let mut fired = 0;
        for handle in due {
            let Some(reminder) = self.one_shots.remove(&handle) else {
                continue;
            };
            fired += 1;
            let actions = [
                ReplyAction::Acknowledge,
                ReplyAction::Snooze(SNOOZE_SHORT_MINUTES),
                ReplyAction::Snooze(SNOOZE_LONG_MINUTES),
            ];
            if let Err(e) = self
                .sink
                .deliver(&reminder.owner_id, &reminder.text, &actions)
            {
                warn!(owner = %reminder.owner_id, error = %e, "one-shot delivery failed; dropping");
            }
        }
        fired
    }

    /// Fire due interval reminders. A failed delivery tears the reminder
    /// down immediately to avoid a runaway failure loop.
    fn fire_due_intervals(&mut self, now: DateTime<Utc>) -> usize {
        let due: Vec<String> = self
            .intervals
            .iter()
            .filter(|(_, r)| r.next_fire_at <= now)
            .map(|(owner, _)| owner.clone())
            .collect();

        let mut fired = 0;
        for owner in due {
            let Some(reminder) = self.intervals.get_mut(&owner) else {
                continue;
            };
            reminder.firings += 1;
            // Re-arm anchored to the schedule, not the firing instant.
            while reminder.next_fire_at <= now {
                reminder.next_fire_at += Duration::minutes(reminder.interval_minutes);
            }

            fired += 1;
            let text = reminder.text.clone();
            if let Err(e) = self.sink.deliver(&owner, &text, &[ReplyAction::Acknowledge]) {
                warn!(%owner, error = %e, "interval delivery failed; tearing down");
                self.intervals.remove(&owner);
            }
        }
        fired
    }
}
