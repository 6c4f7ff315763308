//! The focus-session scheduler service.
//!
//! Runs one Pomodoro-style session per owner through
//! `Focus → Paused → Focus → Break → Idle`, with `stop` reachable from any
//! phase. Timeouts are checked by `tick()`, pumped by the host while idle.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use super::session::{FocusPhase, FocusSession, Stopwatch};
use crate::core::{Clock, DeliverySink, ReplyAction};
use crate::error::NudgeError;

/// Default length of the Focus phase.
pub const FOCUS_MINUTES: i64 = 25;
/// Default length of the Break phase.
pub const BREAK_MINUTES: i64 = 5;

/// Snapshot of a session for display.
#[derive(Debug, Clone, Serialize)]
pub struct FocusStatus {
    /// Current phase.
    pub phase: FocusPhase,
    /// Active focus time so far.
    #[serde(serialize_with = "crate::output::serialize_duration_secs")]
    pub elapsed: Duration,
    /// Focus time left.
    #[serde(serialize_with = "crate::output::serialize_duration_secs")]
    pub remaining: Duration,
    /// Time spent paused so far.
    #[serde(serialize_with = "crate::output::serialize_duration_secs")]
    pub total_paused: Duration,
}

/// In-process scheduler for per-owner focus sessions.
pub struct FocusScheduler {
    clock: Arc<dyn Clock>,
    sink: Arc<dyn DeliverySink>,
    sessions: HashMap<String, FocusSession>,
    focus_duration: Duration,
    break_duration: Duration,
}

impl FocusScheduler {
    /// Create a scheduler with the default 25/5 minute cycle.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, sink: Arc<dyn DeliverySink>) -> Self {
        Self::with_durations(
            clock,
            sink,
            Duration::minutes(FOCUS_MINUTES),
            Duration::minutes(BREAK_MINUTES),
        )
    }

    /// Create a scheduler with custom focus and break durations.
    #[must_use]
    pub fn with_durations(
        clock: Arc<dyn Clock>,
        sink: Arc<dyn DeliverySink>,
        focus_duration: Duration,
        break_duration: Duration,
    ) -> Self {
        Self {
            clock,
            sink,
            sessions: HashMap::new(),
            focus_duration,
            break_duration,
        }
    }

    /// Start a focus session for an owner.
    ///
    /// # Errors
    ///
    /// Returns `ActiveSessionConflict` if the owner already has one; the
    /// caller must explicitly stop it first.
    pub fn start(&mut self, owner: &str) -> Result<FocusStatus, NudgeError> {
        if let Some(existing) = self.sessions.get(owner) {
            return Err(NudgeError::ActiveSessionConflict {
                phase: existing.phase.to_string(),
            });
        }

        let now = self.clock.now();
        debug!(owner, "starting focus session");
        let session = FocusSession {
            owner_id: owner.to_string(),
            phase: FocusPhase::Focus,
            stopwatch: Stopwatch::start(now),
            nominal: self.focus_duration,
            fire_at: Some(now + self.focus_duration),
        };
        let status = Self::snapshot(&session, now);
        self.sessions.insert(owner.to_string(), session);
        Ok(status)
    }

    /// Pause the owner's Focus phase, cancelling the armed callback.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` without a session, or `InvalidTransition`
    /// outside the Focus phase.
    pub fn pause(&mut self, owner: &str) -> Result<FocusStatus, NudgeError> {
        let now = self.clock.now();
        let session = self
            .sessions
            .get_mut(owner)
            .ok_or(NudgeError::NoActiveSession)?;

        match session.phase {
            FocusPhase::Focus => {
                session.stopwatch.pause(now);
                session.phase = FocusPhase::Paused;
                session.fire_at = None;
                Ok(Self::snapshot(session, now))
            }
            FocusPhase::Paused => {
                Err(NudgeError::InvalidTransition("session is already paused".to_string()))
            }
            FocusPhase::Break => {
                Err(NudgeError::InvalidTransition("cannot pause during a break".to_string()))
            }
        }
    }

    /// Resume a paused session, re-arming the callback for exactly the
    /// remaining focus time computed at this instant.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` without a session, or `InvalidTransition`
    /// outside the Paused phase.
    pub fn resume(&mut self, owner: &str) -> Result<FocusStatus, NudgeError> {
        let now = self.clock.now();
        let session = self
            .sessions
            .get_mut(owner)
            .ok_or(NudgeError::NoActiveSession)?;

        if session.phase != FocusPhase::Paused {
            return Err(NudgeError::InvalidTransition(
                "session is not paused".to_string(),
            ));
        }

        session.stopwatch.resume(now);
        session.phase = FocusPhase::Focus;
        session.fire_at = Some(now + session.remaining(now));
        Ok(Self::snapshot(session, now))
    }

    /// Stop the owner's session from any phase, reporting total active
    /// (non-paused) time.
    ///
    /// # Errors
    ///
    /// Returns `NoActiveSession` without a session.
    pub fn stop(&mut self, owner: &str) -> Result<Duration, NudgeError> {
        let now = self.clock.now();
        let session = self
            .sessions
            .remove(owner)
            .ok_or(NudgeError::NoActiveSession)?;
        debug!(owner, phase = %session.phase, "stopping focus session");
        Ok(session.active_time(now))
    }

    /// Snapshot of the owner's session.
    #[must_use]
    pub fn status(&self, owner: &str) -> Option<FocusStatus> {
        let session = self.sessions.get(owner)?;
        Some(Self::snapshot(session, self.clock.now()))
    }

    /// Whether the owner has a session in any phase.
    #[must_use]
    pub fn is_active(&self, owner: &str) -> bool {
        self.sessions.contains_key(owner)
    }

    /// The next instant any session times out, for host pump pacing.
    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.sessions.values().filter_map(|s| s.fire_at).min()
    }

    /// Advance every session whose deadline has passed. Returns the number
    /// of deliveries attempted.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let due: Vec<String> = self
            .sessions
            .iter()
            .filter(|(_, s)| s.fire_at.is_some_and(|at| at <= now))
            .map(|(owner, _)| owner.clone())
            .collect();

        let mut fired = 0;
        for owner in due {
            let Some(session) = self.sessions.get_mut(&owner) else {
                continue;
            };
            match session.phase {
                FocusPhase::Focus => {
                    fired += 1;
                    let delivered = self.sink.deliver(
                        &owner,
                        "Focus session complete. Time for a break.",
                        &[ReplyAction::Acknowledge],
                    );
                    match delivered {
                        Ok(()) => {
                            // Advance to the break phase.
                            if let Some(session) = self.sessions.get_mut(&owner) {
                                session.phase = FocusPhase::Break;
                                session.fire_at = Some(now + self.break_duration);
                            }
                        }
                        Err(e) => {
                            warn!(%owner, error = %e, "focus delivery failed; tearing down");
                            self.sessions.remove(&owner);
                        }
                    }
                }
                FocusPhase::Break => {
                    fired += 1;
                    if let Err(e) = self.sink.deliver(
                        &owner,
                        "Break is over. Ready for the next cycle?",
                        &[ReplyAction::Acknowledge],
                    ) {
                        warn!(%owner, error = %e, "break delivery failed");
                    }
                    // Natural completion either way: the entry is done.
                    self.sessions.remove(&owner);
                }
                // Paused sessions have no armed callback.
                FocusPhase::Paused => {}
            }
        }
        fired
    }

    fn snapshot(session: &FocusSession, now: DateTime<Utc>) -> FocusStatus {
        let open_pause = session
            .stopwatch
            .paused_at
            .map_or_else(Duration::zero, |p| now - p);
        FocusStatus {
            phase: session.phase,
            elapsed: session.active_time(now),
            remaining: session.remaining(now),
            total_paused: session.stopwatch.total_paused + open_pause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ManualClock, MockDeliverySink};
    use chrono::TimeZone;

    fn start_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).single().unwrap()
    }

    fn scheduler_with(sink: MockDeliverySink) -> (Arc<ManualClock>, FocusScheduler) {
        let clock = Arc::new(ManualClock::new(start_instant()));
        let scheduler = FocusScheduler::new(clock.clone(), Arc::new(sink));
        (clock, scheduler)
    }

    fn quiet_sink() -> MockDeliverySink {
        let mut sink = MockDeliverySink::new();
        sink.expect_deliver().returning(|_, _, _| Ok(()));
        sink
    }

    #[test]
    fn test_start_full_cycle() {
        let mut sink = MockDeliverySink::new();
        sink.expect_deliver()
            .withf(|_, message, _| message.contains("Time for a break"))
            .times(1)
            .returning(|_, _, _| Ok(()));
        sink.expect_deliver()
            .withf(|_, message, _| message.contains("next cycle"))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let (clock, mut scheduler) = scheduler_with(sink);
        scheduler.start("ada").unwrap();

        // Focus runs its nominal 25 minutes.
        clock.advance(Duration::minutes(25));
        assert_eq!(scheduler.tick(), 1);
        assert_eq!(scheduler.status("ada").unwrap().phase, FocusPhase::Break);

        // Break runs 5 minutes, then the entry is gone.
        clock.advance(Duration::minutes(5));
        assert_eq!(scheduler.tick(), 1);
        assert!(!scheduler.is_active("ada"));
    }

    #[test]
    fn test_exclusive_per_owner() {
        let (_clock, mut scheduler) = scheduler_with(quiet_sink());
        scheduler.start("ada").unwrap();

        let err = scheduler.start("ada").unwrap_err();
        assert!(matches!(err, NudgeError::ActiveSessionConflict { .. }));

        // The first session survived.
        assert!(scheduler.is_active("ada"));
        // Other owners are independent.
        assert!(scheduler.start("bob").is_ok());
    }

    #[test]
    fn test_pause_resume_preserves_remaining() {
        let (clock, mut scheduler) = scheduler_with(quiet_sink());
        scheduler.start("ada").unwrap();

        // Pause after 5 active minutes.
        clock.advance(Duration::minutes(5));
        scheduler.pause("ada").unwrap();

        // Time passes while paused; remaining is unaffected.
        clock.advance(Duration::minutes(30));
        scheduler.resume("ada").unwrap();

        // 3 more active minutes, then pause again.
        clock.advance(Duration::minutes(3));
        scheduler.pause("ada").unwrap();
        clock.advance(Duration::minutes(11));
        let status = scheduler.resume("ada").unwrap();

        assert_eq!(status.elapsed, Duration::minutes(8));
        assert_eq!(status.remaining, Duration::minutes(25 - 8));
        assert_eq!(status.total_paused, Duration::minutes(41));
    }

    #[test]
    fn test_fires_at_cumulative_active_duration() {
        let mut sink = MockDeliverySink::new();
        sink.expect_deliver().times(1).returning(|_, _, _| Ok(()));

        let (clock, mut scheduler) = scheduler_with(sink);
        scheduler.start("ada").unwrap();

        clock.advance(Duration::minutes(5));
        scheduler.pause("ada").unwrap();
        clock.advance(Duration::minutes(60));
        scheduler.resume("ada").unwrap();

        // 24 active minutes in: one short of the nominal 25.
        clock.advance(Duration::minutes(19));
        assert_eq!(scheduler.tick(), 0);

        clock.advance(Duration::minutes(1));
        assert_eq!(scheduler.tick(), 1);
        assert_eq!(scheduler.status("ada").unwrap().phase, FocusPhase::Break);
    }

    #[test]
    fn test_paused_session_never_times_out() {
        let mut sink = MockDeliverySink::new();
        sink.expect_deliver().times(0);

        let (clock, mut scheduler) = scheduler_with(sink);
        scheduler.start("ada").unwrap();
        scheduler.pause("ada").unwrap();

        clock.advance(Duration::hours(2));
        assert_eq!(scheduler.tick(), 0);
        assert_eq!(scheduler.status("ada").unwrap().phase, FocusPhase::Paused);
    }

    #[test]
    fn test_invalid_transitions() {
        let (clock, mut scheduler) = scheduler_with(quiet_sink());

        assert!(matches!(
            scheduler.pause("ada").unwrap_err(),
            NudgeError::NoActiveSession
        ));

        scheduler.start("ada").unwrap();
        assert!(matches!(
            scheduler.resume("ada").unwrap_err(),
            NudgeError::InvalidTransition(_)
        ));

        scheduler.pause("ada").unwrap();
        assert!(matches!(
            scheduler.pause("ada").unwrap_err(),
            NudgeError::InvalidTransition(_)
        ));

        // Pause is not a break-phase operation.
        scheduler.resume("ada").unwrap();
        clock.advance(Duration::minutes(25));
        scheduler.tick();
        assert!(matches!(
            scheduler.pause("ada").unwrap_err(),
            NudgeError::InvalidTransition(_)
        ));
    }

    #[test]
    fn test_stop_reports_active_time() {
        let (clock, mut scheduler) = scheduler_with(quiet_sink());
        scheduler.start("ada").unwrap();

        clock.advance(Duration::minutes(5));
        scheduler.pause("ada").unwrap();
        clock.advance(Duration::minutes(10));
        scheduler.resume("ada").unwrap();
        clock.advance(Duration::minutes(2));

        let active = scheduler.stop("ada").unwrap();
        assert_eq!(active, Duration::minutes(7));
        assert!(!scheduler.is_active("ada"));

        assert!(matches!(
            scheduler.stop("ada").unwrap_err(),
            NudgeError::NoActiveSession
        ));
    }

    #[test]
    fn test_stop_during_break_reports_nominal() {
        let (clock, mut scheduler) = scheduler_with(quiet_sink());
        scheduler.start("ada").unwrap();

        clock.advance(Duration::minutes(25));
        scheduler.tick();
        clock.advance(Duration::minutes(2));

        let active = scheduler.stop("ada").unwrap();
        assert_eq!(active, Duration::minutes(25));
    }

    #[test]
    fn test_focus_delivery_failure_tears_down() {
        let mut sink = MockDeliverySink::new();
        sink.expect_deliver()
            .times(1)
            .returning(|_, _, _| Err(NudgeError::Delivery("unreachable".to_string())));

        let (clock, mut scheduler) = scheduler_with(sink);
        scheduler.start("ada").unwrap();

        clock.advance(Duration::minutes(25));
        scheduler.tick();

        assert!(!scheduler.is_active("ada"));
    }

    #[test]
    fn test_custom_durations() {
        let clock = Arc::new(ManualClock::new(start_instant()));
        let mut scheduler = FocusScheduler::with_durations(
            clock.clone(),
            Arc::new(quiet_sink()),
            Duration::minutes(50),
            Duration::minutes(10),
        );

        scheduler.start("ada").unwrap();
        clock.advance(Duration::minutes(25));
        assert_eq!(scheduler.tick(), 0);

        clock.advance(Duration::minutes(25));
        assert_eq!(scheduler.tick(), 1);
        assert_eq!(scheduler.status("ada").unwrap().phase, FocusPhase::Break);
    }

    #[test]
    fn test_next_due_ignores_paused() {
        let (_clock, mut scheduler) = scheduler_with(quiet_sink());
        assert!(scheduler.next_due().is_none());

        scheduler.start("ada").unwrap();
        assert_eq!(
            scheduler.next_due(),
            Some(start_instant() + Duration::minutes(25))
        );

        scheduler.pause("ada").unwrap();
        assert!(scheduler.next_due().is_none());
    }
}
