//! Focus session state.
//!
//! The pause-aware time accounting lives in `Stopwatch`, a pure value type
//! with no clock of its own: every operation takes the reference instant as
//! an argument, so the arithmetic is testable without real timers.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Phase of a focus session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusPhase {
    /// Actively focusing; a completion callback is armed.
    Focus,
    /// Focus suspended; no callback armed.
    Paused,
    /// Focus finished; the break timer is armed.
    Break,
}

impl std::fmt::Display for FocusPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Focus => write!(f, "focus"),
            Self::Paused => write!(f, "paused"),
            Self::Break => write!(f, "break"),
        }
    }
}

/// Pause-aware stopwatch.
///
/// Elapsed time is always `now − started_at − total_paused`, with the
/// currently open pause interval excluded until `resume` folds it in. That
/// single formula backs pause, resume, status, and stop alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stopwatch {
    /// When the stopwatch started.
    pub started_at: DateTime<Utc>,
    /// Set while paused; the open pause interval's start.
    pub paused_at: Option<DateTime<Utc>>,
    /// Closed pause intervals, folded in on resume.
    pub total_paused: Duration,
}

impl Stopwatch {
    /// Start a stopwatch at the given instant.
    #[must_use]
    pub const fn start(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            paused_at: None,
            total_paused: Duration::zero(),
        }
    }

    /// Whether the stopwatch is currently paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Open a pause interval. No-op when already paused.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Close the open pause interval, folding it into the total.
    /// No-op when not paused.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if let Some(paused_at) = self.paused_at.take() {
            self.total_paused += now - paused_at;
        }
    }

    /// Active (non-paused) time accumulated so far.
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        let open_pause = self.paused_at.map_or_else(Duration::zero, |p| now - p);
        now - self.started_at - self.total_paused - open_pause
    }
}

/// A per-owner focus session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSession {
    /// Owner the session belongs to.
    pub owner_id: String,
    /// Current phase.
    pub phase: FocusPhase,
    /// Pause-aware accounting for the Focus phase.
    pub stopwatch: Stopwatch,
    /// Nominal focus duration.
    pub nominal: Duration,
    /// Deadline of the armed callback; cleared while paused.
    pub(super) fire_at: Option<DateTime<Utc>>,
}

impl FocusSession {
    /// Time left in the Focus phase.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.nominal - self.stopwatch.elapsed(now)).max(Duration::zero())
    }

    /// Active focus time, independent of phase. After the Focus phase
    /// finished, this is the full nominal duration.
    #[must_use]
    pub fn active_time(&self, now: DateTime<Utc>) -> Duration {
        match self.phase {
            FocusPhase::Break => self.nominal,
            FocusPhase::Focus | FocusPhase::Paused => self.stopwatch.elapsed(now),
        }
    }
}
