//! Error types for nudge.
//!
//! Scheduling conflicts and invalid intervals are rejected synchronously and
//! surfaced as short, corrective messages. An unresolvable time expression is
//! not an error at all: it becomes the "awaiting time" conversation state.

use thiserror::Error;

/// Errors that can occur in nudge.
#[derive(Debug, Error)]
pub enum NudgeError {
    /// A recurrence period outside the supported range was requested.
    #[error("interval of {minutes} minutes is out of range (1-1440); try 'every 30 minutes'")]
    InvalidInterval {
        /// The rejected period, in minutes.
        minutes: i64,
    },

    /// An interval reminder is already running for this owner.
    #[error("an interval reminder is already active: \"{existing}\"; stop or replace it first")]
    ActiveIntervalConflict {
        /// Text of the reminder already running.
        existing: String,
    },

    /// A focus session is already running for this owner.
    #[error("a focus session is already active ({phase}); stop it first")]
    ActiveSessionConflict {
        /// Phase the running session is in.
        phase: String,
    },

    /// No interval reminder is active for this owner.
    #[error("no active interval reminder")]
    NoActiveInterval,

    /// No focus session is active for this owner.
    #[error("no active focus session")]
    NoActiveSession,

    /// The requested state transition is not valid for the current phase.
    #[error("{0}")]
    InvalidTransition(String),

    /// A notification could not reach its owner.
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Requested item was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Parsing or serialization error.
    #[error("parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for NudgeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for NudgeError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_interval_message() {
        let err = NudgeError::InvalidInterval { minutes: 1441 };
        assert!(err.to_string().contains("1441"));
        assert!(err.to_string().contains("1-1440"));
    }

    #[test]
    fn test_conflict_message_names_existing() {
        let err = NudgeError::ActiveIntervalConflict {
            existing: "drink water".to_string(),
        };
        assert!(err.to_string().contains("drink water"));
    }
}
