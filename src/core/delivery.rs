//! Notification delivery.
//!
//! Every reminder firing and focus-session transition goes out through the
//! `DeliverySink` trait. Failure handling differs by caller: interval
//! reminders and focus sessions tear down on a failed delivery, one-shot
//! reminders log and drop.

use colored::Colorize;

use crate::error::NudgeError;

/// An affordance attached to a delivered notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyAction {
    /// Dismiss the notification.
    Acknowledge,
    /// Re-schedule the same reminder this many minutes from now.
    Snooze(i64),
}

impl std::fmt::Display for ReplyAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Acknowledge => write!(f, "ok"),
            Self::Snooze(minutes) => write!(f, "snooze {minutes}m"),
        }
    }
}

/// Sink for owner-facing notifications.
#[cfg_attr(test, mockall::automock)]
pub trait DeliverySink {
    /// Deliver a message to an owner, offering the given reply actions.
    ///
    /// # Errors
    ///
    /// Returns `NudgeError::Delivery` if the owner could not be reached.
    fn deliver(&self, owner: &str, message: &str, actions: &[ReplyAction])
        -> Result<(), NudgeError>;
}

/// Delivery sink that prints to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DeliverySink for ConsoleSink {
    fn deliver(
        &self,
        _owner: &str,
        message: &str,
        actions: &[ReplyAction],
    ) -> Result<(), NudgeError> {
        let mut line = format!("{} {}", "🔔".bold(), message.bold());

        if !actions.is_empty() {
            let hints = actions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" / ");
            line.push_str(&format!("  {}", format!("[{hints}]").dimmed()));
        }

        println!("{line}");
        Ok(())
    }
}
