//! Output formatting for nudge.
//!
//! This module provides formatters for displaying assistant data in pretty
//! (colored terminal) and JSON forms.

mod json;
mod pretty;

use chrono::Duration;
use serde::Serializer;

use crate::cli::args::OutputFormat;
use crate::error::NudgeError;
use crate::features::habits::Habit;
use crate::features::intent::Intent;
use crate::features::tasks::Task;

pub use json::to_json;
pub use pretty::{format_duration, format_habits_pretty, format_intent_pretty, format_tasks_pretty};

/// Serialize a `chrono::Duration` as whole seconds.
///
/// # Errors
///
/// Never fails; the signature is dictated by serde.
pub fn serialize_duration_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(d.num_seconds())
}

/// Format tasks based on output format.
///
/// # Errors
///
/// Returns `NudgeError::Parse` if JSON serialization fails.
pub fn format_tasks(tasks: &[Task], format: OutputFormat) -> Result<String, NudgeError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks)),
        OutputFormat::Json => json::format_tasks_json(tasks),
    }
}

/// Format habits based on output format.
///
/// # Errors
///
/// Returns `NudgeError::Parse` if JSON serialization fails.
pub fn format_habits(habits: &[Habit], format: OutputFormat) -> Result<String, NudgeError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(habits)),
        OutputFormat::Json => json::format_habits_json(habits),
    }
}

/// Format a classified intent based on output format.
///
/// # Errors
///
/// Returns `NudgeError::Parse` if JSON serialization fails.
pub fn format_intent(intent: &Intent, format: OutputFormat) -> Result<String, NudgeError> {
    match format {
        OutputFormat::Pretty => Ok(format_intent_pretty(intent)),
        OutputFormat::Json => to_json(intent),
    }
}
