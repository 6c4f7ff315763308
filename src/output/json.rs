//! JSON output formatting for nudge.

use serde::Serialize;
use serde_json::json;

use crate::error::NudgeError;
use crate::features::habits::Habit;
use crate::features::tasks::Task;

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `NudgeError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, NudgeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format tasks as JSON.
///
/// # Errors
///
/// Returns `NudgeError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task]) -> Result<String, NudgeError> {
    let output = json!({
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format habits as JSON.
///
/// # Errors
///
/// Returns `NudgeError::Parse` if JSON serialization fails.
pub fn format_habits_json(habits: &[Habit]) -> Result<String, NudgeError> {
    let output = json!({
        "count": habits.len(),
        "items": habits
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
