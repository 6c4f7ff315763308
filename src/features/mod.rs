//! Feature implementations for nudge.
//!
//! This module contains the implementation of the assistant's features:
//! - Temporal expression resolution
//! - Intent classification
//! - Reminder scheduling (one-shot and interval)
//! - Focus sessions
//! - The conversation router
//! - Task and habit persistence

pub mod assistant;
pub mod focus;
pub mod habits;
pub mod intent;
pub mod reminders;
pub mod tasks;
pub mod temporal;
