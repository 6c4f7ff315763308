//! Storage layer for nudge.
//!
//! This module provides SQLite-based persistence for tasks and habits.
//! Reminder and focus timers are deliberately not stored here: the
//! in-memory schedulers are authoritative for what will fire, and a process
//! restart drops them by design.

mod database;
mod migrations;

pub use database::Database;
