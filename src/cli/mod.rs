//! Command-line interface for nudge.

pub mod args;
pub mod commands;
