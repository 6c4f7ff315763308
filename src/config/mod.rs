//! Configuration management for nudge.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, FocusConfig, GeneralConfig, SnoozeConfig};
