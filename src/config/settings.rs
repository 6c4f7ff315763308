//! Configuration settings for nudge.
//!
//! Settings are loaded from `~/.nudge/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::NudgeError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Focus session settings.
    pub focus: FocusConfig,
    /// Snooze settings.
    pub snooze: SnoozeConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Owner identity used by the CLI surface.
    #[serde(default = "default_owner")]
    pub owner: String,
}

/// Focus session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Focus phase duration in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: i64,
    /// Break phase duration in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: i64,
}

/// Snooze settings for one-shot reminders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnoozeConfig {
    /// Short snooze in minutes.
    #[serde(default = "default_snooze_short")]
    pub short_minutes: i64,
    /// Long snooze in minutes.
    #[serde(default = "default_snooze_long")]
    pub long_minutes: i64,
}

const fn default_focus_minutes() -> i64 {
    crate::features::focus::FOCUS_MINUTES
}

const fn default_break_minutes() -> i64 {
    crate::features::focus::BREAK_MINUTES
}

const fn default_snooze_short() -> i64 {
    crate::features::reminders::SNOOZE_SHORT_MINUTES
}

const fn default_snooze_long() -> i64 {
    crate::features::reminders::SNOOZE_LONG_MINUTES
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

fn default_owner() -> String {
    "local".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            owner: default_owner(),
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for SnoozeConfig {
    fn default() -> Self {
        Self {
            short_minutes: default_snooze_short(),
            long_minutes: default_snooze_long(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Missing files yield the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, NudgeError> {
        let paths = Paths::new()?;
        Self::load_from(&paths)
    }

    /// Load configuration from specific paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(paths: &Paths) -> Result<Self, NudgeError> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&paths.config_file)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Save configuration to specific paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, paths: &Paths) -> Result<(), NudgeError> {
        paths.ensure_dirs()?;
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(&paths.config_file, contents)?;
        Ok(())
    }
}
