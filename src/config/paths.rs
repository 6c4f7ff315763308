//! Path resolution for nudge configuration and data files.
//!
//! All nudge data is stored in `~/.nudge/`:
//! - `config.yaml` - Main configuration file
//! - `nudge.db` - SQLite database for tasks and habits

use std::path::PathBuf;

use crate::error::NudgeError;

/// Paths to nudge configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.nudge/`
    pub root: PathBuf,
    /// Config file: `~/.nudge/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.nudge/nudge.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, NudgeError> {
        let home = std::env::var("HOME")
            .map_err(|_| NudgeError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".nudge");

        Ok(Self {
            config_file: root.join("config.yaml"),
            database: root.join("nudge.db"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("nudge.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), NudgeError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                NudgeError::Config(format!("Failed to create directory {:?}: {}", self.root, e))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".nudge"))
        })
    }
}
