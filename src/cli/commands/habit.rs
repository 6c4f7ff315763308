//! Habit command implementation.

use crate::cli::args::{HabitCommands, OutputFormat};
use crate::config::Config;
use crate::core::{Clock, SystemClock};
use crate::error::NudgeError;
use crate::features::habits::{Habit, HabitStore};
use crate::output::{format_habits, to_json};

/// Execute habit subcommands.
pub fn habit(cmd: HabitCommands, format: OutputFormat) -> Result<String, NudgeError> {
    let config = Config::load()?;
    let owner = config.general.owner;
    let store = HabitStore::new()?;

    match cmd {
        HabitCommands::List => format_habits(&store.list(&owner)?, format),

        HabitCommands::Add { subject } => {
            let mut habit = Habit::new(&owner, &subject, SystemClock.now());
            store.insert(&mut habit)?;

            match format {
                OutputFormat::Json => to_json(&habit),
                OutputFormat::Pretty => Ok(format!(
                    "Tracking habit #{}: {subject}",
                    habit.id.unwrap_or_default()
                )),
            }
        }

        HabitCommands::Check { id } => {
            let updated = store.check_in(id, SystemClock.now())?;
            match format {
                OutputFormat::Json => to_json(&updated),
                OutputFormat::Pretty => Ok(format!(
                    "Checked in: {} ({} day streak)",
                    updated.subject, updated.streak
                )),
            }
        }
    }
}
