//! Task command implementation.

use crate::cli::args::{OutputFormat, TaskCommands};
use crate::config::Config;
use crate::core::{Clock, SystemClock};
use crate::error::NudgeError;
use crate::features::intent::{classify, Intent};
use crate::features::tasks::{Task, TaskStore};
use crate::output::{format_tasks, to_json};

/// Execute task subcommands.
pub fn task(cmd: TaskCommands, format: OutputFormat) -> Result<String, NudgeError> {
    let config = Config::load()?;
    let owner = config.general.owner;
    let store = TaskStore::new()?;

    match cmd {
        TaskCommands::List => format_tasks(&store.list_open(&owner)?, format),

        TaskCommands::Add { text } => {
            let now = SystemClock.now();
            // Reuse the classifier so "finish report tomorrow" gets its due
            // date; anything else is captured verbatim.
            let (subject, due_at) = match classify(&text, now) {
                Intent::Task(request) => (request.subject, request.due_at),
                _ => (text, None),
            };

            let mut task = Task::new(&owner, &subject, due_at, now);
            store.insert(&mut task)?;

            match format {
                OutputFormat::Json => to_json(&task),
                OutputFormat::Pretty => {
                    let id = task.id.unwrap_or_default();
                    let due = due_at.map_or_else(String::new, |d| {
                        format!(" (due {})", d.format("%Y-%m-%d %H:%M"))
                    });
                    Ok(format!("Added task #{id}: {subject}{due}"))
                }
            }
        }

        TaskCommands::Done { id } => {
            store.complete(id)?;
            match format {
                OutputFormat::Json => to_json(&serde_json::json!({ "done": id })),
                OutputFormat::Pretty => Ok(format!("Task #{id} done.")),
            }
        }
    }
}
