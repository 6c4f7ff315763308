//! Interactive assistant session.
//!
//! The session loop is the host pump for the in-memory schedulers: user
//! input is read on a side thread, and whenever the loop is idle it ticks
//! the schedulers so reminders and focus transitions fire on time. All
//! state mutation stays on this thread.

use std::io::BufRead;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use colored::Colorize;

use crate::config::Config;
use crate::core::{ConsoleSink, SystemClock};
use crate::error::NudgeError;
use crate::features::assistant::Assistant;
use crate::features::habits::HabitStore;
use crate::features::tasks::TaskStore;
use crate::output::{format_duration, format_habits_pretty, format_tasks_pretty};

/// How often the idle loop pumps the schedulers.
const TICK_INTERVAL_MS: u64 = 500;

/// Run the interactive session until the user quits or stdin closes.
pub fn chat() -> Result<String, NudgeError> {
    let config = Config::load()?;
    let owner = config.general.owner.clone();
    let mut assistant = Assistant::new(
        Arc::new(SystemClock),
        Arc::new(ConsoleSink),
        TaskStore::new()?,
        HabitStore::new()?,
        &config,
    );

    println!(
        "{}",
        "nudge - type a sentence, or /help for commands, /quit to leave".dimmed()
    );

    // Input is read on a side thread; the assistant itself only ever runs
    // on this one.
    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    loop {
        match rx.recv_timeout(StdDuration::from_millis(TICK_INTERVAL_MS)) {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                if matches!(line.as_str(), "/quit" | "/exit" | "/q") {
                    break;
                }
                let reply = if let Some(command) = line.strip_prefix('/') {
                    handle_command(&mut assistant, &owner, command)?
                } else {
                    assistant.respond(&owner, &line)?
                };
                println!("{reply}");
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                assistant.tick();
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok("Bye. Pending reminders are dropped when the session ends.".to_string())
}

/// Handle a slash command inside the session.
fn handle_command(
    assistant: &mut Assistant,
    owner: &str,
    command: &str,
) -> Result<String, NudgeError> {
    let mut parts = command.split_whitespace();
    let head = parts.next().unwrap_or_default();
    let arg = parts.next().unwrap_or_default();

    match (head, arg) {
        ("help", _) => Ok([
            "/focus start|pause|resume|stop|status",
            "/reminders            list what is armed",
            "/reminder stop        stop the active interval reminder",
            "/tasks                show open tasks",
            "/habits               show habits",
            "/quit                 leave (pending reminders are dropped)",
        ]
        .join("\n")),

        ("focus", "start") => match assistant.focus_mut().start(owner) {
            Ok(status) => Ok(format!(
                "Focus started: {} on the clock.",
                format_duration(status.remaining)
            )),
            Err(e) => Ok(e.to_string()),
        },
        ("focus", "pause") => match assistant.focus_mut().pause(owner) {
            Ok(status) => Ok(format!(
                "Paused with {} remaining.",
                format_duration(status.remaining)
            )),
            Err(e) => Ok(e.to_string()),
        },
        ("focus", "resume") => match assistant.focus_mut().resume(owner) {
            Ok(status) => Ok(format!(
                "Back to it - {} remaining.",
                format_duration(status.remaining)
            )),
            Err(e) => Ok(e.to_string()),
        },
        ("focus", "stop") => match assistant.focus_mut().stop(owner) {
            Ok(active) => Ok(format!("Stopped. {} of focused work.", format_duration(active))),
            Err(e) => Ok(e.to_string()),
        },
        ("focus", "status" | "") => Ok(assistant.focus_mut().status(owner).map_or_else(
            || "No focus session. Start one with /focus start".to_string(),
            |status| {
                format!(
                    "{} - {} elapsed, {} remaining ({} paused)",
                    status.phase,
                    format_duration(status.elapsed),
                    format_duration(status.remaining),
                    format_duration(status.total_paused),
                )
            },
        )),

        ("reminders", _) => {
            let mut lines = Vec::new();
            for pending in assistant.reminders_mut().pending_for(owner) {
                lines.push(format!(
                    "  {} at {}",
                    pending.text,
                    pending.fire_at.format("%Y-%m-%d %H:%M")
                ));
            }
            if let Some(status) = assistant.reminders_mut().interval_status(owner) {
                lines.push(format!(
                    "  {} every {} minutes ({} firings, running {})",
                    status.text,
                    status.interval_minutes,
                    status.firings,
                    format_duration(status.elapsed),
                ));
            }
            if lines.is_empty() {
                Ok("Nothing armed.".to_string())
            } else {
                Ok(format!("Armed:\n{}", lines.join("\n")))
            }
        }
        ("reminder", "stop") => match assistant.reminders_mut().stop_interval(owner) {
            Ok(stopped) => Ok(format!(
                "Stopped \"{}\" after {} firings.",
                stopped.text, stopped.firings
            )),
            Err(e) => Ok(e.to_string()),
        },

        ("tasks", _) => Ok(format_tasks_pretty(&assistant.tasks().list_open(owner)?)),
        ("habits", _) => Ok(format_habits_pretty(&assistant.habits().list(owner)?)),

        _ => Ok(format!("Unknown command /{head}. Try /help.")),
    }
}
