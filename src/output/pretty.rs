use chrono::Duration;
use colored::Colorize;

use crate::features::habits::Habit;
use crate::features::intent::Intent;
use crate::features::tasks::Task;

/// Format a list of tasks as a pretty table
#[must_use]
pub fn format_tasks_pretty(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "Tasks (0 items)\n  No open tasks".to_string();
    }

    let mut output = format!("Tasks ({} items)\n", tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let status_icon = if task.done {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let id = task
            .id
            .map_or_else(|| "-".to_string(), |id| format!("#{id}"));

        let mut line = format!("{} {} {}", status_icon, id.dimmed(), task.subject.bold());

        if let Some(due) = task.due_at {
            line.push_str(&format!(
                "  {}",
                due.format("%Y-%m-%d %H:%M").to_string().yellow()
            ));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a list of habits as a pretty table
#[must_use]
pub fn format_habits_pretty(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return "Habits (0 items)\n  No habits yet".to_string();
    }

    let mut output = format!("Habits ({} items)\n", habits.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for habit in habits {
        let id = habit
            .id
            .map_or_else(|| "-".to_string(), |id| format!("#{id}"));
        let streak = if habit.streak > 0 {
            format!("🔥 {} day streak", habit.streak).cyan().to_string()
        } else {
            "no streak yet".dimmed().to_string()
        };

        output.push_str(&format!(
            "{} {}  {}\n",
            id.dimmed(),
            habit.subject.bold(),
            streak
        ));
    }

    output
}

/// Format a classified intent for humans
#[must_use]
pub fn format_intent_pretty(intent: &Intent) -> String {
    match intent {
        Intent::ExplicitReminder(r) => format!(
            "{}\n  subject: {}\n  schedule: {}",
            "Reminder".green().bold(),
            r.subject,
            r.schedule
        ),
        Intent::ReminderWithoutTime(draft) => format!(
            "{}\n  subject: {}",
            "Reminder (awaiting time)".yellow().bold(),
            draft.raw_text
        ),
        Intent::Task(t) => {
            let due = t.due_at.map_or_else(
                || "none".to_string(),
                |d| d.format("%Y-%m-%d %H:%M").to_string(),
            );
            format!(
                "{}\n  subject: {}\n  due: {}",
                "Task".blue().bold(),
                t.subject,
                due
            )
        }
        Intent::Habit(h) => format!("{}\n  subject: {}", "Habit".cyan().bold(), h.subject),
        Intent::GeneralChat => "Chat".dimmed().to_string(),
        Intent::Unclassified => "Unclassified".dimmed().to_string(),
    }
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}
