//! Classify-and-route glue.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::error;

use super::chat::{CannedChat, ChatBackend};
use crate::config::Config;
use crate::core::{Clock, DeliverySink, SessionBag};
use crate::error::NudgeError;
use crate::features::focus::FocusScheduler;
use crate::features::habits::{Habit, HabitStore};
use crate::features::intent::{classify, Intent, PendingReminderDraft};
use crate::features::reminders::ReminderScheduler;
use crate::features::tasks::{Task, TaskStore};
use crate::features::temporal::{resolve, TimeExpr};
use crate::output::format_duration;

// Session bag keys owned by the reminder flow. Everything else in the bag
// is none of our concern.
const KEY_PENDING_REMINDER: &str = "reminder.pending";
const KEY_AWAITING_TIME: &str = "reminder.awaiting_time";
const KEY_PENDING_HOUR: &str = "reminder.hour";

/// The conversational assistant: owns the schedulers, the stores, and one
/// session bag per owner.
pub struct Assistant {
    clock: Arc<dyn Clock>,
    reminders: ReminderScheduler,
    focus: FocusScheduler,
    tasks: TaskStore,
    habits: HabitStore,
    chat: Box<dyn ChatBackend>,
    bags: HashMap<String, SessionBag>,
}

impl Assistant {
    /// Build an assistant from injected collaborators and configuration.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        sink: Arc<dyn DeliverySink>,
        tasks: TaskStore,
        habits: HabitStore,
        config: &Config,
    ) -> Self {
        let focus = FocusScheduler::with_durations(
            clock.clone(),
            sink.clone(),
            chrono::Duration::minutes(config.focus.focus_minutes),
            chrono::Duration::minutes(config.focus.break_minutes),
        );
        Self {
            reminders: ReminderScheduler::new(clock.clone(), sink),
            focus,
            clock,
            tasks,
            habits,
            chat: Box::new(CannedChat),
            bags: HashMap::new(),
        }
    }

    /// Swap in a different chat collaborator.
    pub fn set_chat_backend(&mut self, chat: Box<dyn ChatBackend>) {
        self.chat = chat;
    }

    /// The reminder scheduler, for host commands.
    pub fn reminders_mut(&mut self) -> &mut ReminderScheduler {
        &mut self.reminders
    }

    /// The focus scheduler, for host commands.
    pub fn focus_mut(&mut self) -> &mut FocusScheduler {
        &mut self.focus
    }

    /// The task store.
    #[must_use]
    pub const fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    /// The habit store.
    #[must_use]
    pub const fn habits(&self) -> &HabitStore {
        &self.habits
    }

    /// Pump both schedulers. Returns the number of deliveries attempted.
    pub fn tick(&mut self) -> usize {
        self.reminders.tick() + self.focus.tick()
    }

    /// The next instant anything is due, for host pump pacing.
    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        match (self.reminders.next_due(), self.focus.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Handle one utterance and produce a reply.
    ///
    /// Classification and scheduling problems become corrective guidance in
    /// the reply; only infrastructure failures (storage) surface as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if a store operation fails.
    pub fn respond(&mut self, owner: &str, text: &str) -> Result<String, NudgeError> {
        let now = self.clock.now();

        if self.bag(owner).flag(KEY_AWAITING_TIME) {
            return Ok(self.answer_pending_time(owner, text, now));
        }

        match classify(text, now) {
            Intent::ExplicitReminder(request) => {
                Ok(self.schedule_reminder(owner, &request.subject, request.schedule, now))
            }
            Intent::ReminderWithoutTime(draft) => Ok(self.hold_for_time(owner, &draft)),
            Intent::Task(request) => {
                let mut task = Task::new(owner, &request.subject, request.due_at, now);
                self.tasks.insert(&mut task)?;
                let due = request.due_at.map_or_else(String::new, |d| {
                    format!(" (due {})", d.format("%Y-%m-%d %H:%M"))
                });
                Ok(format!("Added task: {}{due}", request.subject))
            }
            Intent::Habit(request) => {
                let mut habit = Habit::new(owner, &request.subject, now);
                self.habits.insert(&mut habit)?;
                Ok(format!(
                    "Tracking habit: {}. Check in daily to build the streak.",
                    request.subject
                ))
            }
            Intent::GeneralChat => Ok(self.chat.reply(owner, text)),
            Intent::Unclassified => Ok(
                "I didn't catch that. Try 'remind me to <thing> at HH:MM', 'in N minutes', or 'every N minutes'."
                    .to_string(),
            ),
        }
    }

    fn bag(&mut self, owner: &str) -> &mut SessionBag {
        self.bags.entry(owner.to_string()).or_default()
    }

    /// Stash the draft and ask for a time.
    fn hold_for_time(&mut self, owner: &str, draft: &PendingReminderDraft) -> String {
        let bag = self.bag(owner);
        if let Err(e) = bag.set_json(KEY_PENDING_REMINDER, draft) {
            error!(error = %e, "failed to stash reminder draft");
            return "Something went wrong on my side. Please try again.".to_string();
        }
        bag.set_flag(KEY_AWAITING_TIME, true);
        format!(
            "When should I remind you about \"{}\"? Specify a time as HH:MM or 'in N minutes'.",
            draft.raw_text
        )
    }

    /// Handle the reply to a time prompt.
    fn answer_pending_time(&mut self, owner: &str, text: &str, now: DateTime<Utc>) -> String {
        let trimmed = text.trim().to_lowercase();
        if matches!(trimmed.as_str(), "cancel" | "never mind" | "nevermind" | "forget it") {
            self.clear_pending(owner);
            return "Okay, dropped that reminder.".to_string();
        }

        let draft: PendingReminderDraft = match self.bag(owner).get_json(KEY_PENDING_REMINDER) {
            Ok(Some(draft)) => draft,
            Ok(None) | Err(_) => {
                // The draft vanished; recover by dropping the flag.
                self.clear_pending(owner);
                return "I lost track of that reminder. Please start over.".to_string();
            }
        };

        if let Some(time) = resolve(text, now) {
            self.clear_pending(owner);
            return self.schedule_reminder(owner, &draft.raw_text, time.expr, now);
        }

        // Bare numbers walk the hour-then-minute selection.
        if let Ok(number) = trimmed.parse::<u32>() {
            let pending_hour = self
                .bag(owner)
                .get(KEY_PENDING_HOUR)
                .and_then(|h| h.parse::<u32>().ok());

            match pending_hour {
                None if number <= 23 => {
                    self.bag(owner).set(KEY_PENDING_HOUR, number.to_string());
                    return format!("{number}:what? Give me the minutes (0-59).");
                }
                Some(hour) if number <= 59 => {
                    self.clear_pending(owner);
                    let expr = TimeExpr::ClockTime {
                        hour,
                        minute: number,
                    };
                    return self.schedule_reminder(owner, &draft.raw_text, expr, now);
                }
                _ => {}
            }
        }

        "I still need a time. Specify it as HH:MM or 'in N minutes', or say 'cancel'.".to_string()
    }

    fn clear_pending(&mut self, owner: &str) {
        let bag = self.bag(owner);
        bag.remove(KEY_PENDING_REMINDER);
        bag.remove(KEY_PENDING_HOUR);
        bag.set_flag(KEY_AWAITING_TIME, false);
    }

    /// Arm the scheduler for a resolved expression and phrase the reply.
    fn schedule_reminder(
        &mut self,
        owner: &str,
        subject: &str,
        expr: TimeExpr,
        now: DateTime<Utc>,
    ) -> String {
        if let Some(minutes) = expr.interval_minutes() {
            return match self.reminders.start_interval(owner, subject, minutes) {
                Ok(_) => format!("Okay, I'll remind you to {subject} every {minutes} minutes."),
                // Conflicts and bad intervals become corrective guidance.
                Err(e) => e.to_string(),
            };
        }

        let Some(fire_at) = expr.resolve_instant(now) else {
            return "I couldn't make sense of that time. Try HH:MM or 'in N minutes'.".to_string();
        };

        self.reminders.schedule_one_shot(owner, subject, fire_at);
        let lead = format_duration(fire_at - now);
        format!(
            "Okay, I'll remind you to {subject} at {} (in {lead}).",
            fire_at.format("%Y-%m-%d %H:%M")
        )
    }
}
