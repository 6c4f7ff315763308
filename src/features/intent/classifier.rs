//! Intent rule cascade.
//!
//! Rules are pure predicate+extractor pairs evaluated in a fixed priority
//! order; the first one that produces an intent wins. The reminder family
//! always outranks task heuristics, so "remind me to call mom" can never
//! degrade into a plain task.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lexicon;
use crate::features::temporal::{resolve, strip_spans, RelativeUnit, TimeExpr, TimeMatch};

/// A classified utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// A reminder with a concrete schedule (one-shot or interval).
    ExplicitReminder(ReminderRequest),
    /// A reminder was asked for but no time could be resolved; the caller
    /// must prompt for one.
    ReminderWithoutTime(PendingReminderDraft),
    /// A dated piece of work, not a notification.
    Task(TaskRequest),
    /// A recurring personal practice.
    Habit(HabitRequest),
    /// Small talk; hand off to the chat collaborator.
    GeneralChat,
    /// Nothing recognizable.
    Unclassified,
}

/// A reminder with its resolved schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderRequest {
    /// What to say when the reminder fires.
    pub subject: String,
    /// When (or how often) to fire.
    pub schedule: TimeExpr,
}

/// A reminder awaiting its time. Held in the session bag until the owner
/// answers or cancels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReminderDraft {
    /// The subject with the trigger phrase stripped.
    pub raw_text: String,
    /// Lowercased, whitespace-collapsed form of the subject.
    pub normalized_text: String,
    /// The utterance exactly as received.
    pub original_text: String,
}

/// A task with an optional due instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// What needs doing.
    pub subject: String,
    /// When it is due, if a temporal expression resolved.
    pub due_at: Option<DateTime<Utc>>,
}

/// A habit to track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRequest {
    /// The practice to repeat.
    pub subject: String,
}

/// Pre-computed view of one utterance, shared by every rule.
struct Utterance<'a> {
    original: &'a str,
    lower: String,
    time: Option<TimeMatch>,
    trigger: Option<(usize, usize)>,
    now: DateTime<Utc>,
}

impl<'a> Utterance<'a> {
    fn analyze(text: &'a str, now: DateTime<Utc>) -> Self {
        let lower = text.trim().to_lowercase();
        Self {
            original: text.trim(),
            time: resolve(text, now),
            trigger: lexicon::find_trigger(&lower),
            lower,
            now,
        }
    }

    /// The semantic payload: the text minus the trigger phrase and the
    /// matched time spans, with a leading "to " dropped.
    fn subject(&self) -> String {
        let mut spans: Vec<(usize, usize)> = self
            .time
            .as_ref()
            .map(|t| t.spans.clone())
            .unwrap_or_default();
        if let Some(trigger) = self.trigger {
            spans.push(trigger);
        }
        spans.sort_unstable();

        let stripped = strip_spans(self.original, &spans);
        let stripped = stripped.strip_prefix("to ").unwrap_or(&stripped);
        stripped.trim_matches([',', '.', '!']).trim().to_string()
    }
}

type Rule = fn(&Utterance<'_>) -> Option<Intent>;

/// The cascade, in priority order. First match wins.
const RULES: &[(&str, Rule)] = &[
    ("interval-reminder", interval_reminder),
    ("triggered-reminder", triggered_reminder),
    ("timed-action-reminder", timed_action_reminder),
    ("reminder-missing-time", reminder_missing_time),
    ("timed-task", timed_task),
    ("habit", habit),
    ("chat-template", chat_template),
];

/// Classify an utterance against the reference instant.
#[must_use]
pub fn classify(text: &str, now: DateTime<Utc>) -> Intent {
    let utterance = Utterance::analyze(text, now);
    for (_, rule) in RULES {
        if let Some(intent) = rule(&utterance) {
            return intent;
        }
    }
    Intent::Unclassified
}

/// Rule 1: recurring-interval phrases become interval reminders outright.
fn interval_reminder(u: &Utterance<'_>) -> Option<Intent> {
    let time = u.time.as_ref()?;
    if !time.expr.is_recurrence() {
        return None;
    }
    Some(Intent::ExplicitReminder(ReminderRequest {
        subject: u.subject(),
        schedule: time.expr,
    }))
}

/// Rule 2: an explicit trigger phrase plus a resolvable time.
fn triggered_reminder(u: &Utterance<'_>) -> Option<Intent> {
    u.trigger?;
    let time = u.time.as_ref()?;
    Some(Intent::ExplicitReminder(ReminderRequest {
        subject: u.subject(),
        schedule: time.expr,
    }))
}

/// Rule 3: an intra-day time next to a catalogued action verb, with no
/// trigger phrase spelled out.
///
/// Covers two shapes: a day token plus a clock time ("tomorrow call mom at
/// 17:30"), and a minute/hour relative offset ("in an hour call mom").
/// Day-granularity expressions without a clock time stay tasks.
fn timed_action_reminder(u: &Utterance<'_>) -> Option<Intent> {
    if u.trigger.is_some() {
        return None;
    }
    let time = u.time.as_ref()?;
    if !lexicon::has_action_verb(&u.lower) {
        return None;
    }

    let clock_with_day = matches!(
        time.expr,
        TimeExpr::ClockTime { .. } | TimeExpr::Named { time: Some(_), .. }
    ) && lexicon::has_day_token(&u.lower);
    let intra_day_offset = matches!(
        time.expr,
        TimeExpr::Relative {
            unit: RelativeUnit::Minute | RelativeUnit::Hour,
            ..
        }
    );
    if !clock_with_day && !intra_day_offset {
        return None;
    }

    Some(Intent::ExplicitReminder(ReminderRequest {
        subject: u.subject(),
        schedule: time.expr,
    }))
}

/// Rule 4: a trigger phrase with no resolvable time. Never reclassified as
/// a task; the caller prompts for a time instead.
fn reminder_missing_time(u: &Utterance<'_>) -> Option<Intent> {
    u.trigger?;
    if u.time.is_some() {
        return None;
    }
    let raw = u.subject();
    Some(Intent::ReminderWithoutTime(PendingReminderDraft {
        normalized_text: raw.to_lowercase(),
        raw_text: raw,
        original_text: u.original.to_string(),
    }))
}

/// Rule 5: no trigger phrase, but a temporal signal next to a verb.
///
/// The curated verb list is consulted first; the suffix detector only runs
/// when it comes up empty. Two-word inputs without any verb are noise.
fn timed_task(u: &Utterance<'_>) -> Option<Intent> {
    // A recurrence phrase belongs to the habit rule, not a due date.
    if lexicon::has_habit_phrase(&u.lower) {
        return None;
    }

    let has_time_signal = u.time.is_some() || lexicon::has_day_token(&u.lower);
    if !has_time_signal {
        return None;
    }
    // Short inputs are noise unless a verb is present; longer ones still
    // need a verb for the temporal keyword to attach to.
    if !lexicon::has_any_verb(&u.lower) {
        return None;
    }

    let due_at = u.time.as_ref().map_or_else(
        || day_part_due(u),
        |time| task_due(&time.expr, u.now),
    );

    Some(Intent::Task(TaskRequest {
        subject: u.subject(),
        due_at,
    }))
}

/// Rule 6: repetition and self-improvement phrases.
fn habit(u: &Utterance<'_>) -> Option<Intent> {
    if !lexicon::has_habit_phrase(&u.lower) {
        return None;
    }
    let mut spans: Vec<(usize, usize)> = lexicon::HABIT_PHRASES
        .iter()
        .filter_map(|p| lexicon::find_phrase(&u.lower, p))
        .collect();
    spans.sort_unstable();
    spans.dedup();

    let subject = strip_spans(u.original, &spans)
        .trim_matches([',', '.', '!'])
        .trim()
        .to_string();
    Some(Intent::Habit(HabitRequest {
        subject: if subject.is_empty() {
            u.original.to_string()
        } else {
            subject
        },
    }))
}

/// Rule 7: exact greeting/farewell/direct-question templates.
fn chat_template(u: &Utterance<'_>) -> Option<Intent> {
    if !lexicon::is_chat_template(&u.lower) {
        return None;
    }
    if u.time.is_some() || lexicon::has_action_verb(&u.lower) {
        return None;
    }
    Some(Intent::GeneralChat)
}

/// Due instant for a task. Day-granularity expressions land on the default
/// hour; clock-level expressions keep their exact instant.
fn task_due(expr: &TimeExpr, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    use crate::features::temporal::DEFAULT_HOUR;

    let instant = expr.resolve_instant(now)?;
    let day_granularity = match expr {
        TimeExpr::Relative { unit, .. } => !matches!(unit, RelativeUnit::Minute | RelativeUnit::Hour),
        TimeExpr::Named { time, .. } => time.is_none(),
        _ => false,
    };

    if day_granularity {
        instant
            .date_naive()
            .and_hms_opt(DEFAULT_HOUR, 0, 0)
            .map(|dt| dt.and_utc())
    } else {
        Some(instant)
    }
}

/// Due instant from a bare day-part token ("tonight", "evening").
fn day_part_due(u: &Utterance<'_>) -> Option<DateTime<Utc>> {
    let (_, hour) = lexicon::find_day_part(&u.lower)?;
    let expr = TimeExpr::ClockTime { hour, minute: 0 };
    expr.resolve_instant(u.now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::temporal::{IntervalUnit, NamedDay};
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).single().unwrap()
    }

    fn reminder(intent: &Intent) -> &ReminderRequest {
        match intent {
            Intent::ExplicitReminder(r) => r,
            other => panic!("expected ExplicitReminder, got {other:?}"),
        }
    }

    // ====================
    // Reminder Family
    // ====================

    #[test]
    fn test_interval_reminder() {
        let intent = classify("remind me to drink water every 30 minutes", noon());
        let r = reminder(&intent);
        assert_eq!(r.subject, "drink water");
        assert_eq!(
            r.schedule,
            TimeExpr::Interval {
                amount: 30,
                unit: IntervalUnit::Minute
            }
        );
    }

    #[test]
    fn test_interval_without_trigger() {
        let intent = classify("stretch every hour", noon());
        let r = reminder(&intent);
        assert_eq!(r.subject, "stretch");
        assert!(r.schedule.is_recurrence());
    }

    #[test]
    fn test_one_shot_with_clock_time() {
        let intent = classify("remind me to buy milk at 17:30", noon());
        let r = reminder(&intent);
        assert_eq!(r.subject, "buy milk");
        assert_eq!(
            r.schedule,
            TimeExpr::ClockTime {
                hour: 17,
                minute: 30
            }
        );
    }

    #[test]
    fn test_one_shot_with_relative_offset() {
        let intent = classify("in an hour call mom", noon());
        let r = reminder(&intent);
        assert_eq!(r.subject, "call mom");
        assert!(matches!(r.schedule, TimeExpr::Relative { amount: 1, .. }));
    }

    #[test]
    fn test_one_shot_with_named_day() {
        let intent = classify("remind me to call mom tomorrow", noon());
        let r = reminder(&intent);
        assert_eq!(r.subject, "call mom");
        assert_eq!(
            r.schedule,
            TimeExpr::Named {
                day: NamedDay::Tomorrow,
                time: None
            }
        );
    }

    #[test]
    fn test_day_token_verb_and_clock_without_trigger() {
        let intent = classify("tomorrow call mom at 17:30", noon());
        let r = reminder(&intent);
        assert_eq!(r.subject, "call mom");
        assert_eq!(
            r.schedule,
            TimeExpr::Named {
                day: NamedDay::Tomorrow,
                time: Some((17, 30))
            }
        );
    }

    #[test]
    fn test_trigger_without_time_prompts() {
        let intent = classify("remind me to call mom", noon());
        match intent {
            Intent::ReminderWithoutTime(draft) => {
                assert_eq!(draft.raw_text, "call mom");
                assert_eq!(draft.normalized_text, "call mom");
                assert_eq!(draft.original_text, "remind me to call mom");
            }
            other => panic!("expected ReminderWithoutTime, got {other:?}"),
        }
    }

    #[test]
    fn test_trigger_never_degrades_to_task() {
        // "call" is a curated verb and "tomorrow" a day token, but the
        // trigger keeps this in the reminder family.
        let intent = classify("remind me about the call tomorrow", noon());
        assert!(matches!(intent, Intent::ExplicitReminder(_)));
    }

    // ======
    // Tasks
    // ======

    #[test]
    fn test_task_from_named_day() {
        let intent = classify("tomorrow call mom", noon());
        match intent {
            Intent::Task(task) => {
                assert_eq!(task.subject, "call mom");
                let due = task.due_at.unwrap();
                assert_eq!(due.date_naive(), noon().date_naive() + Duration::days(1));
                assert_eq!(due.time().format("%H:%M").to_string(), "09:00");
            }
            other => panic!("expected Task, got {other:?}"),
        }
    }

    #[test]
    fn test_task_from_numeric_relative_days() {
        let intent = classify("meeting in 2 days", noon());
        match intent {
            Intent::Task(task) => {
                assert_eq!(task.subject, "meeting");
                let due = task.due_at.unwrap();
                assert_eq!(due.date_naive(), noon().date_naive() + Duration::days(2));
                assert_eq!(due.time().format("%H:%M").to_string(), "09:00");
            }
            other => panic!("expected Task, got {other:?}"),
        }
    }

    #[test]
    fn test_task_from_day_part() {
        let intent = classify("finish the report tonight", noon());
        match intent {
            Intent::Task(task) => {
                assert!(task.subject.contains("finish the report"));
                let due = task.due_at.unwrap();
                assert_eq!(due.time().format("%H:%M").to_string(), "21:00");
            }
            other => panic!("expected Task, got {other:?}"),
        }
    }

    #[test]
    fn test_short_input_without_verb_is_not_a_task() {
        let intent = classify("tomorrow gym", noon());
        assert!(!matches!(intent, Intent::Task(_)));
    }

    #[test]
    fn test_short_input_with_verb_is_a_task() {
        let intent = classify("call tomorrow", noon());
        assert!(matches!(intent, Intent::Task(_)));
    }

    // =======
    // Habits
    // =======

    #[test]
    fn test_habit_every_day() {
        let intent = classify("drink water every day", noon());
        match intent {
            Intent::Habit(h) => assert_eq!(h.subject, "drink water"),
            other => panic!("expected Habit, got {other:?}"),
        }
    }

    #[test]
    fn test_habit_keyword() {
        let intent = classify("build a reading habit", noon());
        assert!(matches!(intent, Intent::Habit(_)));
    }

    #[test]
    fn test_interval_is_not_a_habit() {
        let intent = classify("drink water every 30 minutes", noon());
        assert!(matches!(intent, Intent::ExplicitReminder(_)));
    }

    // ===========
    // Chat & Noise
    // ===========

    #[test]
    fn test_greetings() {
        assert_eq!(classify("hello", noon()), Intent::GeneralChat);
        assert_eq!(classify("how are you?", noon()), Intent::GeneralChat);
        assert_eq!(classify("thanks", noon()), Intent::GeneralChat);
    }

    #[test]
    fn test_template_with_extra_words_is_not_chat() {
        assert_ne!(
            classify("hello can you remind me to stretch", noon()),
            Intent::GeneralChat
        );
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(classify("purple monkey dishwasher", noon()), Intent::Unclassified);
        assert_eq!(classify("", noon()), Intent::Unclassified);
    }
}
