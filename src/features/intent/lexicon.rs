//! Word lists and phrase tables backing the intent classifier.
//!
//! Kept as data rather than inline logic so the tables can be tested,
//! extended, and localized on their own.

/// Phrases that explicitly ask for a reminder.
pub const TRIGGER_PHRASES: &[&str] = &[
    "remind me",
    "set a reminder",
    "set reminder",
    "create a reminder",
    "make a reminder",
    "give me a reminder",
    "don't let me forget",
    "dont let me forget",
    "alert me",
    "ping me",
    "nudge me",
];

/// Curated action verbs recognized in task-like utterances.
pub const ACTION_VERBS: &[&str] = &[
    "call", "buy", "send", "email", "text", "write", "meet", "pay", "clean", "finish", "check",
    "review", "submit", "book", "schedule", "pick", "take", "drink", "read", "go", "visit",
    "order", "cook", "wash", "water", "walk", "study", "practice", "renew", "cancel", "prepare",
    "plan", "fix", "start", "stop", "bring", "return", "attend", "sign",
];

/// Suffixes used by the morphological fallback verb detector.
///
/// Only consulted when no curated verb matches; covers gerunds, past forms,
/// and common derivational endings so short informal inputs still register.
pub const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "ify", "ate", "en"];

/// Exact-match greeting, farewell, and direct-question templates.
pub const CHAT_TEMPLATES: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "yo",
    "good morning",
    "good afternoon",
    "good evening",
    "good night",
    "how are you",
    "how's it going",
    "hows it going",
    "what's up",
    "whats up",
    "who are you",
    "what can you do",
    "help",
    "thanks",
    "thank you",
    "ok",
    "okay",
    "bye",
    "goodbye",
    "see you",
];

/// Repetition and self-improvement phrases that signal a habit.
pub const HABIT_PHRASES: &[&str] = &[
    "habit",
    "every day",
    "everyday",
    "daily",
    "each day",
    "every morning",
    "every evening",
    "every night",
];

/// Day-part tokens with their default hour of day.
pub const DAY_PARTS: &[(&str, u32)] = &[
    ("morning", 9),
    ("noon", 12),
    ("afternoon", 14),
    ("evening", 18),
    ("tonight", 21),
    ("night", 21),
];

/// Weekday tokens. Used as temporal gates only; day-of-week resolution is
/// outside the resolver's supported set.
pub const WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Relative-day tokens.
pub const RELATIVE_DAYS: &[&str] = &["today", "tomorrow"];

/// Check whether `phrase` appears in `text` on word boundaries, returning
/// its byte span. Case handling is the caller's concern (pass lowercase).
#[must_use]
pub fn find_phrase(text: &str, phrase: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(offset) = text[from..].find(phrase) {
        let start = from + offset;
        let end = start + phrase.len();

        let boundary_before = start == 0
            || text[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric());
        let boundary_after = end == text.len()
            || text[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());

        if boundary_before && boundary_after {
            return Some((start, end));
        }
        from = start + 1;
    }
    None
}

/// Check whether any phrase from a table appears in `text`.
#[must_use]
pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| find_phrase(text, p).is_some())
}

/// Find the first reminder-trigger phrase, returning its span.
#[must_use]
pub fn find_trigger(text: &str) -> Option<(usize, usize)> {
    TRIGGER_PHRASES
        .iter()
        .filter_map(|p| find_phrase(text, p))
        .min_by_key(|span| span.0)
}

/// Check whether any curated action verb appears as a word.
#[must_use]
pub fn has_action_verb(text: &str) -> bool {
    contains_any(text, ACTION_VERBS)
}

/// Morphological fallback: detect a verb-like word by its ending.
///
/// Only meaningful when `has_action_verb` came up empty. Words shorter than
/// five characters are skipped to keep the false-positive rate down.
#[must_use]
pub fn has_suffix_verb(text: &str) -> bool {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.len() >= 5)
        .any(|w| VERB_SUFFIXES.iter().any(|s| w.ends_with(s)))
}

/// Check for a curated verb first, falling back to suffix detection.
#[must_use]
pub fn has_any_verb(text: &str) -> bool {
    has_action_verb(text) || has_suffix_verb(text)
}

/// Check whether the text carries a habit phrase.
#[must_use]
pub fn has_habit_phrase(text: &str) -> bool {
    contains_any(text, HABIT_PHRASES)
}

/// Find a day-part token, returning its span and default hour.
#[must_use]
pub fn find_day_part(text: &str) -> Option<((usize, usize), u32)> {
    DAY_PARTS
        .iter()
        .filter_map(|&(token, hour)| find_phrase(text, token).map(|span| (span, hour)))
        .min_by_key(|(span, _)| span.0)
}

/// Check for any day-part, weekday, or relative-day token.
#[must_use]
pub fn has_day_token(text: &str) -> bool {
    DAY_PARTS.iter().any(|&(t, _)| find_phrase(text, t).is_some())
        || contains_any(text, WEEKDAYS)
        || contains_any(text, RELATIVE_DAYS)
}

/// Check whether the whole (trimmed, lowercased) text is a chat template.
#[must_use]
pub fn is_chat_template(text: &str) -> bool {
    let trimmed = text.trim().trim_end_matches(['!', '?', '.']);
    CHAT_TEMPLATES.iter().any(|t| *t == trimmed)
}
