//! Intent classification.
//!
//! Decides what a raw utterance is asking for: a reminder (with or without a
//! resolvable time), a recurring interval reminder, a task, a habit, small
//! talk, or nothing recognizable.

mod classifier;
pub mod lexicon;

pub use classifier::{
    classify, HabitRequest, Intent, PendingReminderDraft, ReminderRequest, TaskRequest,
};
