//! The conversation router.
//!
//! Classifies each utterance and routes it to the schedulers, the stores,
//! or the chat collaborator, carrying the "awaiting time" state between
//! turns in the per-owner session bag.

mod chat;
mod router;

pub use chat::{CannedChat, ChatBackend};
pub use router::Assistant;
