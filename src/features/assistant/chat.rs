//! Open-conversation collaborator.
//!
//! Real deployments plug an LLM in here; the in-process default answers
//! from a small canned table so the rest of the assistant works offline.

/// Produces replies for utterances classified as general chat.
pub trait ChatBackend {
    /// Reply to a conversational message.
    fn reply(&self, owner: &str, text: &str) -> String;
}

/// Canned in-process chat responder.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedChat;

impl ChatBackend for CannedChat {
    fn reply(&self, _owner: &str, text: &str) -> String {
        let lower = text.trim().trim_end_matches(['!', '?', '.']).to_lowercase();
        match lower.as_str() {
            "hi" | "hello" | "hey" | "yo" => "Hello! Ask me to remind you about something, or say 'help'.".to_string(),
            "how are you" | "how's it going" | "hows it going" | "what's up" | "whats up" => {
                "All good here. What can I set up for you?".to_string()
            }
            "who are you" | "what can you do" | "help" => {
                "I turn plain sentences into reminders, tasks, and habits — try 'remind me to stretch in 20 minutes'.".to_string()
            }
            "thanks" | "thank you" => "Anytime!".to_string(),
            "bye" | "goodbye" | "see you" => "See you! Your reminders keep running while this session is open.".to_string(),
            _ => "Noted. I'm best with reminders, tasks, and focus sessions.".to_string(),
        }
    }
}
