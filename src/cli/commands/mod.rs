//! Command implementations for the nudge CLI.

mod chat;
mod habit;
mod say;
mod shell;
mod task;

pub use chat::chat;
pub use habit::habit;
pub use say::{parse, say};
pub use shell::completions;
pub use task::task;
