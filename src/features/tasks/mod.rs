//! Task capture and persistence.
//!
//! Tasks are dated pieces of work extracted from conversation. Unlike
//! reminders they live in the database, not in the scheduler: nothing fires
//! for a task, it just shows up in lists until marked done.

mod store;
mod types;

pub use store::TaskStore;
pub use types::Task;
