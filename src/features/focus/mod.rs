//! Pomodoro-style focus sessions.
//!
//! One session per owner, cycling Focus → Break with pause/resume in
//! between. Pause accounting is exact: after any number of cycles the
//! session completes at the originally intended active duration.

mod scheduler;
mod session;

pub use scheduler::{FocusScheduler, FocusStatus, BREAK_MINUTES, FOCUS_MINUTES};
pub use session::{FocusPhase, FocusSession, Stopwatch};
