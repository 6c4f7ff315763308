use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "nudge")]
#[command(about = "A conversational reminder and focus assistant")]
#[command(long_about = "nudge - A conversational reminder and focus assistant

Turns plain sentences into reminders, tasks, and habits, and runs
Pomodoro-style focus sessions.

QUICK START:
  nudge chat                                  Start an interactive session
  nudge say \"remind me to stretch at 15:00\"   Route one utterance
  nudge parse \"call mom tomorrow\"             Show how a sentence classifies
  nudge task list                             List open tasks

Reminders and focus timers live in memory: they fire while 'nudge chat'
is running and are dropped when the process exits.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  nudge <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Route one utterance through the assistant
    ///
    /// Classifies the text and performs the resulting action: scheduling a
    /// reminder, capturing a task or habit, or replying conversationally.
    ///
    /// # Examples
    ///
    ///   nudge say "remind me to buy milk at 17:30"
    ///   nudge say "meeting in 2 days"
    ///   nudge say "drink water every day"
    ///
    /// Scheduled reminders only fire inside 'nudge chat'; from here the
    /// command reports what would fire.
    #[command(alias = "s")]
    Say(SayArgs),

    /// Show how an utterance classifies, without acting on it
    ///
    /// Prints the detected intent and any resolved time expression.
    /// Useful for debugging phrasing.
    ///
    /// # Examples
    ///
    ///   nudge parse "remind me to call mom"
    ///   nudge parse "in an hour call mom" -o json
    #[command(alias = "p")]
    Parse(SayArgs),

    /// Start an interactive assistant session
    ///
    /// Reads utterances line by line and pumps the schedulers while idle,
    /// so reminders and focus transitions fire at the right instant.
    ///
    /// Slash commands available inside the session:
    ///
    ///   /focus start|pause|resume|stop|status
    ///   /reminders            List what is armed
    ///   /reminder stop        Stop the active interval reminder
    ///   /tasks  /habits       Show stored items
    ///   /help   /quit
    #[command(alias = "c")]
    Chat,

    /// Manage captured tasks
    #[command(alias = "t")]
    Task(TaskArgs),

    /// Manage tracked habits
    #[command(alias = "h")]
    Habit(HabitArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   nudge completions bash > /etc/bash_completion.d/nudge
    ///   nudge completions zsh > ~/.zfunc/_nudge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for say/parse.
#[derive(Args)]
pub struct SayArgs {
    /// The utterance to process
    pub text: String,
}

/// Task subcommands.
#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List open tasks
    #[command(alias = "ls")]
    List,
    /// Capture a task from natural language
    ///
    /// # Examples
    ///
    ///   nudge task add "finish report tomorrow"
    ///   nudge task add "meeting in 2 days"
    Add {
        /// Natural language description
        text: String,
    },
    /// Mark a task as done
    Done {
        /// Task ID (from 'nudge task list')
        id: i64,
    },
}

/// Habit subcommands.
#[derive(Args)]
pub struct HabitArgs {
    #[command(subcommand)]
    pub command: HabitCommands,
}

#[derive(Subcommand)]
pub enum HabitCommands {
    /// List habits with their streaks
    #[command(alias = "ls")]
    List,
    /// Track a new habit
    Add {
        /// The practice to repeat
        subject: String,
    },
    /// Check a habit in for today
    Check {
        /// Habit ID (from 'nudge habit list')
        id: i64,
    },
}
