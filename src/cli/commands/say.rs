//! One-shot utterance commands.

use std::sync::Arc;

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::core::{Clock, ConsoleSink, SystemClock};
use crate::error::NudgeError;
use crate::features::assistant::Assistant;
use crate::features::habits::HabitStore;
use crate::features::intent::classify;
use crate::features::tasks::TaskStore;
use crate::output::{format_intent, to_json};

/// Route one utterance through the assistant and print the reply.
pub fn say(text: &str, format: OutputFormat) -> Result<String, NudgeError> {
    let config = Config::load()?;
    let owner = config.general.owner.clone();
    let mut assistant = Assistant::new(
        Arc::new(SystemClock),
        Arc::new(ConsoleSink),
        TaskStore::new()?,
        HabitStore::new()?,
        &config,
    );

    let reply = assistant.respond(&owner, text)?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "reply": reply })),
        OutputFormat::Pretty => {
            let mut output = vec![reply];
            // Armed timers die with this process; point at the live host.
            if assistant.next_due().is_some() {
                output.push(
                    "note: reminders fire inside 'nudge chat'; this one-shot invocation is about to exit"
                        .dimmed()
                        .to_string(),
                );
            }
            Ok(output.join("\n"))
        }
    }
}

/// Show how an utterance classifies, without acting on it.
pub fn parse(text: &str, format: OutputFormat) -> Result<String, NudgeError> {
    let intent = classify(text, SystemClock.now());
    format_intent(&intent, format)
}
