//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::NudgeError;

/// Generate completions for the given shell.
pub fn completions(shell: Shell) -> Result<String, NudgeError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "nudge", &mut buf);
    String::from_utf8(buf).map_err(|e| NudgeError::Parse(e.to_string()))
}
