use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use nudge::cli::args::{Cli, Commands};
use nudge::cli::commands;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Say(args) => commands::say(&args.text, format)?,
        Commands::Parse(args) => commands::parse(&args.text, format)?,
        Commands::Chat => commands::chat()?,
        Commands::Task(args) => commands::task(args.command, format)?,
        Commands::Habit(args) => commands::habit(args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    println!("{output}");
    Ok(())
}
