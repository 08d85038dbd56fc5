//! CLI Adapter.

mod generate;
mod settings_wizard;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, TechStackOption};

#[derive(Parser)]
#[command(name = "vibecoder")]
#[command(version)]
#[command(
    about = "Transmute rough app ideas into master prompts for AI coding assistants",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a master prompt from a rough idea and copy it to the clipboard
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// List the tech-stack catalog with CLI keys
    #[clap(visible_alias = "st")]
    Stacks,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args),
        Commands::Stacks => run_stacks(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_stacks() -> Result<(), AppError> {
    for option in TechStackOption::ALL {
        println!("{:<14} {}", option.key(), option.label());
    }
    Ok(())
}
