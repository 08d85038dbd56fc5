use std::io::ErrorKind;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use clap::Args;
use dialoguer::{Error as DialoguerError, Input};

use crate::app::commands::generate::{CONNECTION_ERROR_FALLBACK, EMPTY_RESPONSE_FALLBACK};
use crate::domain::{AppError, GenerationSettings, TechStackOption};
use crate::ports::ClipboardWriter;
use crate::services::{ArboardClipboard, PreviewFormat};

use super::settings_wizard;

/// Floor on apparent generation latency so fast responses do not flash by.
/// Presentation-only: the generation command itself never sleeps.
const MIN_PROCESSING_MS: u64 = 800;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// The raw idea text (prompted interactively when omitted)
    pub idea: Vec<String>,

    /// Comma-separated stack keys to mandate (see `vibecoder stacks`)
    #[arg(short, long, value_delimiter = ',', conflicts_with = "no_stack")]
    pub stack: Option<Vec<String>>,

    /// Omit the tech-stack constraints section
    #[arg(long)]
    pub no_stack: bool,

    /// Drop the strict-typing and defensive-programming directive
    #[arg(long)]
    pub no_strict: bool,

    /// Drop the visual guideline directives
    #[arg(long)]
    pub no_visuals: bool,

    /// Clear the error-handling preference flag
    #[arg(long)]
    pub no_error_handling: bool,

    /// Demand a multi-agent architecture
    #[arg(short, long)]
    pub multi_agent: bool,

    /// Demand a comprehensive testing strategy
    #[arg(short, long)]
    pub testing: bool,

    /// Review every setting interactively before generating
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the assembled instruction document without calling the API
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format for --dry-run: text, yaml, or json
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Skip copying the result to the clipboard
    #[arg(long)]
    pub no_copy: bool,
}

pub(super) fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let format = PreviewFormat::from_key(&args.format).ok_or_else(|| {
        AppError::Validation(format!(
            "Unknown format '{}': expected text, yaml, or json",
            args.format
        ))
    })?;

    let Some(idea) = resolve_idea(&args.idea)? else {
        return Ok(());
    };

    let mut settings = settings_from_args(&args)?;
    if args.interactive {
        settings = match settings_wizard::review(&settings)? {
            Some(value) => value,
            None => return Ok(()),
        };
    }

    if args.dry_run {
        println!("{}", crate::preview(&idea, &settings, format)?);
        return Ok(());
    }

    println!("Generating master prompt...");
    let started = Instant::now();
    let result = crate::generate(Path::new("."), &idea, &settings)?;
    pad_latency(started.elapsed());

    println!("{}", result);

    let failed = result == EMPTY_RESPONSE_FALLBACK || result == CONNECTION_ERROR_FALLBACK;
    if !failed && !args.no_copy {
        copy_to_clipboard(&result);
    }

    Ok(())
}

/// Resolve the idea from trailing args, or prompt for it.
///
/// Explicit blank input is rejected; `None` means the interactive prompt was
/// cancelled.
fn resolve_idea(words: &[String]) -> Result<Option<String>, AppError> {
    if !words.is_empty() {
        let joined = words.join(" ");
        if joined.trim().is_empty() {
            return Err(AppError::Validation("Idea must not be empty.".to_string()));
        }
        return Ok(Some(joined));
    }

    match Input::<String>::new().with_prompt("Your idea").interact_text() {
        Ok(value) if value.trim().is_empty() => {
            Err(AppError::Validation("Idea must not be empty.".to_string()))
        }
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read idea: {}", err))),
    }
}

fn settings_from_args(args: &GenerateArgs) -> Result<GenerationSettings, AppError> {
    let mut settings = GenerationSettings {
        include_tech_stack: !args.no_stack,
        strict_mode: !args.no_strict,
        add_visuals: !args.no_visuals,
        add_error_handling: !args.no_error_handling,
        multi_agent: args.multi_agent,
        testing: args.testing,
        ..GenerationSettings::default()
    };

    if let Some(keys) = &args.stack {
        let mut stack = Vec::with_capacity(keys.len());
        for key in keys {
            let option = TechStackOption::from_key(key).ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown stack option '{}'. Run 'vibecoder stacks' to list the catalog.",
                    key
                ))
            })?;
            stack.push(option);
        }
        settings = settings.with_stack(stack);
    }

    Ok(settings)
}

fn pad_latency(elapsed: Duration) {
    let floor = Duration::from_millis(MIN_PROCESSING_MS);
    if let Some(remaining) = floor.checked_sub(elapsed) {
        thread::sleep(remaining);
    }
}

fn copy_to_clipboard(text: &str) {
    let outcome = ArboardClipboard::new().and_then(|mut clipboard| clipboard.write_text(text));
    match outcome {
        Ok(()) => println!("✅ Copied master prompt to clipboard"),
        Err(err) => eprintln!("⚠️  Could not copy to clipboard: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> GenerateArgs {
        GenerateArgs {
            idea: vec!["a".to_string(), "todo".to_string(), "app".to_string()],
            stack: None,
            no_stack: false,
            no_strict: false,
            no_visuals: false,
            no_error_handling: false,
            multi_agent: false,
            testing: false,
            interactive: false,
            dry_run: false,
            format: "text".to_string(),
            no_copy: false,
        }
    }

    #[test]
    fn idea_words_are_joined_with_spaces() {
        let idea = resolve_idea(&default_args().idea).unwrap();
        assert_eq!(idea.as_deref(), Some("a todo app"));
    }

    #[test]
    fn blank_idea_argument_is_rejected() {
        let result = resolve_idea(&["  ".to_string()]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn default_flags_yield_default_settings() {
        let settings = settings_from_args(&default_args()).unwrap();
        assert_eq!(settings, GenerationSettings::default());
    }

    #[test]
    fn negative_flags_flip_their_settings() {
        let args = GenerateArgs {
            no_stack: true,
            no_strict: true,
            no_visuals: true,
            no_error_handling: true,
            multi_agent: true,
            testing: true,
            ..default_args()
        };

        let settings = settings_from_args(&args).unwrap();

        assert!(!settings.include_tech_stack);
        assert!(!settings.strict_mode);
        assert!(!settings.add_visuals);
        assert!(!settings.add_error_handling);
        assert!(settings.multi_agent);
        assert!(settings.testing);
    }

    #[test]
    fn stack_keys_override_the_default_selection() {
        let args = GenerateArgs {
            stack: Some(vec!["react".to_string(), "d3".to_string()]),
            ..default_args()
        };

        let settings = settings_from_args(&args).unwrap();

        assert_eq!(
            settings.selected_stack,
            vec![TechStackOption::React18, TechStackOption::D3]
        );
    }

    #[test]
    fn unknown_stack_key_is_rejected() {
        let args = GenerateArgs { stack: Some(vec!["angular".to_string()]), ..default_args() };

        let result = settings_from_args(&args);

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
