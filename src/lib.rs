//! vibecoder: Transmute rough app ideas into master prompts for AI coding assistants.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

pub use domain::{AppError, GenerationSettings, TechStackOption};
pub use services::PreviewFormat;

use services::HttpGeminiClient;

/// Render the assembled instruction document without contacting the API.
///
/// `format` selects between the bare prompt text and a YAML/JSON document
/// that also carries the settings snapshot.
pub fn preview(
    raw_idea: &str,
    settings: &GenerationSettings,
    format: PreviewFormat,
) -> Result<String, AppError> {
    services::prompt_export::render_preview(raw_idea, settings, format)
}

/// Generate an enhanced master prompt via the Gemini API.
///
/// Reads `vibecoder.toml` from `dir` when present and the `GEMINI_API_KEY`
/// environment variable. An error is returned only for setup problems
/// (missing key, malformed configuration); once a request is issued, failures
/// surface as fixed fallback text in the returned string.
pub fn generate(
    dir: &Path,
    raw_idea: &str,
    settings: &GenerationSettings,
) -> Result<String, AppError> {
    if raw_idea.trim().is_empty() {
        return Ok(String::new());
    }

    let config = services::config_file::load_gemini_config(dir)?;
    let client = HttpGeminiClient::from_env_with_config(&config)?;

    Ok(app::commands::generate::execute(&client, raw_idea, settings))
}
