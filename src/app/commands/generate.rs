//! Master-prompt generation command.
//!
//! Wraps the prompt builder in a single completion request and always
//! resolves to displayable text. Transport and provider failures are logged
//! here and converted to fixed fallback messages; they never cross this
//! boundary as errors.

use crate::domain::{GenerationSettings, master_prompt};
use crate::ports::{GenerationClient, GenerationRequest};

/// Fixed sampling temperature for master-prompt generation.
const TEMPERATURE: f32 = 0.7;

/// Fixed provider-side deliberation allowance.
const THINKING_BUDGET: u32 = 2048;

/// The single user-turn message accompanying the system instruction.
const USER_MESSAGE: &str = "Generate the Master Prompt now.";

/// Shown when the provider answered without usable text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Failed to generate prompt. Please try again.";

/// Shown when the request could not be completed at all.
pub const CONNECTION_ERROR_FALLBACK: &str =
    "Error connecting to Gemini API. Please check your API key and try again.";

/// Generate an enhanced master prompt for `raw_idea`.
///
/// An idea that is empty after trimming short-circuits to an empty string
/// without contacting the provider. Otherwise exactly one request is issued;
/// there are no retries.
pub fn execute(
    client: &dyn GenerationClient,
    raw_idea: &str,
    settings: &GenerationSettings,
) -> String {
    if raw_idea.trim().is_empty() {
        return String::new();
    }

    let request = GenerationRequest {
        system_instruction: master_prompt::build(raw_idea, settings),
        user_message: USER_MESSAGE.to_string(),
        temperature: TEMPERATURE,
        thinking_budget: THINKING_BUDGET,
    };

    match client.generate_content(request) {
        Ok(response) => match response.text {
            Some(text) if !text.is_empty() => text,
            _ => EMPTY_RESPONSE_FALLBACK.to_string(),
        },
        Err(error) => {
            log::error!("Gemini API error: {}", error);
            CONNECTION_ERROR_FALLBACK.to_string()
        }
    }
}
