//! Text-generation client port definition.

use crate::domain::AppError;

/// Request for a single model completion.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// System-level instruction document (the assembled master-prompt template).
    pub system_instruction: String,
    /// Single user-turn message.
    pub user_message: String,
    /// Sampling temperature in [0, 1].
    pub temperature: f32,
    /// Provider-side deliberation allowance, opaque beyond its size.
    pub thinking_budget: u32,
}

/// Response from a model completion.
///
/// `text` is `None` when the provider answered without usable text; that is
/// not an error at this boundary.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub text: Option<String>,
}

/// Port for text-generation operations.
pub trait GenerationClient {
    /// Issue exactly one completion request.
    fn generate_content(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError>;
}

/// Mock client for testing without API calls.
#[derive(Debug, Clone, Default)]
pub struct MockGenerationClient;

impl GenerationClient for MockGenerationClient {
    fn generate_content(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        println!("=== MOCK MODE ===");
        println!("Would invoke Gemini with:");
        println!("  Temperature: {}", request.temperature);
        println!("  Thinking budget: {}", request.thinking_budget);
        println!("  User message: {}", request.user_message);
        println!("  System instruction length: {} chars", request.system_instruction.len());

        Ok(GenerationResponse { text: Some("mock master prompt".to_string()) })
    }
}
