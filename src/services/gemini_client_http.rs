//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeminiApiConfig};
use crate::ports::{GenerationClient, GenerationRequest, GenerationResponse};

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// HTTP transport for the Generative Language `generateContent` endpoint.
///
/// This client performs a single request per call; there is no retry layer.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let endpoint = endpoint_url(&config.api_url, &config.model)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::GeminiApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, endpoint, client })
    }

    /// Create from the `GEMINI_API_KEY` environment variable with default configuration.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_with_config(&GeminiApiConfig::default())
    }

    /// Create from the `GEMINI_API_KEY` environment variable with custom configuration.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AppError::EnvironmentVariableMissing("GEMINI_API_KEY".into()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest) -> Result<GenerationResponse, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::GeminiApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::GeminiApi {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            log::debug!(
                "Gemini responded with {} candidate(s)",
                api_response.candidates.len()
            );

            return Ok(GenerationResponse { text: api_response.into_text() });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::GeminiApi { message, status: Some(status.as_u16()) })
    }
}

fn endpoint_url(api_url: &Url, model: &str) -> Result<Url, AppError> {
    let raw = format!("{}/models/{}:generateContent", api_url.as_str().trim_end_matches('/'), model);
    Url::parse(&raw).map_err(|e| AppError::GeminiApi {
        message: format!("Invalid API endpoint for model '{}': {}", model, e),
        status: None,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    system_instruction: InstructionContent,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct InstructionContent {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl ApiResponse {
    /// Concatenated text of the first candidate, or `None` when the provider
    /// answered without usable text.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String =
            content.parts.into_iter().filter_map(|part| part.text).collect::<Vec<_>>().join("");

        if text.is_empty() { None } else { Some(text) }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl GenerationClient for HttpGeminiClient {
    fn generate_content(&self, request: GenerationRequest) -> Result<GenerationResponse, AppError> {
        let api_request = ApiRequest {
            system_instruction: InstructionContent {
                parts: vec![Part { text: request.system_instruction }],
            },
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: request.user_message }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                thinking_config: ThinkingConfig { thinking_budget: request.thinking_budget },
            },
        };

        self.send_request(&api_request)
    }
}
