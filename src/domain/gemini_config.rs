use serde::Deserialize;
use url::Url;

use super::AppError;

/// Gemini API configuration.
///
/// Sampling temperature and thinking budget are fixed by the generation
/// command and intentionally absent here.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiApiConfig {
    /// Generative Language API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model to request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl GeminiApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("api.timeout_secs must be greater than 0"));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("api.model must not be empty"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_timeout() -> u64 {
    60
}
