use std::io;

use thiserror::Error;

/// Library-wide error type for vibecoder operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is not set.
    #[error("Environment variable {0} is not set")]
    EnvironmentVariableMissing(String),

    /// Gemini API request failed (transport or provider error).
    #[error("Gemini API error: {message}")]
    GeminiApi { message: String, status: Option<u16> },

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Invalid user input at the CLI boundary.
    #[error("{0}")]
    Validation(String),

    /// Serialization of a preview document failed.
    #[error("Failed to serialize preview: {0}")]
    Serialization(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
