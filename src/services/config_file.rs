//! Optional `vibecoder.toml` configuration loading.
//!
//! A missing file falls back to compiled defaults; a malformed file is an
//! error rather than a silent fallback.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, GeminiApiConfig};

/// Configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "vibecoder.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    api: Option<GeminiApiConfig>,
}

/// Load Gemini API configuration from `vibecoder.toml` under `dir`.
pub fn load_gemini_config(dir: &Path) -> Result<GeminiApiConfig, AppError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(GeminiApiConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let parsed: ConfigFile = toml::from_str(&content)?;
    let config = parsed.api.unwrap_or_default();
    config.validate()?;

    Ok(config)
}
