//! Dry-run preview serialization.
//!
//! Renders the assembled master prompt together with the settings snapshot
//! that produced it, for inspection before any API call is made.

use serde::Serialize;

use crate::domain::{AppError, GenerationSettings, master_prompt};

/// Output encoding for a dry-run preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewFormat {
    /// The bare instruction document.
    #[default]
    Text,
    Yaml,
    Json,
}

impl PreviewFormat {
    /// Parse a format from its CLI key.
    pub fn from_key(key: &str) -> Option<PreviewFormat> {
        match key.to_lowercase().as_str() {
            "text" => Some(PreviewFormat::Text),
            "yaml" | "yml" => Some(PreviewFormat::Yaml),
            "json" => Some(PreviewFormat::Json),
            _ => None,
        }
    }
}

/// Serializable preview structure for YAML/JSON output.
#[derive(Debug, Serialize)]
struct PromptPreview {
    idea: String,
    settings: SettingsSummary,
    prompt: String,
}

#[derive(Debug, Serialize)]
struct SettingsSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    tech_stack: Option<Vec<&'static str>>,
    strict_mode: bool,
    add_visuals: bool,
    add_error_handling: bool,
    multi_agent: bool,
    testing: bool,
}

impl SettingsSummary {
    fn from_settings(settings: &GenerationSettings) -> Self {
        let tech_stack = settings
            .include_tech_stack
            .then(|| settings.selected_stack.iter().map(|option| option.label()).collect());

        Self {
            tech_stack,
            strict_mode: settings.strict_mode,
            add_visuals: settings.add_visuals,
            add_error_handling: settings.add_error_handling,
            multi_agent: settings.multi_agent,
            testing: settings.testing,
        }
    }
}

/// Render a dry-run preview of the master prompt for `idea`.
pub fn render_preview(
    idea: &str,
    settings: &GenerationSettings,
    format: PreviewFormat,
) -> Result<String, AppError> {
    let prompt = master_prompt::build(idea, settings);

    match format {
        PreviewFormat::Text => Ok(prompt),
        PreviewFormat::Yaml => {
            let preview = PromptPreview {
                idea: idea.to_string(),
                settings: SettingsSummary::from_settings(settings),
                prompt,
            };
            serde_yaml::to_string(&preview).map_err(|e| AppError::Serialization(e.to_string()))
        }
        PreviewFormat::Json => {
            let preview = PromptPreview {
                idea: idea.to_string(),
                settings: SettingsSummary::from_settings(settings),
                prompt,
            };
            serde_json::to_string_pretty(&preview)
                .map_err(|e| AppError::Serialization(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_keys_parse() {
        assert_eq!(PreviewFormat::from_key("text"), Some(PreviewFormat::Text));
        assert_eq!(PreviewFormat::from_key("YAML"), Some(PreviewFormat::Yaml));
        assert_eq!(PreviewFormat::from_key("json"), Some(PreviewFormat::Json));
        assert_eq!(PreviewFormat::from_key("toml"), None);
    }

    #[test]
    fn text_preview_is_the_bare_prompt() {
        let settings = GenerationSettings::default();

        let preview = render_preview("a todo app", &settings, PreviewFormat::Text).unwrap();

        assert_eq!(preview, master_prompt::build("a todo app", &settings));
    }

    #[test]
    fn yaml_preview_carries_settings_and_stack_labels() {
        let settings = GenerationSettings::default();

        let yaml = render_preview("a todo app", &settings, PreviewFormat::Yaml).unwrap();

        assert!(yaml.contains("idea: a todo app"));
        assert!(yaml.contains("strict_mode: true"));
        assert!(yaml.contains("React 18+"));
    }

    #[test]
    fn disabled_stack_is_omitted_from_preview() {
        let settings = GenerationSettings { include_tech_stack: false, ..Default::default() };

        let yaml = render_preview("a todo app", &settings, PreviewFormat::Yaml).unwrap();

        assert!(!yaml.contains("tech_stack"));
    }

    #[test]
    fn json_preview_round_trips() {
        let settings = GenerationSettings::default();

        let json = render_preview("a todo app", &settings, PreviewFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["idea"], "a todo app");
        assert_eq!(parsed["settings"]["multi_agent"], false);
        assert!(parsed["prompt"].as_str().unwrap().contains("Master Prompt"));
    }
}
