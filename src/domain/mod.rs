pub mod error;
pub mod gemini_config;
pub mod master_prompt;
pub mod settings;
pub mod tech_stack;

pub use error::AppError;
pub use gemini_config::GeminiApiConfig;
pub use settings::GenerationSettings;
pub use tech_stack::TechStackOption;
