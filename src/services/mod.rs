pub mod clipboard_arboard;
pub mod config_file;
pub mod gemini_client_http;
pub mod prompt_export;

pub use clipboard_arboard::ArboardClipboard;
pub use gemini_client_http::HttpGeminiClient;
pub use prompt_export::PreviewFormat;
