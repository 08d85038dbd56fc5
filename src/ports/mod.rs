mod clipboard_writer;
mod generation_client;

pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use generation_client::{
    GenerationClient, GenerationRequest, GenerationResponse, MockGenerationClient,
};
