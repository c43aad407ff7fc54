//! OpenAI-compatible chat-completions adapter for the generation gateway.

mod client;
mod prompt;

pub use client::{DEFAULT_API_URL, DEFAULT_MODEL, OpenAiGenerator};
