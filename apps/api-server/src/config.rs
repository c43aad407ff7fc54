//! Application configuration loaded from environment variables.

use std::env;

use cadence_infra::llm::{DEFAULT_API_URL, DEFAULT_MODEL};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_api_url: String,
    /// When set, the calendar snapshot persists to this file across
    /// restarts; otherwise it lives in memory only.
    pub snapshot_path: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            openai_api_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            snapshot_path: env::var("SNAPSHOT_PATH").ok(),
        }
    }
}
