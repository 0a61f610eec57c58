use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const API_KEY_MISSING: &str = "API key is missing. Please set it in the .env file.";

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.0-pro";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Reads configuration from the process environment.
    /// `GEMINI_API_KEY` is the only required variable.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::ConfigError(API_KEY_MISSING.to_string()))?;

        Ok(Self {
            gemini_api_key: SecretString::from(api_key),
            gemini_api_base: lookup("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            gemini_model: lookup("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            web_server_host: lookup("WEB_SERVER_HOST")
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            max_upload_bytes: lookup("MAX_UPLOAD_BYTES")
                .and_then(|b| b.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_api_base: "http://127.0.0.1:9".to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_upload_bytes: 1024,
        }
    }
}
