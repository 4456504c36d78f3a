use std::time::Duration;

use anyhow::{Context, Result};

pub const API_KEY_VAR: &str = "GOOGLE_GENERATIVE_AI_API_KEY";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Application configuration loaded from environment variables.
///
/// The model credential is optional here: a missing key is reported per request
/// as a configuration error rather than failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub gemini_api_base: String,
    pub model_timeout: Duration,
    pub model_max_retries: u32,
    pub navigator_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env(API_KEY_VAR),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            model_timeout: Duration::from_secs(
                parse_env("MODEL_TIMEOUT_SECS", 30)
                    .context("MODEL_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            model_max_retries: parse_env("MODEL_MAX_RETRIES", 0)
                .context("MODEL_MAX_RETRIES must be a non-negative integer")?,
            navigator_api_url: optional_env("NAVIGATOR_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the model credential, treating a blank value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.google_api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by handler tests: no environment access.
    pub fn for_tests(api_key: Option<&str>) -> Self {
        Config {
            google_api_key: api_key.map(str::to_string),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            model_timeout: Duration::from_secs(30),
            model_max_retries: 0,
            navigator_api_url: DEFAULT_API_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}
