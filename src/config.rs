use crate::constants::{DEFAULT_TIMEOUT_SECS, GPT4_VISION_MODEL, GPT_API_URL, VISION_MAX_TOKENS};
use crate::error::AnalyzeError;
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: GPT_API_URL.to_string(),
            model: GPT4_VISION_MODEL.to_string(),
            max_tokens: VISION_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    pub fn with_timeout_secs(secs: u64) -> Self {
        Settings {
            timeout: Duration::from_secs(secs),
            ..Settings::default()
        }
    }
}

/// Seeds the process environment from a local `.env` file, if any.
/// The outcome is returned so it can be logged once the logger is up.
pub fn load_dotenv() -> Result<PathBuf, dotenv::Error> {
    dotenv::dotenv()
}

pub fn log_dotenv_outcome(outcome: &Result<PathBuf, dotenv::Error>) {
    match outcome {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(e) => log::debug!("no .env file loaded: {}", e),
    }
}

pub fn resolve_api_key(explicit: &str, fallback: Option<String>) -> Result<String, AnalyzeError> {
    if !explicit.is_empty() {
        return Ok(explicit.to_string());
    }
    match fallback {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(AnalyzeError::MissingApiKey),
    }
}
