use crate::constants::{API_ERROR_LABEL, ENCODE_ERROR_LABEL};
use crate::vision::ApiErrorBody;
use reqwest::{header::InvalidHeaderValue, StatusCode};
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("API key is required. Provide it via the --apikey flag or set OPENAI_API_KEY in the .env file.")]
    MissingApiKey,
    #[error("API key cannot be sent as a header value: {0}")]
    InvalidApiKey(#[source] InvalidHeaderValue),
    #[error("Image path and user prompt are required")]
    MissingArguments,
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("error from API ({status}): {}", .body.describe())]
    Api { status: StatusCode, body: ApiErrorBody },
    #[error("response was not valid JSON: {0}")]
    ResponseParse(#[source] serde_json::Error),
    #[error("request cancelled")]
    Cancelled,
}

impl AnalyzeError {
    /// Prefix naming the stage that failed. Credential and argument
    /// errors carry a complete sentence and have none.
    pub fn stage_label(&self) -> Option<&'static str> {
        match self {
            AnalyzeError::MissingApiKey
            | AnalyzeError::InvalidApiKey(_)
            | AnalyzeError::MissingArguments => None,
            AnalyzeError::Io { .. } => Some(ENCODE_ERROR_LABEL),
            AnalyzeError::Serialization(_)
            | AnalyzeError::Transport(_)
            | AnalyzeError::Api { .. }
            | AnalyzeError::ResponseParse(_)
            | AnalyzeError::Cancelled => Some(API_ERROR_LABEL),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            AnalyzeError::MissingApiKey | AnalyzeError::InvalidApiKey(_) => 3,
            AnalyzeError::MissingArguments => 4,
            AnalyzeError::Io { .. } => 5,
            AnalyzeError::Serialization(_) => 6,
            AnalyzeError::Transport(_) => 7,
            AnalyzeError::Api { .. } => 8,
            AnalyzeError::ResponseParse(_) => 9,
            AnalyzeError::Cancelled => 130,
        }
    }
}
