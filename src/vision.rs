use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct VisionMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VisionChoice {
    pub message: VisionMessage,
}

#[derive(Debug, Deserialize)]
pub struct VisionApiResponse {
    pub choices: Vec<VisionChoice>,
}

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum VisionContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub struct VisionMessageRole {
    pub role: String,
    pub content: Vec<VisionContent>,
}

#[derive(Debug, Serialize)]
pub struct OpenAiVisionRequestBody {
    pub model: String,
    pub messages: Vec<VisionMessageRole>,
    pub max_tokens: u32,
}

/// What a successful (HTTP 200) call produced.
///
/// Bodies in the usual chat completion shape are reduced to the answer
/// text; any other well-formed JSON is kept as is.
#[derive(Debug, Clone, PartialEq)]
pub enum VisionResult {
    Message(String),
    Raw(Value),
}

impl VisionResult {
    pub fn from_value(value: Value) -> Self {
        let content = serde_json::from_value::<VisionApiResponse>(value.clone())
            .ok()
            .and_then(|response| response.choices.into_iter().next())
            .and_then(|choice| choice.message.content);

        match content {
            Some(text) => VisionResult::Message(text),
            None => VisionResult::Raw(value),
        }
    }

    pub fn render(&self) -> String {
        match self {
            VisionResult::Message(text) => text.clone(),
            VisionResult::Raw(value) => value.to_string(),
        }
    }
}

/// Error body of a non-200 response. Parsing is best effort: a body that
/// is not JSON becomes an empty object and the raw text is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub parsed: Value,
    pub raw: String,
}

impl ApiErrorBody {
    pub fn parse(raw: String) -> Self {
        let parsed =
            serde_json::from_str(&raw).unwrap_or_else(|_| Value::Object(Default::default()));
        ApiErrorBody { parsed, raw }
    }

    pub fn message(&self) -> Option<&str> {
        self.parsed.pointer("/error/message").and_then(Value::as_str)
    }

    pub fn describe(&self) -> String {
        if let Some(message) = self.message() {
            return message.to_string();
        }
        match &self.parsed {
            Value::Object(map) if map.is_empty() => self.raw.trim().to_string(),
            other => other.to_string(),
        }
    }
}
