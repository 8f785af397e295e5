pub const GPT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const GPT4_VISION_MODEL: &str = "gpt-4-turbo";
pub const VISION_MAX_TOKENS: u32 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

// Always jpeg, whatever the file actually holds.
pub const IMAGE_MIME: &str = "image/jpeg";

pub const SUCCESS_LABEL: &str = "GPT Vision response:";
pub const ENCODE_ERROR_LABEL: &str = "Error encoding image:";
pub const API_ERROR_LABEL: &str = "Error calling GPT Vision API:";
