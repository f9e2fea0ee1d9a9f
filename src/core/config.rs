use std::env;
use std::str::FromStr;

/// Model identifier used when `MODEL_ID` is not set.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-7-sonnet-20250219-v1:0";

/// Character ceiling applied to document text before prompting.
pub const DEFAULT_MAX_DOCUMENT_CHARS: usize = 150_000;

/// Token budget granted to the model for the summary.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4000;

/// Sampling temperature; kept low so summaries stay close to deterministic.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table_name: String,
    pub topic_arn: String,
    pub model_id: String,
    /// Preferred invocation identifier. `None` means the raw model id is
    /// invoked directly and no fallback exists.
    pub inference_profile: Option<String>,
    pub max_document_chars: usize,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            table_name: env::var("TABLE_NAME").map_err(|e| format!("TABLE_NAME: {}", e))?,
            topic_arn: env::var("TOPIC_ARN").map_err(|e| format!("TOPIC_ARN: {}", e))?,
            model_id: env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            inference_profile: env::var("INFERENCE_PROFILE")
                .ok()
                .filter(|value| !value.trim().is_empty()),
            max_document_chars: parse_env("MAX_DOCUMENT_CHARS", DEFAULT_MAX_DOCUMENT_CHARS)?,
            max_output_tokens: parse_env("MAX_OUTPUT_TOKENS", DEFAULT_MAX_OUTPUT_TOKENS)?,
            temperature: parse_env("TEMPERATURE", DEFAULT_TEMPERATURE)?,
        })
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("{key}: invalid value {raw:?}")),
        Err(_) => Ok(default),
    }
}
