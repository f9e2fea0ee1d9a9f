//! Summary extraction from heterogeneous inference response envelopes.
//!
//! The inference service does not return a single fixed shape. Claude-style
//! invocations return a list of typed content blocks, other model families
//! return the generated text under a top-level string field, and some expose
//! OpenAI-style `choices`. An ordered list of shape matchers probes the
//! parsed body; the first matcher to yield text wins, and a body no matcher
//! recognizes is an explicit error rather than an empty summary.

use serde_json::Value;
use thiserror::Error;

/// Opaque response envelope returned by the inference service.
#[derive(Debug, Clone)]
pub struct ModelResponse {
    body: Vec<u8>,
}

impl ModelResponse {
    pub fn new(body: Vec<u8>) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[derive(Debug, Error)]
pub enum ResponseFormatError {
    #[error("response body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("no recognized summary field in response body")]
    UnrecognizedShape,
}

/// Matchers are tried in order; the first to yield text wins.
const SHAPE_MATCHERS: &[fn(&Value) -> Option<String>] =
    &[direct_text, content_blocks, chat_choices];

/// Top-level fields probed for the summary as a plain string.
const DIRECT_TEXT_FIELDS: &[&str] = &["content", "generation", "completion", "text", "output"];

/// Extract the summary text from a response body.
///
/// Leading and trailing whitespace is stripped. An empty summary is valid
/// output, not an error; only an unparseable or unrecognized body fails.
pub fn parse_summary(response: &ModelResponse) -> Result<String, ResponseFormatError> {
    let body: Value = serde_json::from_slice(response.body())?;
    SHAPE_MATCHERS
        .iter()
        .find_map(|matcher| matcher(&body))
        .map(|text| text.trim().to_string())
        .ok_or(ResponseFormatError::UnrecognizedShape)
}

fn direct_text(body: &Value) -> Option<String> {
    DIRECT_TEXT_FIELDS
        .iter()
        .find_map(|field| Some(body.get(field)?.as_str()?.to_string()))
}

fn content_blocks(body: &Value) -> Option<String> {
    collect_block_text(body.get("content")?.as_array()?)
}

fn chat_choices(body: &Value) -> Option<String> {
    body.get("choices")?.as_array()?.iter().find_map(|choice| {
        if let Some(text) = choice.get("text").and_then(Value::as_str)
            && !text.is_empty()
        {
            return Some(text.to_string());
        }
        match choice.get("message")?.get("content")? {
            Value::String(text) => Some(text.clone()),
            Value::Array(blocks) => collect_block_text(blocks),
            _ => None,
        }
    })
}

/// Pull the text out of a content-block list. Typed `{"type": "text"}`
/// blocks and bare strings both count; other block kinds are skipped.
/// `None` when the list holds nothing textual.
fn collect_block_text(blocks: &[Value]) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for block in blocks {
        match block {
            Value::String(text) => parts.push(text),
            Value::Object(_) => {
                if block.get("type").and_then(Value::as_str) == Some("text")
                    && let Some(text) = block.get("text").and_then(Value::as_str)
                {
                    parts.push(text);
                }
            }
            _ => {}
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_block_text_skips_non_text_blocks() {
        let blocks = vec![
            json!({"type": "thinking", "thinking": "hmm"}),
            json!({"type": "text", "text": "kept"}),
            json!(42),
        ];
        assert_eq!(collect_block_text(&blocks), Some("kept".to_string()));
    }

    #[test]
    fn test_collect_block_text_accepts_bare_strings() {
        let blocks = vec![json!("one"), json!(" two")];
        assert_eq!(collect_block_text(&blocks), Some("one two".to_string()));
    }

    #[test]
    fn test_collect_block_text_empty_list_is_none() {
        assert_eq!(collect_block_text(&[]), None);
    }

    #[test]
    fn test_direct_text_ignores_non_string_fields() {
        let body = json!({"content": [], "generation": "fallback field"});
        assert_eq!(direct_text(&body), Some("fallback field".to_string()));
    }
}
