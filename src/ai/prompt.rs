//! Prompt construction for summarization requests.
//!
//! Building a prompt is pure: the same document text and configuration
//! always produce the same request, so truncation behavior can be tested
//! without touching the network.

use crate::core::config::AppConfig;

/// Anthropic messages-schema version tagged onto every request body.
pub const ANTHROPIC_API_VERSION: &str = "bedrock-2023-05-31";

/// Appended to document text that was cut at the character ceiling.
pub const TRUNCATION_MARKER: &str = "...";

/// Placeholder in the instruction template replaced with the document text.
pub const DOCUMENT_PLACEHOLDER: &str = "{document}";

/// Substituted for the document when the object decoded to no text.
pub const EMPTY_DOCUMENT_NOTICE: &str = "The document is empty.";

/// Default summarization instructions wrapped around the document text.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "\
Please provide a comprehensive summary of the following document. \
Focus on the main points, key findings, and important details. \
The summary should be well-structured and capture the essence of the document.

DOCUMENT:
{document}

SUMMARY:";

/// A fully prepared model request: the prompt plus the generation
/// parameters the invocation layer needs.
#[derive(Debug, Clone)]
pub struct SummarizationRequest {
    pub model_id: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub api_version: String,
}

/// Builds bounded summarization prompts.
///
/// Documents longer than the configured ceiling are cut at a character
/// boundary and marked. There is no semantic chunking or multi-pass
/// summarization.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    template: String,
    max_document_chars: usize,
    model_id: String,
    max_tokens: u32,
    temperature: f32,
}

impl PromptBuilder {
    pub fn new(
        model_id: String,
        max_document_chars: usize,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            template: DEFAULT_PROMPT_TEMPLATE.to_string(),
            max_document_chars,
            model_id,
            max_tokens,
            temperature,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.model_id.clone(),
            config.max_document_chars,
            config.max_output_tokens,
            config.temperature,
        )
    }

    /// Swap the instruction template. The template must contain
    /// [`DOCUMENT_PLACEHOLDER`] where the document text belongs.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn build(&self, document_text: &str) -> SummarizationRequest {
        let bounded = self.bounded_document(document_text);
        SummarizationRequest {
            model_id: self.model_id.clone(),
            prompt: self.template.replace(DOCUMENT_PLACEHOLDER, &bounded),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            api_version: ANTHROPIC_API_VERSION.to_string(),
        }
    }

    /// Length-only truncation on a char boundary. Text at or under the
    /// ceiling passes through verbatim with no marker.
    fn bounded_document(&self, text: &str) -> String {
        if text.is_empty() {
            return EMPTY_DOCUMENT_NOTICE.to_string();
        }
        match text.char_indices().nth(self.max_document_chars) {
            Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
            None => text.to_string(),
        }
    }
}
