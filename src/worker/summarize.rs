//! The summarization path: fetch, extract, prompt, invoke, parse.

use tracing::info;

use crate::ai::invoke::{InferenceTransport, ModelInvoker};
use crate::ai::prompt::PromptBuilder;
use crate::ai::response::parse_summary;
use crate::core::models::Document;
use crate::errors::ProcessingError;
use crate::extract::{DocumentFormat, ExtractError, TextExtractor};
use crate::fetch::DocumentFetcher;

/// The wired pipeline for one worker process.
pub struct DocumentSummarizer<F, X, T> {
    fetcher: F,
    extractor: X,
    prompt_builder: PromptBuilder,
    invoker: ModelInvoker<T>,
}

impl<F, X, T> DocumentSummarizer<F, X, T>
where
    F: DocumentFetcher,
    X: TextExtractor,
    T: InferenceTransport,
{
    pub fn new(
        fetcher: F,
        extractor: X,
        prompt_builder: PromptBuilder,
        invoker: ModelInvoker<T>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            prompt_builder,
            invoker,
        }
    }

    /// Produce a summary for one stored object. The first failing stage
    /// aborts the path and the error names that stage.
    pub async fn summarize(&self, bucket: &str, key: &str) -> Result<String, ProcessingError> {
        let format = DocumentFormat::from_key(key).ok_or_else(|| {
            let suffix = key
                .rsplit_once('.')
                .map_or_else(|| key.to_string(), |(_, ext)| ext.to_string());
            ExtractError::UnsupportedFormat(suffix)
        })?;

        let bytes = self.fetcher.fetch(bucket, key).await?;
        info!(key, size_bytes = bytes.len(), "document fetched");

        let text = self.extractor.extract(&bytes, format).await?;
        let document = Document::new(key, text);
        info!(
            document_id = %document.id,
            size_chars = document.size_chars,
            "document text extracted"
        );

        let request = self.prompt_builder.build(&document.raw_text);
        let response = self.invoker.invoke(&request).await?;
        let summary = parse_summary(&response)?;
        info!(
            document_id = %document.id,
            summary_chars = summary.chars().count(),
            "summary generated"
        );

        Ok(summary)
    }
}
