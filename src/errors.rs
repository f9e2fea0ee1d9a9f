use thiserror::Error;

use crate::ai::invoke::ModelInvocationError;
use crate::ai::response::ResponseFormatError;
use crate::extract::ExtractError;
use crate::fetch::FetchError;

/// Failure of the summarization path for one document.
///
/// The `Display` string doubles as the diagnostic written onto a FAILED
/// summary record, so each variant names its pipeline stage.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("document fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("text extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("model invocation failed: {0}")]
    Invocation(#[from] ModelInvocationError),

    #[error("summary extraction failed: {0}")]
    ResponseFormat(#[from] ResponseFormatError),
}
