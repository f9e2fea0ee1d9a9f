//! Text extraction: raw object bytes plus a format hint become plain text.

use async_trait::async_trait;
use thiserror::Error;

/// Document formats the pipeline recognizes, keyed off the object-key
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Map an object key's extension to a format. `None` for extensions the
    /// pipeline does not recognize, including keys with no extension at all.
    pub fn from_key(key: &str) -> Option<Self> {
        let (_, ext) = key.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::PlainText => "txt",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        })
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to decode document text: {0}")]
    Parse(String),
}

/// Interface implemented by text extraction backends.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError>;
}

/// Extractor for plain-text objects. PDF and Word parsing belong to a
/// separate extraction service; when one of those formats reaches this
/// extractor the document is rejected as unsupported.
#[derive(Debug, Default)]
pub struct Utf8TextExtractor;

#[async_trait]
impl TextExtractor for Utf8TextExtractor {
    async fn extract(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
        match format {
            DocumentFormat::PlainText => {
                String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::Parse(e.to_string()))
            }
            other => Err(ExtractError::UnsupportedFormat(other.to_string())),
        }
    }
}
