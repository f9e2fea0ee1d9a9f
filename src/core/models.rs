use std::borrow::Cow;
use std::string::FromUtf8Error;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Character budget for the summary excerpt carried in notifications.
const PREVIEW_MAX_CHARS: usize = 200;

/// The slice of an S3 event notification the worker reads. Everything else
/// in the payload (event name, request parameters, owner identity) is
/// ignored.
#[derive(Debug, Deserialize)]
pub struct StorageEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<StorageRecord>,
}

#[derive(Debug, Deserialize)]
pub struct StorageRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    pub bucket: BucketRef,
    pub object: ObjectRef,
}

#[derive(Debug, Deserialize)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ObjectRef {
    pub key: String,
}

/// Decode an object key as delivered in event notifications, where spaces
/// arrive as `+` and everything else is percent-encoded. A literal `+` in a
/// key arrives as `%2B` and survives the decode intact.
pub fn decode_object_key(raw: &str) -> Result<String, FromUtf8Error> {
    urlencoding::decode(&raw.replace('+', " ")).map(Cow::into_owned)
}

/// A document prepared for summarization. Lives for one invocation only;
/// nothing here is persisted directly.
#[derive(Debug, Clone)]
pub struct Document {
    /// Derived from the decoded object key, so redelivery of the same event
    /// lands on the same record instead of minting a new one.
    pub id: String,
    pub raw_text: String,
    pub size_chars: usize,
}

impl Document {
    pub fn new(key: &str, raw_text: String) -> Self {
        let size_chars = raw_text.chars().count();
        Self {
            id: key.to_string(),
            raw_text,
            size_chars,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummaryStatus {
    Success,
    Failed,
}

impl SummaryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
        }
    }
}

/// The persisted outcome of processing one document, keyed by document id.
/// For failures the diagnostic reason takes the place of the summary text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub document_id: String,
    pub summary_text: String,
    pub source_bucket: String,
    pub source_key: String,
    pub timestamp: String,
    pub status: SummaryStatus,
}

impl SummaryRecord {
    pub fn success(document_id: &str, bucket: &str, key: &str, summary_text: String) -> Self {
        Self {
            document_id: document_id.to_string(),
            summary_text,
            source_bucket: bucket.to_string(),
            source_key: key.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            status: SummaryStatus::Success,
        }
    }

    pub fn failure(document_id: &str, bucket: &str, key: &str, reason: String) -> Self {
        Self {
            document_id: document_id.to_string(),
            summary_text: reason,
            source_bucket: bucket.to_string(),
            source_key: key.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            status: SummaryStatus::Failed,
        }
    }
}

/// Completion message published after a document is processed. Carries an
/// excerpt rather than the full summary; consumers read the record for the
/// whole text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub document_id: String,
    pub source_key: String,
    pub summary_preview: String,
    pub status: SummaryStatus,
    pub timestamp: String,
}

impl NotificationMessage {
    pub fn from_record(record: &SummaryRecord) -> Self {
        Self {
            document_id: record.document_id.clone(),
            source_key: record.source_key.clone(),
            summary_preview: preview(&record.summary_text),
            status: record.status,
            timestamp: record.timestamp.clone(),
        }
    }
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
