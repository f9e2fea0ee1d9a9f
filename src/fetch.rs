//! Document retrieval from object storage.

use async_trait::async_trait;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("object not found: s3://{bucket}/{key}")]
    NotFound { bucket: String, key: String },
    #[error("object retrieval failed: {0}")]
    Access(String),
}

/// Interface for fetching raw document bytes.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, FetchError>;
}

/// Production fetcher backed by the S3 SDK.
pub struct S3DocumentFetcher {
    client: aws_sdk_s3::Client,
}

impl S3DocumentFetcher {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(config),
        }
    }
}

#[async_trait]
impl DocumentFetcher for S3DocumentFetcher {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, FetchError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| match e {
                SdkError::ServiceError(context) if context.err().is_no_such_key() => {
                    FetchError::NotFound {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    }
                }
                other => FetchError::Access(DisplayErrorContext(other).to_string()),
            })?;

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| FetchError::Access(format!("reading object body: {e}")))?;
        Ok(bytes.to_vec())
    }
}
