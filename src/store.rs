//! Summary record persistence.

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

use crate::core::models::SummaryRecord;

#[derive(Debug, Error)]
#[error("summary record write failed: {0}")]
pub struct StoreError(pub String);

/// Durable keyed storage for summary records. `put` is an upsert on the
/// document id, so redelivered events overwrite rather than duplicate.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn put(&self, record: &SummaryRecord) -> Result<(), StoreError>;
}

/// Production store backed by a DynamoDB table.
pub struct DynamoDbSummaryStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbSummaryStore {
    pub fn new(config: &aws_config::SdkConfig, table_name: String) -> Self {
        Self {
            client: aws_sdk_dynamodb::Client::new(config),
            table_name,
        }
    }
}

#[async_trait]
impl SummaryStore for DynamoDbSummaryStore {
    async fn put(&self, record: &SummaryRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("DocumentId", AttributeValue::S(record.document_id.clone()))
            .item("Summary", AttributeValue::S(record.summary_text.clone()))
            .item("SourceBucket", AttributeValue::S(record.source_bucket.clone()))
            .item("SourceKey", AttributeValue::S(record.source_key.clone()))
            .item("CreatedAt", AttributeValue::S(record.timestamp.clone()))
            .item("Status", AttributeValue::S(record.status.as_str().to_string()))
            .send()
            .await
            .map_err(|e| StoreError(DisplayErrorContext(e).to_string()))?;
        Ok(())
    }
}
