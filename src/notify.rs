//! Completion notifications.

use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;
use thiserror::Error;

use crate::core::models::NotificationMessage;

/// Subject line attached to every completion notification.
pub const NOTIFICATION_SUBJECT: &str = "Document Summary Notification";

#[derive(Debug, Error)]
#[error("notification publish failed: {0}")]
pub struct NotifyError(pub String);

/// Publisher for completion messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, message: &NotificationMessage) -> Result<(), NotifyError>;
}

/// Production notifier backed by an SNS topic.
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(config: &aws_config::SdkConfig, topic_arn: String) -> Self {
        Self {
            client: aws_sdk_sns::Client::new(config),
            topic_arn,
        }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let body = serde_json::to_string(message)
            .map_err(|e| NotifyError(format!("serializing notification: {e}")))?;
        self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(NOTIFICATION_SUBJECT)
            .message(body)
            .send()
            .await
            .map_err(|e| NotifyError(DisplayErrorContext(e).to_string()))?;
        Ok(())
    }
}
