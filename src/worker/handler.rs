use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::ai::invoke::{BedrockTransport, InferenceTransport, ModelInvoker};
use crate::ai::prompt::PromptBuilder;
use crate::core::config::AppConfig;
use crate::core::models::{StorageEvent, SummaryRecord, decode_object_key};
use crate::extract::{TextExtractor, Utf8TextExtractor};
use crate::fetch::{DocumentFetcher, S3DocumentFetcher};
use crate::notify::{Notifier, SnsNotifier};
use crate::store::{DynamoDbSummaryStore, SummaryStore};
use super::deliver::{self, DeliveryStatus};
use super::summarize::DocumentSummarizer;

/// Lambda handler for the worker entrypoint. Decodes the storage event,
/// runs the summarization path, and records the outcome.
///
/// Returns `Err` only for failures that precede a document identity: bad
/// configuration, an unparseable event, an undecodable key. Once a document
/// is identified, failures become a FAILED record plus a notification and
/// the invocation itself succeeds, so the event is not redelivered.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<(), Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let storage_event: StorageEvent = serde_json::from_value(event.payload)
        .map_err(|e| Error::from(format!("Failed to parse storage event: {}", e)))?;
    let record = storage_event
        .records
        .first()
        .ok_or_else(|| Error::from("Storage event contained no records"))?;

    let bucket = record.s3.bucket.name.clone();
    let key = decode_object_key(&record.s3.object.key)
        .map_err(|e| Error::from(format!("Failed to decode object key: {}", e)))?;
    info!(bucket = %bucket, key = %key, "processing storage event");

    let shared_config = aws_config::from_env().load().await;
    let summarizer = DocumentSummarizer::new(
        S3DocumentFetcher::new(&shared_config),
        Utf8TextExtractor,
        PromptBuilder::from_config(&config),
        ModelInvoker::new(
            BedrockTransport::new(&shared_config),
            config.inference_profile.clone(),
        ),
    );
    let store = DynamoDbSummaryStore::new(&shared_config, config.table_name.clone());
    let notifier = SnsNotifier::new(&shared_config, config.topic_arn.clone());

    let (outcome, delivery) = process_object(&summarizer, &store, &notifier, &bucket, &key).await;
    info!(
        document_id = %outcome.document_id,
        status = outcome.status.as_str(),
        stored = delivery.stored,
        notified = delivery.notified,
        "document processing complete"
    );

    Ok(())
}

/// Run the summarization path for one object and deliver the outcome.
///
/// The returned record reflects the summarization result; the delivery
/// status reports which of the best-effort final steps went through.
pub async fn process_object<F, X, T, S, N>(
    summarizer: &DocumentSummarizer<F, X, T>,
    store: &S,
    notifier: &N,
    bucket: &str,
    key: &str,
) -> (SummaryRecord, DeliveryStatus)
where
    F: DocumentFetcher,
    X: TextExtractor,
    T: InferenceTransport,
    S: SummaryStore,
    N: Notifier,
{
    let record = match summarizer.summarize(bucket, key).await {
        Ok(summary) => SummaryRecord::success(key, bucket, key, summary),
        Err(e) => {
            error!(document_id = %key, error = %e, "summarization failed");
            SummaryRecord::failure(key, bucket, key, e.to_string())
        }
    };

    let status = deliver::deliver_record(store, notifier, &record).await;
    (record, status)
}

pub use self::function_handler as handler;
