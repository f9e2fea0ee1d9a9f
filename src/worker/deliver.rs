//! Best-effort persistence and notification of the processing outcome.
//!
//! Failures here are logged, never propagated. A summary that was already
//! generated does not become an invocation failure because the record write
//! or the topic publish misfired.

use tracing::{error, info};

use crate::core::models::{NotificationMessage, SummaryRecord};
use crate::notify::Notifier;
use crate::store::SummaryStore;

/// Which of the final steps actually went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryStatus {
    pub stored: bool,
    pub notified: bool,
}

/// Write the record and publish the completion message. A store failure
/// does not skip the notification.
pub async fn deliver_record<S, N>(store: &S, notifier: &N, record: &SummaryRecord) -> DeliveryStatus
where
    S: SummaryStore,
    N: Notifier,
{
    let mut status = DeliveryStatus {
        stored: false,
        notified: false,
    };

    if let Err(e) = store.put(record).await {
        error!(
            document_id = %record.document_id,
            error = %e,
            "failed to store summary record"
        );
    } else {
        info!(
            document_id = %record.document_id,
            status = record.status.as_str(),
            "summary record stored"
        );
        status.stored = true;
    }

    let message = NotificationMessage::from_record(record);
    if let Err(e) = notifier.publish(&message).await {
        error!(
            document_id = %record.document_id,
            error = %e,
            "failed to publish completion notification"
        );
    } else {
        info!(document_id = %record.document_id, "completion notification published");
        status.notified = true;
    }

    status
}
