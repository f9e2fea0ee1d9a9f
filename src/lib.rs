//! docsum - an S3-triggered Lambda worker that summarizes uploaded documents
//! with Amazon Bedrock.
//!
//! One invocation processes one storage event: the object is fetched from
//! S3, its text extracted, a bounded prompt built, the model invoked (the
//! configured inference profile first, the raw model id as the single
//! fallback), and the parsed summary written to DynamoDB with a completion
//! message published to SNS. The final two steps are best-effort; their
//! failures are logged, never propagated.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution, one document per invocation
//! - Amazon Bedrock `InvokeModel` for summary generation
//! - DynamoDB for summary records and SNS for completion notifications
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```
//! use docsum::ai::prompt::PromptBuilder;
//! use docsum::ai::response::{ModelResponse, parse_summary};
//!
//! let builder = PromptBuilder::new(
//!     "anthropic.claude-3-7-sonnet-20250219-v1:0".to_string(),
//!     150_000,
//!     4000,
//!     0.2,
//! );
//! let request = builder.build("Quarterly revenue grew 12% on subscription strength.");
//! assert!(request.prompt.contains("Quarterly revenue grew 12%"));
//!
//! let response = ModelResponse::new(br#"{"content": "Revenue was up."}"#.to_vec());
//! assert_eq!(parse_summary(&response).unwrap(), "Revenue was up.");
//! ```

// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod notify;
pub mod store;
pub mod worker;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda process.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// docsum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
