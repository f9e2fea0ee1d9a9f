//! Model invocation against Amazon Bedrock.
//!
//! The invoker prefers the configured inference profile and falls back to
//! the raw model identifier exactly once, and only for failures classified
//! as transient. Configuration and validation failures surface immediately.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_smithy_types::Blob;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

use super::prompt::SummarizationRequest;
use super::response::ModelResponse;

/// How an inference failure is treated by the invocation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationErrorKind {
    /// Bad identifier, missing permission, unbuildable request. No retry.
    Configuration,
    /// Provider-side condition worth one attempt on the raw model id.
    Transient,
    /// The service rejected the request body itself. No retry.
    Validation,
}

/// A classified failure from the transport layer.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: InvocationErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: InvocationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Interface to the inference service: one identifier, one request body,
/// one response body. Implementations perform no retries of their own.
#[async_trait]
pub trait InferenceTransport: Send + Sync {
    async fn invoke(&self, identifier: &str, body: &[u8]) -> Result<Vec<u8>, TransportError>;
}

/// Production transport backed by the Bedrock runtime SDK.
pub struct BedrockTransport {
    client: aws_sdk_bedrockruntime::Client,
}

impl BedrockTransport {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_bedrockruntime::Client::new(config),
        }
    }
}

#[async_trait]
impl InferenceTransport for BedrockTransport {
    async fn invoke(&self, identifier: &str, body: &[u8]) -> Result<Vec<u8>, TransportError> {
        let output = self
            .client
            .invoke_model()
            .model_id(identifier)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                let kind = classify_sdk_error(&e);
                TransportError::new(kind, DisplayErrorContext(e).to_string())
            })?;
        Ok(output.body.into_inner())
    }
}

fn classify_sdk_error(err: &SdkError<InvokeModelError>) -> InvocationErrorKind {
    match err {
        SdkError::ServiceError(context) => match context.err() {
            InvokeModelError::AccessDeniedException(_) => InvocationErrorKind::Configuration,
            InvokeModelError::ValidationException(_) => InvocationErrorKind::Validation,
            // A missing or inaccessible profile surfaces as ResourceNotFound.
            InvokeModelError::ResourceNotFoundException(_)
            | InvokeModelError::ThrottlingException(_)
            | InvokeModelError::ServiceUnavailableException(_)
            | InvokeModelError::InternalServerException(_)
            | InvokeModelError::ModelTimeoutException(_)
            | InvokeModelError::ModelNotReadyException(_)
            | InvokeModelError::ModelErrorException(_)
            | InvokeModelError::ServiceQuotaExceededException(_) => InvocationErrorKind::Transient,
            _ => InvocationErrorKind::Transient,
        },
        SdkError::ConstructionFailure(_) => InvocationErrorKind::Configuration,
        // Timeouts, dispatch failures, unparseable responses.
        _ => InvocationErrorKind::Transient,
    }
}

/// Terminal failure of the invocation strategy, after any fallback.
#[derive(Debug, Error)]
pub enum ModelInvocationError {
    #[error("inference configuration rejected: {0}")]
    Configuration(String),
    #[error("inference request failed validation: {0}")]
    Validation(String),
    #[error("inference service unavailable: {0}")]
    Exhausted(String),
}

/// Invokes the model through a transport, preferring the inference profile
/// when one is configured. One fallback attempt at most, never a loop.
pub struct ModelInvoker<T> {
    transport: T,
    inference_profile: Option<String>,
}

impl<T: InferenceTransport> ModelInvoker<T> {
    pub fn new(transport: T, inference_profile: Option<String>) -> Self {
        Self {
            transport,
            inference_profile,
        }
    }

    pub async fn invoke(
        &self,
        request: &SummarizationRequest,
    ) -> Result<ModelResponse, ModelInvocationError> {
        let body = request_body(request)?;

        let Some(profile) = self.inference_profile.as_deref() else {
            info!(model_id = %request.model_id, "invoking model directly");
            return match self.transport.invoke(&request.model_id, &body).await {
                Ok(bytes) => Ok(ModelResponse::new(bytes)),
                Err(err) => Err(terminal(err)),
            };
        };

        info!(identifier = %profile, "invoking model via inference profile");
        match self.transport.invoke(profile, &body).await {
            Ok(bytes) => Ok(ModelResponse::new(bytes)),
            Err(primary) if primary.kind == InvocationErrorKind::Transient => {
                warn!(
                    identifier = %profile,
                    error = %primary,
                    "profile attempt failed, falling back to raw model id"
                );
                match self.transport.invoke(&request.model_id, &body).await {
                    Ok(bytes) => Ok(ModelResponse::new(bytes)),
                    Err(fallback) if fallback.kind == InvocationErrorKind::Transient => {
                        Err(ModelInvocationError::Exhausted(format!(
                            "profile attempt: {primary}; model attempt: {fallback}"
                        )))
                    }
                    Err(fallback) => Err(terminal(fallback)),
                }
            }
            Err(primary) => Err(terminal(primary)),
        }
    }
}

fn terminal(err: TransportError) -> ModelInvocationError {
    match err.kind {
        InvocationErrorKind::Configuration => ModelInvocationError::Configuration(err.message),
        InvocationErrorKind::Validation => ModelInvocationError::Validation(err.message),
        InvocationErrorKind::Transient => ModelInvocationError::Exhausted(err.message),
    }
}

fn request_body(request: &SummarizationRequest) -> Result<Vec<u8>, ModelInvocationError> {
    serde_json::to_vec(&json!({
        "anthropic_version": request.api_version,
        "max_tokens": request.max_tokens,
        "temperature": request.temperature,
        "messages": [
            { "role": "user", "content": request.prompt }
        ]
    }))
    .map_err(|e| ModelInvocationError::Configuration(format!("request body: {e}")))
}
