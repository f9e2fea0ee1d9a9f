//! Prompt construction, model invocation, and response parsing

pub mod invoke;
pub mod prompt;
pub mod response;

// Re-export main types for convenience
pub use invoke::{InferenceTransport, ModelInvoker};
pub use prompt::PromptBuilder;
pub use response::parse_summary;
