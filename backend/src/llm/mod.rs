//! Client for the external text-generation API.
//!
//! The `TextModel` trait is the seam between the request handler and the
//! wire: production uses the Gemini client, tests script a fake. The
//! fallback loop in [`fallback`] walks an ordered model chain with a small
//! retry budget per model.

pub mod fallback;
pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

/// Classified failures from the generation API. The classification drives
/// the fallback loop: rate limits and transient errors are retried on the
/// same model, an unavailable model is abandoned immediately.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("rate limit or quota exceeded: {0}")]
    RateLimited(String),

    #[error("model not available: {0}")]
    ModelUnavailable(String),

    #[error("transient upstream error: {0}")]
    Transient(String),

    #[error("text generation is not configured: {0}")]
    Unconfigured(&'static str),

    #[error("all candidate models exhausted")]
    Exhausted {
        /// True when at least one attempt failed on quota, so the caller can
        /// surface a quota hint.
        rate_limited: bool,
    },
}

/// Interface to a generative backend.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generate text with the named model.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;

    /// Generate one image with the named model, returned as a `data:` URI.
    async fn generate_image(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}
