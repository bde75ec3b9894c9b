//! Model-fallback retry loop.
//!
//! The model chain is a static quality/availability fallback, tried in
//! priority order. Per model there is a small retry budget with linear
//! backoff (`base_delay * (attempt + 1)`, no jitter); a 404-classified
//! failure abandons the model immediately. There is no circuit breaker and
//! no cross-request memory here — request volumes are small enough that an
//! unbounded linear schedule is acceptable.

use std::time::Duration;

use log::{info, warn};

use super::{LlmError, TextModel};

/// Ordered model chain and retry budget for one generation call.
#[derive(Clone, Debug)]
pub struct FallbackPolicy {
    /// Model identifiers in priority order.
    pub models: Vec<String>,
    /// Attempts per model before moving on.
    pub max_retries: u32,
    /// Base backoff; attempt `n` (0-based) waits `base_delay * (n + 1)`.
    pub base_delay: Duration,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            models: vec![
                "gemini-2.0-flash".to_string(),
                "gemini-1.5-flash".to_string(),
                "gemini-1.5-pro".to_string(),
            ],
            max_retries: 2,
            base_delay: Duration::from_millis(1000),
        }
    }
}

/// Try each model in order until one produces text.
///
/// Returns the first successful response, or `LlmError::Exhausted` once
/// every model/attempt combination failed. `Unconfigured` aborts the whole
/// loop at once — retrying a missing API key is pointless.
pub async fn generate_with_fallback(
    backend: &dyn TextModel,
    policy: &FallbackPolicy,
    prompt: &str,
) -> Result<String, LlmError> {
    let mut rate_limited = false;

    for model in &policy.models {
        for attempt in 0..policy.max_retries {
            match backend.generate(model, prompt).await {
                Ok(text) => {
                    info!("model {} succeeded on attempt {}", model, attempt + 1);
                    return Ok(text);
                }
                Err(LlmError::Unconfigured(reason)) => {
                    return Err(LlmError::Unconfigured(reason));
                }
                Err(LlmError::ModelUnavailable(reason)) => {
                    warn!("model {} unavailable, moving on: {}", model, reason);
                    break;
                }
                Err(LlmError::RateLimited(reason)) => {
                    rate_limited = true;
                    warn!(
                        "model {} rate-limited on attempt {}: {}",
                        model,
                        attempt + 1,
                        reason
                    );
                    backoff(policy, attempt).await;
                }
                Err(err) => {
                    warn!("model {} failed on attempt {}: {}", model, attempt + 1, err);
                    backoff(policy, attempt).await;
                }
            }
        }
    }

    Err(LlmError::Exhausted { rate_limited })
}

/// Sleep the linear schedule, except after the final attempt for a model —
/// the next call goes to a different model anyway.
async fn backoff(policy: &FallbackPolicy, attempt: u32) {
    if attempt + 1 < policy.max_retries {
        tokio::time::sleep(policy.base_delay * (attempt + 1)).await;
    }
}
