//! Gemini `generateContent` client.
//!
//! One prompt string in, one text blob (or one inline image) out. Errors are
//! classified from the HTTP status first and the response body second, since
//! the API sometimes reports quota exhaustion inside a 400/500 payload.

use async_trait::async_trait;
use log::debug;
use serde_json::{json, Value};

use super::{LlmError, TextModel};

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, api_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            api_base,
        }
    }

    fn endpoint_for_model(&self, model: &str) -> String {
        let trimmed = model.trim();
        let model_path = if trimmed.starts_with("models/") {
            trimmed.to_string()
        } else {
            format!("models/{trimmed}")
        };
        format!("{}/{}:generateContent", self.api_base, model_path)
    }

    async fn post_generate(&self, model: &str, payload: Value) -> Result<Value, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::Unconfigured("GEMINI_API_KEY is not set"))?;

        let endpoint = self.endpoint_for_model(model);
        debug!("calling {}", endpoint);
        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await
            .map_err(|e| LlmError::Transient(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Transient(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_failure(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| LlmError::Transient(e.to_string()))
    }
}

/// Map an upstream failure onto the retry taxonomy.
fn classify_failure(status: u16, body: &str) -> LlmError {
    let message = error_message(body);
    let lowered = message.to_lowercase();
    match status {
        429 => LlmError::RateLimited(message),
        404 => LlmError::ModelUnavailable(message),
        _ if lowered.contains("quota")
            || lowered.contains("rate limit")
            || lowered.contains("resource_exhausted") =>
        {
            LlmError::RateLimited(message)
        }
        _ if lowered.contains("not found") => LlmError::ModelUnavailable(message),
        _ => LlmError::Transient(message),
    }
}

/// Pull `error.message` out of an API error body, falling back to the raw
/// body (truncated) when it is not the expected JSON shape.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.chars().take(300).collect())
}

/// Concatenate the text parts of the first candidate.
fn extract_text(payload: &Value) -> Option<String> {
    let parts = payload
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let mut out = String::new();
    for part in parts {
        if let Some(text) = part.get("text").and_then(Value::as_str) {
            out.push_str(text);
        }
    }
    if out.trim().is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Find the first inline image across all candidates and return it as a
/// `data:` URI. The API spells the field both `inlineData` and `inline_data`.
fn extract_inline_image(payload: &Value) -> Option<String> {
    let candidates = payload.get("candidates")?.as_array()?;
    for candidate in candidates {
        let parts = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array);
        let Some(parts) = parts else { continue };
        for part in parts {
            let Some(inline) = part.get("inlineData").or_else(|| part.get("inline_data")) else {
                continue;
            };
            let data = inline.get("data").and_then(Value::as_str).unwrap_or("");
            if data.is_empty() {
                continue;
            }
            let mime = inline
                .get("mimeType")
                .or_else(|| inline.get("mime_type"))
                .and_then(Value::as_str)
                .unwrap_or("image/png");
            return Some(format!("data:{mime};base64,{data}"));
        }
    }
    None
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        let response = self.post_generate(model, payload).await?;
        extract_text(&response)
            .ok_or_else(|| LlmError::Transient("response contained no text candidates".into()))
    }

    async fn generate_image(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseModalities": ["IMAGE"] },
        });
        let response = self.post_generate(model, payload).await?;
        extract_inline_image(&response)
            .ok_or_else(|| LlmError::Transient("response contained no inline image".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_by_status_and_body() {
        assert!(matches!(
            classify_failure(429, "too many requests"),
            LlmError::RateLimited(_)
        ));
        assert!(matches!(
            classify_failure(404, "no such model"),
            LlmError::ModelUnavailable(_)
        ));
        assert!(matches!(
            classify_failure(500, "internal"),
            LlmError::Transient(_)
        ));
        // Quota exhaustion reported inside a non-429 body.
        let body = r#"{"error":{"message":"Quota exceeded for quota metric"}}"#;
        assert!(matches!(
            classify_failure(400, body),
            LlmError::RateLimited(_)
        ));
    }

    #[test]
    fn text_extraction_concatenates_parts() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello " }, { "text": "world" }] }
            }]
        });
        assert_eq!(extract_text(&payload).unwrap(), "Hello world");
        assert!(extract_text(&json!({ "candidates": [] })).is_none());
    }

    #[test]
    fn inline_image_becomes_data_uri() {
        let payload = json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "caption" },
                    { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
                ] }
            }]
        });
        assert_eq!(
            extract_inline_image(&payload).unwrap(),
            "data:image/png;base64,QUJD"
        );
    }

    #[tokio::test]
    async fn missing_key_is_reported_before_any_request() {
        let client = GeminiClient::new(None, "http://127.0.0.1:9".into());
        let err = client.generate("gemini-2.0-flash", "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::Unconfigured(_)));
    }
}
