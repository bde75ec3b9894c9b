use serde::{Deserialize, Serialize};

use crate::model::content::{ContentType, Platform, Tone};

/// Request payload for the content generation endpoint.
/// Everything except the prompt is optional and falls back to defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub word_count: Option<u32>,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub platform: Platform,
}

/// Request payload for the export endpoints. The draft travels in the body;
/// nothing is persisted server-side.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub content: String,
    /// Image URLs (or `data:` URIs) to embed, in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_defaults() {
        let req: GenerationRequest =
            serde_json::from_str(r#"{"prompt":"Write about AI in healthcare"}"#).unwrap();
        assert_eq!(req.tone, Tone::Professional);
        assert_eq!(req.word_count, None);
        assert_eq!(req.content_type, ContentType::Article);
        assert_eq!(req.platform, Platform::Standard);
    }
}
