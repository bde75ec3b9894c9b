use serde::{Deserialize, Serialize};

use crate::model::content::Platform;
use crate::model::image::ImageSource;

/// Payload of a successful `POST /api/generate` call.
///
/// `images` and `image_types` are parallel sequences: `image_types[i]` names
/// the origin of `images[i]`. Both always have the same length (0 to 3).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub content: String,
    /// Whitespace-token count of `content`.
    pub word_count: usize,
    /// The platform the request was generated for, echoed back.
    pub platform: Platform,
    pub images: Vec<String>,
    pub image_types: Vec<ImageSource>,
}
