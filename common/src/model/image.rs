use serde::{Deserialize, Serialize};

/// Origin tag for an image returned alongside generated content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSource {
    Unsplash,
    Stock,
    AiGenerated,
}

impl ImageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSource::Unsplash => "unsplash",
            ImageSource::Stock => "stock",
            ImageSource::AiGenerated => "ai-generated",
        }
    }
}

/// One resolved image: either a remote URL or a `data:` URI, plus where it
/// came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcedImage {
    pub url: String,
    pub source: ImageSource,
}
