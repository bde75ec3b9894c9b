use serde::{Deserialize, Serialize};

/// Writing tone requested by the client. Unknown values fall back to
/// `Professional` so an out-of-date UI never produces a 400.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Casual,
    Formal,
    Friendly,
    #[default]
    #[serde(other)]
    Professional,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
        }
    }
}

/// The kind of document the model is asked to write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    BlogPost,
    SocialMediaPost,
    Email,
    Newsletter,
    ProductDescription,
    PressRelease,
    AdCopy,
    #[default]
    #[serde(other)]
    Article,
}

impl ContentType {
    /// Human phrasing used when composing the generation prompt.
    pub fn as_phrase(&self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::BlogPost => "blog post",
            ContentType::SocialMediaPost => "social media post",
            ContentType::Email => "email",
            ContentType::Newsletter => "newsletter",
            ContentType::ProductDescription => "product description",
            ContentType::PressRelease => "press release",
            ContentType::AdCopy => "ad copy",
        }
    }
}

/// Target publishing platform. `Standard` doubles as the catch-all for
/// unknown or missing values; the instruction table in the backend treats
/// it as the default formatting profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Blog,
    Email,
    Medium,
    #[default]
    #[serde(other)]
    Standard,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Blog => "blog",
            Platform::Email => "email",
            Platform::Medium => "medium",
            Platform::Standard => "standard",
        }
    }
}
