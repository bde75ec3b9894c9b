//! Generation prompt composition.
//!
//! The platform table carries the formatting rules the model is asked to
//! follow; everything else (content type, tone, word budget) is appended as
//! plain constraints. Markdown-style markers are requested explicitly so the
//! export renderers have something to anchor on.

use common::model::content::Platform;
use common::requests::GenerationRequest;

pub const MIN_WORD_COUNT: u32 = 100;
pub const MAX_WORD_COUNT: u32 = 2000;
pub const DEFAULT_WORD_COUNT: u32 = 500;

/// Formatting rules per platform. `Standard` is the default profile and the
/// catch-all for unknown platforms.
pub fn platform_instructions(platform: Platform) -> &'static str {
    match platform {
        Platform::Linkedin => {
            "Format for LinkedIn: a strong hook in the first line, short \
             paragraphs of one to three sentences, a handful of relevant \
             hashtags at the end, and a question or call to action to close."
        }
        Platform::Twitter => {
            "Format as a Twitter/X thread: numbered tweets, each under 280 \
             characters, the first tweet working as a hook, minimal hashtags."
        }
        Platform::Instagram => {
            "Format as an Instagram caption: an attention-grabbing opening \
             line, line breaks between thoughts, emojis where natural, and a \
             block of hashtags at the very end."
        }
        Platform::Facebook => {
            "Format for Facebook: conversational tone, short paragraphs, one \
             or two questions to invite comments, no hashtag walls."
        }
        Platform::Blog => {
            "Format as a blog post: a title as a heading, an introduction, \
             several ## sections with descriptive headings, and a conclusion."
        }
        Platform::Email => {
            "Format as an email: a subject line on the first line, a \
             greeting, short scannable paragraphs, and a clear call to \
             action before the sign-off."
        }
        Platform::Medium => {
            "Format as a Medium story: a compelling title heading, a \
             narrative introduction, ## subheadings, and pull-quote worthy \
             sentences in **bold**."
        }
        Platform::Standard => {
            "Use clear standard formatting: a heading for the title and \
             short logical paragraphs."
        }
    }
}

/// Clamp the requested word budget into the supported range.
pub fn clamp_word_count(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(DEFAULT_WORD_COUNT)
        .clamp(MIN_WORD_COUNT, MAX_WORD_COUNT)
}

/// Compose the full prompt sent to the model.
pub fn build_generation_prompt(request: &GenerationRequest) -> String {
    let word_count = clamp_word_count(request.word_count);
    format!(
        "You are an expert content writer. Write a {content_type} about the \
         following topic:\n\n{topic}\n\nTone: {tone}.\nTarget length: \
         approximately {word_count} words.\n\n{platform}\n\nFormatting rules: \
         use ## for section headings, **bold** for emphasis, and lines \
         starting with - for bullet lists. Return only the content itself, \
         with no preamble or commentary.",
        content_type = request.content_type.as_phrase(),
        topic = request.prompt.trim(),
        tone = request.tone.as_str(),
        platform = platform_instructions(request.platform),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::content::{ContentType, Tone};

    fn request(platform: Platform) -> GenerationRequest {
        GenerationRequest {
            prompt: "AI in healthcare".into(),
            tone: Tone::Professional,
            word_count: Some(500),
            content_type: ContentType::Article,
            platform,
        }
    }

    #[test]
    fn word_count_is_clamped() {
        assert_eq!(clamp_word_count(None), 500);
        assert_eq!(clamp_word_count(Some(50)), 100);
        assert_eq!(clamp_word_count(Some(5000)), 2000);
        assert_eq!(clamp_word_count(Some(750)), 750);
    }

    #[test]
    fn unknown_platform_gets_the_standard_profile() {
        let p: Platform = serde_json::from_str("\"myspace\"").unwrap();
        assert_eq!(
            platform_instructions(p),
            platform_instructions(Platform::Standard)
        );
    }

    #[test]
    fn prompt_carries_every_constraint() {
        let prompt = build_generation_prompt(&request(Platform::Linkedin));
        assert!(prompt.contains("AI in healthcare"));
        assert!(prompt.contains("article"));
        assert!(prompt.contains("professional"));
        assert!(prompt.contains("500 words"));
        assert!(prompt.contains("LinkedIn"));
    }
}
