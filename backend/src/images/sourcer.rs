//! Image sourcing chain.
//!
//! Always returns exactly [`IMAGE_SLOTS`] images, in this order of
//! precedence:
//!
//! 1. one AI-generated image from the first keyword, when a generation
//!    backend is configured and the cooldown guard is clear;
//! 2. one stock search result per keyword, in keyword order, when a search
//!    key is configured — a failed keyword is skipped, never fatal;
//! 3. deterministic placeholders for every remaining slot.
//!
//! Nothing in here raises to the caller: total upstream failure degrades to
//! a placeholder-only result.

use std::sync::Arc;

use common::model::image::{ImageSource, SourcedImage};
use log::warn;

use crate::llm::{LlmError, TextModel};
use crate::ratelimit::ImageGenCooldown;

use super::placeholder::placeholder_url;
use super::unsplash::UnsplashClient;

pub const IMAGE_SLOTS: usize = 3;

/// Model used for supplemental image generation.
const IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";

#[derive(Clone)]
pub struct ImageSourcer {
    unsplash: Option<UnsplashClient>,
    backend: Option<Arc<dyn TextModel>>,
    cooldown: Arc<ImageGenCooldown>,
}

impl ImageSourcer {
    pub fn new(
        unsplash: Option<UnsplashClient>,
        backend: Option<Arc<dyn TextModel>>,
        cooldown: Arc<ImageGenCooldown>,
    ) -> Self {
        Self {
            unsplash,
            backend,
            cooldown,
        }
    }

    /// Resolve images for the given keywords. `base` seeds the placeholder
    /// formula; production passes current epoch millis.
    pub async fn source(&self, keywords: &[String], base: u64) -> Vec<SourcedImage> {
        let mut images: Vec<SourcedImage> = Vec::with_capacity(IMAGE_SLOTS);

        if let Some(keyword) = keywords.first() {
            if let Some(url) = self.generate_ai_image(keyword).await {
                images.push(SourcedImage {
                    url,
                    source: ImageSource::AiGenerated,
                });
            }
        }

        if let Some(unsplash) = &self.unsplash {
            for keyword in keywords {
                if images.len() >= IMAGE_SLOTS {
                    break;
                }
                match unsplash.first_photo(keyword).await {
                    Ok(url) => images.push(SourcedImage {
                        url,
                        source: ImageSource::Unsplash,
                    }),
                    Err(reason) => {
                        warn!("photo search for '{}' skipped: {}", keyword, reason);
                    }
                }
            }
        }

        let mut slot = 0u64;
        while images.len() < IMAGE_SLOTS {
            images.push(SourcedImage {
                url: placeholder_url(base, slot),
                source: ImageSource::Stock,
            });
            slot += 1;
        }

        images.truncate(IMAGE_SLOTS);
        images
    }

    /// One attempt at an AI image, guarded by the shared cooldown. A quota
    /// failure trips the guard so requests inside the cooldown window skip
    /// straight to stock images.
    async fn generate_ai_image(&self, keyword: &str) -> Option<String> {
        let backend = self.backend.as_ref()?;
        if self.cooldown.is_suppressed().await {
            return None;
        }

        let prompt = format!(
            "A high-quality, professional stock photograph illustrating {keyword}. \
             Clean composition, natural lighting, no text overlays."
        );
        match backend.generate_image(IMAGE_MODEL, &prompt).await {
            Ok(data_uri) => Some(data_uri),
            Err(err) => {
                if matches!(err, LlmError::RateLimited(_)) {
                    self.cooldown.record_failure().await;
                }
                warn!("AI image generation skipped: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn no_credentials_yield_three_distinct_placeholders() {
        let sourcer = ImageSourcer::new(None, None, Arc::new(ImageGenCooldown::default()));
        let images = sourcer.source(&kws(&["healthcare", "robotics"]), 42).await;

        assert_eq!(images.len(), IMAGE_SLOTS);
        assert!(images.iter().all(|i| i.source == ImageSource::Stock));
        let urls: HashSet<_> = images.iter().map(|i| i.url.clone()).collect();
        assert_eq!(urls.len(), IMAGE_SLOTS);
    }

    struct RateLimitedBackend {
        image_calls: AtomicUsize,
    }

    #[async_trait]
    impl TextModel for RateLimitedBackend {
        async fn generate(&self, _m: &str, _p: &str) -> Result<String, LlmError> {
            Err(LlmError::Transient("not used".into()))
        }

        async fn generate_image(&self, _m: &str, _p: &str) -> Result<String, LlmError> {
            self.image_calls.fetch_add(1, Ordering::SeqCst);
            Err(LlmError::RateLimited("quota exceeded".into()))
        }
    }

    #[tokio::test]
    async fn quota_failure_trips_cooldown_and_later_requests_skip_the_ai_path() {
        let backend = Arc::new(RateLimitedBackend {
            image_calls: AtomicUsize::new(0),
        });
        let cooldown = Arc::new(ImageGenCooldown::new(Duration::from_secs(600)));
        let sourcer = ImageSourcer::new(None, Some(backend.clone()), cooldown.clone());

        let first = sourcer.source(&kws(&["finance"]), 7).await;
        assert_eq!(first.len(), IMAGE_SLOTS);
        assert_eq!(backend.image_calls.load(Ordering::SeqCst), 1);
        assert!(cooldown.is_suppressed().await);

        // Second request inside the window: the AI path is not retried.
        let second = sourcer.source(&kws(&["finance"]), 8).await;
        assert_eq!(second.len(), IMAGE_SLOTS);
        assert_eq!(backend.image_calls.load(Ordering::SeqCst), 1);
    }

    struct DataUriBackend;

    #[async_trait]
    impl TextModel for DataUriBackend {
        async fn generate(&self, _m: &str, _p: &str) -> Result<String, LlmError> {
            Err(LlmError::Transient("not used".into()))
        }

        async fn generate_image(&self, _m: &str, _p: &str) -> Result<String, LlmError> {
            Ok("data:image/png;base64,QUJD".into())
        }
    }

    #[tokio::test]
    async fn ai_image_takes_the_first_slot_and_placeholders_pad_the_rest() {
        let sourcer = ImageSourcer::new(
            None,
            Some(Arc::new(DataUriBackend)),
            Arc::new(ImageGenCooldown::default()),
        );
        let images = sourcer.source(&kws(&["skyline"]), 100).await;

        assert_eq!(images.len(), IMAGE_SLOTS);
        assert_eq!(images[0].source, ImageSource::AiGenerated);
        assert!(images[0].url.starts_with("data:image/png;base64,"));
        assert_eq!(images[1].source, ImageSource::Stock);
        assert_eq!(images[2].source, ImageSource::Stock);
    }

    #[tokio::test]
    async fn empty_keywords_still_fill_every_slot() {
        let sourcer = ImageSourcer::new(None, None, Arc::new(ImageGenCooldown::default()));
        let images = sourcer.source(&[], 5).await;
        assert_eq!(images.len(), IMAGE_SLOTS);
    }
}
