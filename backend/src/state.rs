//! Shared application state, injected into handlers as `web::Data`.

use std::sync::Arc;

use crate::config::Config;
use crate::images::sourcer::ImageSourcer;
use crate::images::unsplash::UnsplashClient;
use crate::llm::fallback::FallbackPolicy;
use crate::llm::gemini::GeminiClient;
use crate::llm::TextModel;
use crate::ratelimit::ImageGenCooldown;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn TextModel>,
    pub policy: FallbackPolicy,
    pub sourcer: ImageSourcer,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let gemini: Arc<dyn TextModel> = Arc::new(GeminiClient::new(
            config.gemini_api_key.clone(),
            config.gemini_api_base.clone(),
        ));

        let unsplash = config
            .unsplash_access_key
            .clone()
            .map(|key| UnsplashClient::new(key, config.unsplash_api_base.clone()));

        // The AI image path only makes sense with a generation key.
        let image_backend = config.gemini_api_key.as_ref().map(|_| gemini.clone());
        let cooldown = Arc::new(ImageGenCooldown::default());

        Self {
            backend: gemini,
            policy: FallbackPolicy::default(),
            sourcer: ImageSourcer::new(unsplash, image_backend, cooldown),
        }
    }
}
