//! Environment-driven configuration, read once at startup.
//!
//! - `GEMINI_API_KEY`: key for the text/image generation API. Without it the
//!   generation endpoint answers 500; image generation is skipped.
//! - `UNSPLASH_ACCESS_KEY`: optional; absence silently degrades the image
//!   search to placeholder images only.
//! - `PORT`: listen port, default 3000.
//! - `GEMINI_API_BASE` / `UNSPLASH_API_BASE`: upstream base URL overrides,
//!   mainly for tests and proxies.

use std::env;

use log::warn;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_UNSPLASH_API_BASE: &str = "https://api.unsplash.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub unsplash_access_key: Option<String>,
    pub unsplash_api_base: String,
}

/// Read a variable, treating empty/whitespace values as unset.
fn non_empty_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn base_url(name: &str, default: &str) -> String {
    non_empty_env(name)
        .map(|value| value.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}

impl Config {
    pub fn from_env() -> Self {
        let gemini_api_key = non_empty_env("GEMINI_API_KEY");
        if gemini_api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; content generation will fail");
        }
        let unsplash_access_key = non_empty_env("UNSPLASH_ACCESS_KEY");
        if unsplash_access_key.is_none() {
            warn!("UNSPLASH_ACCESS_KEY is not set; falling back to placeholder images");
        }

        Self {
            port: non_empty_env("PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(3000),
            gemini_api_key,
            gemini_api_base: base_url("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            unsplash_access_key,
            unsplash_api_base: base_url("UNSPLASH_API_BASE", DEFAULT_UNSPLASH_API_BASE),
        }
    }
}
