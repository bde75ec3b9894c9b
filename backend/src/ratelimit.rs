//! Advisory cooldown for the AI image-generation path.
//!
//! When an image-generation call fails on quota, further attempts within the
//! cooldown window are pointless; subsequent requests should skip straight to
//! stock images. The guard is a single timestamp behind an `RwLock`, shared
//! across requests through the application state. It is advisory only —
//! concurrent requests may race on it, which at worst costs one extra
//! upstream call.

use std::time::{Duration, Instant};

use tokio::sync::RwLock;

pub const DEFAULT_IMAGE_GEN_COOLDOWN: Duration = Duration::from_secs(600);

pub struct ImageGenCooldown {
    cooldown: Duration,
    tripped_at: RwLock<Option<Instant>>,
}

impl ImageGenCooldown {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            tripped_at: RwLock::new(None),
        }
    }

    /// Whether the AI image path should currently be skipped.
    pub async fn is_suppressed(&self) -> bool {
        match *self.tripped_at.read().await {
            Some(at) => at.elapsed() < self.cooldown,
            None => false,
        }
    }

    /// Record a quota failure, starting (or restarting) the cooldown window.
    pub async fn record_failure(&self) {
        *self.tripped_at.write().await = Some(Instant::now());
    }
}

impl Default for ImageGenCooldown {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_GEN_COOLDOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_clear_and_trips_on_failure() {
        let guard = ImageGenCooldown::default();
        assert!(!guard.is_suppressed().await);
        guard.record_failure().await;
        assert!(guard.is_suppressed().await);
    }

    #[tokio::test]
    async fn zero_cooldown_never_suppresses() {
        let guard = ImageGenCooldown::new(Duration::ZERO);
        guard.record_failure().await;
        assert!(!guard.is_suppressed().await);
    }
}
