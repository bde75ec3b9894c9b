//! Deterministic placeholder image URLs.
//!
//! The placeholder service needs no API key and is always available; the
//! photo id and cache-buster are derived from a caller-supplied base value
//! (current epoch millis in production, fixed in tests) plus the slot index,
//! so consecutive placeholders within one response always differ.

/// Picture ids on the placeholder service range 1..=1000.
pub fn placeholder_url(base: u64, index: u64) -> String {
    let id = ((base + index * 100) % 1000) + 1;
    let buster = base + index;
    format!("https://picsum.photos/id/{id}/800/600?random={buster}")
}
