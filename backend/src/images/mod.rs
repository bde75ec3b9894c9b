//! Supplemental image sourcing: keyword extraction from generated text,
//! stock photo search, AI image generation, and deterministic placeholder
//! padding. The whole pipeline degrades, it never fails.

pub mod keywords;
pub mod placeholder;
pub mod sourcer;
pub mod unsplash;
