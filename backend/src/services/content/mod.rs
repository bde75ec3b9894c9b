//! # Content Generation Service Module
//!
//! Routes the generation endpoint under the `/api` path.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/generate`**:
//!     - **Handler**: `generate::process`
//!     - **Description**: Validates the request, composes the full
//!       generation prompt (platform formatting, tone, word count), runs it
//!       through the model-fallback chain, sources up to three supplemental
//!       images from the generated text, and returns the assembled response.

mod generate;
pub mod prompt;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/generate", post().to(generate::process))
}
