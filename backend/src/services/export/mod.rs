//! # Export Service Module
//!
//! Renders a draft (sent in the request body — nothing is persisted) to one
//! of three formats, all sharing the block representation produced by
//! `format::parse_blocks`.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/export/text`**: plain-text serialization, `text/plain`.
//! *   **`POST /api/export/html`**: standalone HTML document with the images
//!     appended as figures, `text/html`.
//! *   **`POST /api/export/pdf`**: paginated PDF. Every image URL is
//!     re-fetched and re-encoded before embedding; a failed image is dropped
//!     from the document, never fatal.

pub mod format;
mod html;
mod pdf;
mod text;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/export";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/text", post().to(text::process))
        .route("/html", post().to(html::process))
        .route("/pdf", post().to(pdf::process))
}
