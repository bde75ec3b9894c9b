use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::{web, HttpResponse, Responder};
use common::model::response::GenerationResponse;
use common::requests::GenerationRequest;
use log::error;
use serde_json::json;

use crate::images::keywords::extract_keywords;
use crate::llm::fallback::generate_with_fallback;
use crate::llm::LlmError;
use crate::state::AppState;

use super::prompt::build_generation_prompt;

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// `POST /api/generate`: validate, generate through the model chain, source
/// supplemental images from the generated text, assemble the response.
///
/// Image sourcing never fails; generation failures surface as a 500 whose
/// message carries a quota hint when any attempt died on rate limits.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<GenerationRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    if request.prompt.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Prompt is required" }));
    }

    let prompt = build_generation_prompt(&request);
    let content =
        match generate_with_fallback(state.backend.as_ref(), &state.policy, &prompt).await {
            Ok(content) => content,
            Err(err) => {
                error!("content generation failed: {}", err);
                let message = match err {
                    LlmError::Exhausted { rate_limited: true } => {
                        "Content generation failed: API quota exceeded, please try again later"
                    }
                    _ => "Content generation failed",
                };
                return HttpResponse::InternalServerError().json(json!({ "error": message }));
            }
        };

    let keywords = extract_keywords(&content);
    let images = state.sourcer.source(&keywords, epoch_millis()).await;
    let (urls, types): (Vec<_>, Vec<_>) = images
        .into_iter()
        .map(|image| (image.url, image.source))
        .unzip();

    HttpResponse::Ok().json(GenerationResponse {
        word_count: content.split_whitespace().count(),
        content,
        platform: request.platform,
        images: urls,
        image_types: types,
    })
}
