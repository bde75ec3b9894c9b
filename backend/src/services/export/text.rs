use actix_web::{web, HttpResponse, Responder};
use common::requests::ExportRequest;

use super::format::{parse_blocks, strip_emphasis, Block};

/// Plain-text rendering: markers stripped, bullets as "• ", one blank line
/// between blocks.
pub fn render_text(blocks: &[Block]) -> String {
    let mut out: Vec<String> = Vec::new();
    for block in blocks {
        match block {
            Block::Heading { text, .. } => out.push(strip_emphasis(text)),
            Block::Paragraph(text) => out.push(strip_emphasis(text)),
            Block::Bullets(items) => out.push(
                items
                    .iter()
                    .map(|item| format!("• {}", strip_emphasis(item)))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        }
    }
    out.join("\n\n")
}

pub(crate) async fn process(payload: web::Json<ExportRequest>) -> impl Responder {
    let blocks = parse_blocks(&payload.content);
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(render_text(&blocks))
}
