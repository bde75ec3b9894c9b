use actix_web::{web, HttpResponse, Responder};
use common::requests::ExportRequest;

use super::format::{emphasis_to_html, escape_html, parse_blocks, Block};

/// Render the block list into a standalone HTML document, with the images
/// appended as figures after the content.
pub fn render_html(blocks: &[Block], images: &[String]) -> String {
    let mut body = String::new();
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let inner = emphasis_to_html(&escape_html(text));
                body.push_str(&format!("<h{level}>{inner}</h{level}>\n"));
            }
            Block::Paragraph(text) => {
                let inner = emphasis_to_html(&escape_html(text));
                body.push_str(&format!("<p>{inner}</p>\n"));
            }
            Block::Bullets(items) => {
                body.push_str("<ul>\n");
                for item in items {
                    let inner = emphasis_to_html(&escape_html(item));
                    body.push_str(&format!("<li>{inner}</li>\n"));
                }
                body.push_str("</ul>\n");
            }
        }
    }

    for url in images {
        body.push_str(&format!(
            "<figure><img src=\"{}\" alt=\"\"></figure>\n",
            escape_html(url)
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Exported content</title>\n\
         <style>body{{font-family:sans-serif;max-width:48rem;margin:2rem auto;\
         line-height:1.5}}img{{max-width:100%}}</style>\n\
         </head>\n<body>\n{body}</body>\n</html>\n"
    )
}

pub(crate) async fn process(payload: web::Json<ExportRequest>) -> impl Responder {
    let blocks = parse_blocks(&payload.content);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_html(&blocks, &payload.images))
}
