//! PDF export.
//!
//! The block list is mapped onto genpdf elements; pagination is handled by
//! the library through the page decorator. Each image URL is re-fetched (or
//! decoded in place for `data:` URIs), rescaled to the printable width,
//! flattened over white and re-encoded as PNG into a temporary file before
//! embedding — genpdf reads images from paths. A failed fetch or decode
//! drops that image from the document and nothing else.

use actix_web::{web, HttpResponse, Responder};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use common::requests::ExportRequest;
use genpdf::elements::{Break, Image as PdfImage, Paragraph};
use genpdf::style::{Style, StyledString};
use genpdf::Document;
use image::imageops::FilterType;
use image::{load_from_memory, DynamicImage, GenericImageView};
use log::warn;
use png::{BitDepth as PngBitDepth, ColorType as PngColorType, Encoder as PngEncoder};
use std::error::Error;
use tempfile::NamedTempFile;

use super::format::{parse_blocks, Block};

const PAGE_WIDTH_INCH: f64 = 8.5;
const MARGIN_MM: f64 = 10.0;
const IMAGE_DPI: f64 = 150.0;

/// Fragments with detected styling.
enum TextStyle {
    Regular,
    Bold,
    Italic,
}

struct TextSegment {
    text: String,
    style: TextStyle,
}

/// Split a line on `**bold**` and `*italic*` markers. Unmatched markers stay
/// literal text.
fn parse_styles(line: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        let Some(start) = rest.find('*') else {
            segments.push(TextSegment {
                text: rest.to_string(),
                style: TextStyle::Regular,
            });
            break;
        };
        if start > 0 {
            segments.push(TextSegment {
                text: rest[..start].to_string(),
                style: TextStyle::Regular,
            });
        }
        rest = &rest[start..];

        let (marker, style) = if rest.starts_with("**") {
            ("**", TextStyle::Bold)
        } else {
            ("*", TextStyle::Italic)
        };
        let inner = &rest[marker.len()..];
        match inner.find(marker) {
            Some(end) if end > 0 => {
                segments.push(TextSegment {
                    text: inner[..end].to_string(),
                    style,
                });
                rest = &inner[end + marker.len()..];
            }
            _ => {
                // No closing marker: keep it as literal text.
                segments.push(TextSegment {
                    text: marker.to_string(),
                    style: TextStyle::Regular,
                });
                rest = inner;
            }
        }
    }

    segments
}

fn push_segments_into_paragraph(p: &mut Paragraph, segments: &[TextSegment]) {
    for seg in segments {
        let styled = match seg.style {
            TextStyle::Regular => StyledString::new(seg.text.clone(), Style::new()),
            TextStyle::Bold => StyledString::new(seg.text.clone(), Style::new().bold()),
            TextStyle::Italic => StyledString::new(seg.text.clone(), Style::new().italic()),
        };
        p.push(styled);
    }
}

/// Load the font family (adjust path/name if needed).
fn load_font() -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>, Box<dyn Error + Send + Sync>> {
    // Prefer fonts shipped next to the binary, then the distro Liberation set.
    if let Ok(family) = genpdf::fonts::from_files("./fonts", "Arial", None) {
        return Ok(family);
    }
    if let Ok(family) = genpdf::fonts::from_files("./fonts", "LiberationSans", None) {
        return Ok(family);
    }
    genpdf::fonts::from_files(
        "/usr/share/fonts/truetype/liberation",
        "LiberationSans",
        None,
    )
    .map_err(Into::into)
}

/// Configure and return a genpdf Document with font and decorator set.
fn configure_document() -> Result<Document, Box<dyn Error + Send + Sync>> {
    let font_family = load_font()?;
    let mut doc = Document::new(font_family);
    doc.set_title("Exported content");
    doc.set_font_size(10);
    doc.set_line_spacing(1.2);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);
    Ok(doc)
}

fn push_heading(doc: &mut Document, level: u8, text: &str) {
    let size = if level <= 2 { 14 } else { 12 };
    let mut p = Paragraph::new("");
    p.push(StyledString::new(
        text.to_string(),
        Style::new().bold().with_font_size(size),
    ));
    doc.push(p);
    doc.push(Break::new(1));
}

fn push_bullets(doc: &mut Document, items: &[String]) {
    for item in items {
        let mut p = Paragraph::new("");
        p.push(StyledString::new("• ", Style::new()));
        push_segments_into_paragraph(&mut p, &parse_styles(item));
        doc.push(p);
    }
    doc.push(Break::new(1));
}

fn push_paragraph(doc: &mut Document, text: &str) {
    let mut p = Paragraph::new("");
    push_segments_into_paragraph(&mut p, &parse_styles(text));
    doc.push(p);
    doc.push(Break::new(1));
}

/// Rescale to the printable width, flatten alpha over white, re-encode as
/// PNG into a temp file genpdf can read.
fn prepare_image(bytes: &[u8]) -> Result<NamedTempFile, Box<dyn Error + Send + Sync>> {
    let margin_in = MARGIN_MM / 25.4_f64;
    let content_width_in = PAGE_WIDTH_INCH - 2.0 * margin_in;
    let content_target_px = content_width_in * IMAGE_DPI;

    let img = load_from_memory(bytes)?;
    let (orig_w, orig_h) = img.dimensions();
    let scale = (content_target_px / orig_w as f64).min(1.0);

    let resized: DynamicImage = if scale >= 1.0 {
        img
    } else {
        let new_w = (orig_w as f64 * scale).max(1.0).round() as u32;
        let new_h = (orig_h as f64 * scale).max(1.0).round() as u32;
        img.resize(new_w, new_h, FilterType::Lanczos3)
    };

    let rgba = resized.to_rgba8();
    let (w, h) = rgba.dimensions();
    let mut background = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]));
    image::imageops::overlay(&mut background, &rgba, 0, 0);
    let rgb_image = DynamicImage::ImageRgba8(background).to_rgb8();
    let raw = rgb_image.into_raw();

    let mut tmp = NamedTempFile::new()?;
    {
        let file = tmp.as_file_mut();
        let mut encoder = PngEncoder::new(file, w, h);
        encoder.set_color(PngColorType::Rgb);
        encoder.set_depth(PngBitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&raw)?;
    }
    Ok(tmp)
}

/// Raw bytes for an image reference: `data:` URIs decode locally, anything
/// else is fetched over HTTP.
async fn fetch_image_bytes(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, String> {
    if let Some(stripped) = url.strip_prefix("data:") {
        let encoded = stripped
            .split_once(";base64,")
            .map(|(_, data)| data)
            .ok_or("unsupported data URI encoding")?;
        return BASE64.decode(encoded).map_err(|e| e.to_string());
    }

    let response = http.get(url).send().await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("image fetch returned {}", response.status()));
    }
    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| e.to_string())
}

/// Build the whole document and render it to bytes. Runs on a blocking
/// thread; the temp files must outlive the render call.
fn render_pdf(blocks: &[Block], images: &[Vec<u8>]) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
    let mut doc = configure_document()?;
    let mut temp_files: Vec<NamedTempFile> = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } => push_heading(&mut doc, *level, text),
            Block::Paragraph(text) => push_paragraph(&mut doc, text),
            Block::Bullets(items) => push_bullets(&mut doc, items),
        }
    }

    for bytes in images {
        match prepare_image(bytes) {
            Ok(tmp) => {
                let mut img_elem = PdfImage::from_path(tmp.path())?;
                img_elem.set_dpi(IMAGE_DPI);
                temp_files.push(tmp);
                doc.push(img_elem);
                doc.push(Break::new(1));
            }
            Err(err) => warn!("image skipped in PDF export: {}", err),
        }
    }

    let mut out = Vec::new();
    doc.render(&mut out)?;
    Ok(out)
}

pub(crate) async fn process(payload: web::Json<ExportRequest>) -> impl Responder {
    let request = payload.into_inner();
    let blocks = parse_blocks(&request.content);

    let http = reqwest::Client::new();
    let mut images: Vec<Vec<u8>> = Vec::new();
    for url in &request.images {
        match fetch_image_bytes(&http, url).await {
            Ok(bytes) => images.push(bytes),
            Err(reason) => warn!("image '{}' skipped in PDF export: {}", url, reason),
        }
    }

    let rendered = tokio::task::spawn_blocking(move || render_pdf(&blocks, &images)).await;
    match rendered {
        Ok(Ok(bytes)) => HttpResponse::Ok()
            .content_type("application/pdf")
            .body(bytes),
        Ok(Err(e)) => {
            HttpResponse::ServiceUnavailable().body(format!("PDF generation failed: {}", e))
        }
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("PDF generation failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn texts(segments: &[TextSegment]) -> Vec<(&str, bool)> {
        segments
            .iter()
            .map(|s| (s.text.as_str(), matches!(s.style, TextStyle::Bold)))
            .collect()
    }

    #[test]
    fn style_parsing_splits_bold_runs() {
        let segments = parse_styles("plain **bold** tail");
        assert_eq!(
            texts(&segments),
            vec![("plain ", false), ("bold", true), (" tail", false)]
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        let segments = parse_styles("a ** b");
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "a ** b");
    }

    #[test]
    fn prepared_image_is_rgb_png() {
        let source = image::RgbaImage::from_pixel(16, 16, image::Rgba([200, 10, 10, 128]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(source)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let tmp = prepare_image(&bytes).unwrap();
        // The temp file has no extension, so detect the format from content
        // (the same way genpdf reads it in the export path).
        let reloaded = image::ImageReader::open(tmp.path())
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(reloaded.dimensions(), (16, 16));
        assert_eq!(reloaded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn corrupt_image_bytes_are_rejected() {
        assert!(prepare_image(b"definitely not an image").is_err());
    }

    #[tokio::test]
    async fn data_uri_images_decode_without_a_fetch() {
        let http = reqwest::Client::new();
        let bytes = fetch_image_bytes(&http, "data:image/png;base64,QUJD")
            .await
            .unwrap();
        assert_eq!(bytes, b"ABC");

        assert!(fetch_image_bytes(&http, "data:image/png;utf8,x")
            .await
            .is_err());
    }
}
