//! Block representation shared by the export renderers.
//!
//! The generated content is markdown-ish: `##`/`###` headings, `-`/`*`
//! bullets, `**bold**`/`*italic*` emphasis, blank-line paragraph breaks. On
//! top of that, a short standalone Title-Case line is promoted to a
//! sub-heading — models frequently emit section titles without markers.

use regex::Regex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    Bullets(Vec<String>),
}

/// Words allowed lowercase inside a Title-Case line.
const TITLE_CONNECTORS: &[&str] = &[
    "a", "an", "and", "as", "at", "by", "for", "in", "of", "on", "or", "the", "to", "vs", "with",
];

pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut bullets: Vec<String> = Vec::new();

    fn flush_paragraph(blocks: &mut Vec<Block>, paragraph: &mut Vec<String>) {
        if paragraph.is_empty() {
            return;
        }
        let text = paragraph.join(" ");
        paragraph.clear();
        if is_title_case_line(&text) {
            blocks.push(Block::Heading { level: 3, text });
        } else {
            blocks.push(Block::Paragraph(text));
        }
    }

    fn flush_bullets(blocks: &mut Vec<Block>, bullets: &mut Vec<String>) {
        if !bullets.is_empty() {
            blocks.push(Block::Bullets(std::mem::take(bullets)));
        }
    }

    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_bullets(&mut blocks, &mut bullets);
        } else if let Some((level, text)) = heading_line(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            flush_bullets(&mut blocks, &mut bullets);
            blocks.push(Block::Heading { level, text });
        } else if let Some(item) = bullet_line(line) {
            flush_paragraph(&mut blocks, &mut paragraph);
            bullets.push(item);
        } else {
            flush_bullets(&mut blocks, &mut bullets);
            paragraph.push(line.to_string());
        }
    }
    flush_paragraph(&mut blocks, &mut paragraph);
    flush_bullets(&mut blocks, &mut bullets);

    blocks
}

/// `# `/`## ` map to `<h2>`, deeper markers to `<h3>`.
fn heading_line(line: &str) -> Option<(u8, String)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 {
        return None;
    }
    let rest = line[hashes..].trim();
    if rest.is_empty() {
        return None;
    }
    let level = if hashes >= 3 { 3 } else { 2 };
    Some((level, rest.to_string()))
}

fn bullet_line(line: &str) -> Option<String> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(|item| item.trim().to_string())
}

/// Promote a short standalone Title-Case line (no terminal punctuation, no
/// emphasis markers) to a sub-heading.
fn is_title_case_line(text: &str) -> bool {
    if text.contains('*') || text.ends_with(['.', ',', ':', ';', '!', '?']) {
        return false;
    }
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() || words.len() > 8 {
        return false;
    }
    if !words[0].chars().next().is_some_and(|c| c.is_uppercase()) {
        return false;
    }
    words.iter().all(|word| {
        word.chars().next().is_some_and(|c| c.is_uppercase() || c.is_numeric())
            || TITLE_CONNECTORS.contains(&word.to_lowercase().as_str())
    })
}

/// Replace emphasis markers with HTML tags. Expects already-escaped input.
pub fn emphasis_to_html(text: &str) -> String {
    let bold = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    let italic = Regex::new(r"\*([^*]+)\*").unwrap();
    let out = bold.replace_all(text, "<strong>$1</strong>");
    italic.replace_all(&out, "<em>$1</em>").into_owned()
}

/// Drop emphasis markers, keeping the text.
pub fn strip_emphasis(text: &str) -> String {
    let bold = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    let italic = Regex::new(r"\*([^*]+)\*").unwrap();
    let out = bold.replace_all(text, "$1");
    italic.replace_all(&out, "$1").into_owned()
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_bullets_and_paragraphs_split() {
        let content = "## Overview\n\nFirst paragraph\nstill first.\n\n- one\n- two\n\nSecond paragraph.";
        let blocks = parse_blocks(content);
        assert_eq!(
            blocks,
            vec![
                Block::Heading { level: 2, text: "Overview".into() },
                Block::Paragraph("First paragraph still first.".into()),
                Block::Bullets(vec!["one".into(), "two".into()]),
                Block::Paragraph("Second paragraph.".into()),
            ]
        );
    }

    #[test]
    fn short_title_case_line_becomes_subheading() {
        let blocks = parse_blocks("The Road Ahead\n\nLonger explanatory sentence follows here.");
        assert_eq!(
            blocks[0],
            Block::Heading { level: 3, text: "The Road Ahead".into() }
        );
        assert!(matches!(blocks[1], Block::Paragraph(_)));
    }

    #[test]
    fn sentences_are_not_promoted() {
        let blocks = parse_blocks("This Is Clearly A Sentence, Not A Title.");
        assert!(matches!(blocks[0], Block::Paragraph(_)));
    }

    #[test]
    fn emphasis_rendering_and_stripping() {
        assert_eq!(
            emphasis_to_html("a **bold** and *subtle* word"),
            "a <strong>bold</strong> and <em>subtle</em> word"
        );
        assert_eq!(strip_emphasis("a **bold** and *subtle* word"), "a bold and subtle word");
    }

    #[test]
    fn deep_heading_markers_map_to_h3() {
        let blocks = parse_blocks("### Details");
        assert_eq!(blocks[0], Block::Heading { level: 3, text: "Details".into() });
    }
}
