//! Search-term extraction from free text.
//!
//! Pure function: lower-case, strip punctuation, drop short tokens and
//! stop-words, deduplicate, rank by token length, keep the top three. A text
//! made only of stop-words yields a fixed generic triple so the image search
//! always has something to work with.

/// Common English function words plus generation-domain words that never
/// make useful image queries.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "and", "any", "are", "because",
    "been", "before", "being", "below", "between", "both", "but", "can", "could", "did", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "her", "here", "hers", "him", "his", "how", "into", "its", "itself", "just", "more",
    "most", "not", "now", "off", "once", "only", "other", "our", "ours", "out", "over", "own",
    "same", "she", "should", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "then", "there", "these", "they", "this", "those", "through", "too", "under", "until", "very",
    "was", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours",
    // generation-domain words
    "article", "blog", "content", "create", "generate", "make", "piece", "post", "text", "topic",
    "write", "writing",
];

const MAX_KEYWORDS: usize = 3;

/// Fallback when nothing survives the filter.
const FALLBACK_KEYWORDS: [&str; 3] = ["professional", "business", "content"];

pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    for token in cleaned.split_whitespace() {
        if token.len() <= 3 || STOP_WORDS.contains(&token) {
            continue;
        }
        if !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
    }

    // Stable, so equal-length tokens keep first-seen order.
    keywords.sort_by(|a, b| b.len().cmp(&a.len()));
    keywords.truncate(MAX_KEYWORDS);

    if keywords.is_empty() {
        return FALLBACK_KEYWORDS.iter().map(|k| k.to_string()).collect();
    }
    keywords
}
