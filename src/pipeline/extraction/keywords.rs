//! Vocabulary scan over free text.

use crate::knowledge::Vocabulary;
use crate::models::ExtractedKeyword;

/// Characters of context kept on each side of a keyword's first occurrence.
pub const CONTEXT_RADIUS: usize = 50;

/// Emit one keyword per vocabulary term that occurs in `text`, in
/// vocabulary order (symptoms, diseases, medications, tests, vitals).
pub fn identify_medical_keywords(vocabulary: &Vocabulary, text: &str) -> Vec<ExtractedKeyword> {
    let text_len = text.chars().count();
    let mut keywords = Vec::new();

    for matcher in vocabulary.matchers() {
        let mut matches = matcher.regex.find_iter(text);
        let Some(first) = matches.next() else {
            continue;
        };
        let count = 1 + matches.count();

        keywords.push(ExtractedKeyword {
            keyword: matcher.term.clone(),
            category: matcher.category,
            confidence: keyword_confidence(count, text_len),
            context: context_around(text, first.start(), first.end(), CONTEXT_RADIUS),
        });
    }

    tracing::debug!(text_len, keywords = keywords.len(), "Keyword scan complete");
    keywords
}

/// 20 points per occurrence (max 100), scaled down for texts shorter than
/// 1000 characters.
pub fn keyword_confidence(occurrences: usize, text_len: usize) -> u8 {
    let base = (occurrences as f64 * 20.0).min(100.0);
    let length_factor = (text_len as f64 / 1000.0).min(1.0);
    (base * length_factor).round() as u8
}

/// Up to `radius` characters either side of `[start, end)`, clipped at the
/// text bounds and trimmed. Offsets are byte offsets on char boundaries.
pub fn context_around(text: &str, start: usize, end: usize, radius: usize) -> String {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    text[from..to].trim().to_string()
}
