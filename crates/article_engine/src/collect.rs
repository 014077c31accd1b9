use engine_logging::engine_debug;

use crate::document::{is_text_whitespace, Document, Region};

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// A candidate wins once its text holds more words than this.
pub const SUFFICIENT_CONTENT_WORDS: usize = 40;

/// Minimum words for the whole-body fallback.
pub const BODY_FALLBACK_WORDS: usize = 20;

/// Chooses the article text from the ranked candidates.
///
/// The first candidate whose paragraphs exceed [`SUFFICIENT_CONTENT_WORDS`]
/// wins. Otherwise every paragraph in `<body>` is used if it exceeds
/// [`BODY_FALLBACK_WORDS`]. Otherwise the result is empty.
pub fn collect_article(candidates: &[Region<'_>], doc: &Document) -> String {
    for (rank, candidate) in candidates.iter().enumerate() {
        let text = paragraph_text(*candidate);
        let words = word_count(&text);
        if words > SUFFICIENT_CONTENT_WORDS {
            engine_debug!(
                "candidate #{} <{} class={:?}> accepted with {} words",
                rank,
                candidate.tag_name(),
                candidate.attr("class"),
                words
            );
            return text;
        }
    }

    let body = doc.first_by_tag("body").unwrap_or_else(|| doc.root());
    let text = paragraph_text(body);
    let words = word_count(&text);
    engine_debug!(
        "no candidate of {} was sufficient; body fallback has {} words",
        candidates.len(),
        words
    );
    if words > BODY_FALLBACK_WORDS {
        text
    } else {
        String::new()
    }
}

/// All `<p>` text inside `region`, blank paragraphs dropped, joined by
/// [`PARAGRAPH_SEPARATOR`].
pub fn paragraph_text(region: Region<'_>) -> String {
    region
        .elements_by_tag("p")
        .map(|p| p.spaced_text())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

pub fn word_count(text: &str) -> usize {
    text.split(is_text_whitespace)
        .filter(|word| !word.is_empty())
        .count()
}
