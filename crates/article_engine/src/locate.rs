use crate::document::{Document, Region};

/// Class-name fragments commonly used by news sites for the article body,
/// in the order they are tried.
pub const CLASS_PATTERNS: [&str; 6] = [
    "content",
    "article-body",
    "story-body",
    "news-article",
    "body",
    "main-content",
];

/// Regions that may hold the article, most specific first.
///
/// Order: the first `<article>`, the first `<main>`, then every `<div>` whose
/// class contains one of [`CLASS_PATTERNS`] (pattern order, then document
/// order). A div matching several patterns is listed once per pattern.
pub fn locate_candidates(doc: &Document) -> Vec<Region<'_>> {
    let mut candidates = Vec::new();
    candidates.extend(doc.first_by_tag("article"));
    candidates.extend(doc.first_by_tag("main"));
    for pattern in CLASS_PATTERNS {
        candidates.extend(doc.all_by_tag_with_class("div", pattern));
    }
    candidates
}
