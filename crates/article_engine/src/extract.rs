use engine_logging::engine_info;

use crate::collect::collect_article;
use crate::document::Document;
use crate::locate::locate_candidates;
use crate::normalize::normalize_text;
use crate::title::extract_title;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedArticle {
    pub title: String,
    pub article: String,
}

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> ExtractedArticle;
}

/// Heuristic extractor:
/// - title from the first non-empty `<h1>`, else `<title>`
/// - body from the first ranked candidate with enough paragraph text
/// - both passed through [`normalize_text`].
///
/// Never fails; absent content yields empty strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicExtractor;

impl Extractor for HeuristicExtractor {
    fn extract(&self, html: &str) -> ExtractedArticle {
        let doc = Document::parse(html);
        let title = extract_title(&doc);
        let candidates = locate_candidates(&doc);
        let article = collect_article(&candidates, &doc);
        if article.is_empty() {
            engine_info!("no article text found among {} candidates", candidates.len());
        }

        ExtractedArticle {
            title: normalize_text(&title),
            article: normalize_text(&article),
        }
    }
}

/// Runs [`HeuristicExtractor`] over already-fetched markup.
pub fn extract_article(html: &str) -> ExtractedArticle {
    HeuristicExtractor.extract(html)
}
