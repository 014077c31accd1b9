//! Article engine: fetch a page and extract its title and body text.
mod collect;
mod decode;
mod document;
mod extract;
mod fetch;
mod locate;
mod normalize;
mod report;
mod scrape;
mod title;
mod types;

pub use collect::{
    collect_article, paragraph_text, word_count, BODY_FALLBACK_WORDS, PARAGRAPH_SEPARATOR,
    SUFFICIENT_CONTENT_WORDS,
};
pub use decode::{decode_html, DecodedHtml};
pub use document::{Document, Region};
pub use extract::{extract_article, ExtractedArticle, Extractor, HeuristicExtractor};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use locate::{locate_candidates, CLASS_PATTERNS};
pub use normalize::normalize_text;
pub use report::ScrapeReport;
pub use scrape::{scrape, scrape_report, ScrapeError};
pub use title::extract_title;
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
