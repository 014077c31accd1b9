use engine_logging::engine_debug;

use crate::decode::decode_html;
use crate::extract::{ExtractedArticle, Extractor};
use crate::fetch::Fetcher;
use crate::{FetchError, ScrapeReport};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Fetch, decode, and extract a single page.
///
/// Only the fetch can fail; extraction degrades to empty strings.
pub async fn scrape(
    fetcher: &dyn Fetcher,
    extractor: &dyn Extractor,
    url: &str,
) -> Result<ExtractedArticle, ScrapeError> {
    let output = fetcher.fetch(url).await?;
    let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref());
    engine_debug!(
        "decoded {} bytes as {} (lossy: {})",
        output.metadata.byte_len,
        decoded.encoding_label,
        decoded.had_errors
    );
    Ok(extractor.extract(&decoded.html))
}

/// [`scrape`] folded into the success/failure report.
pub async fn scrape_report(fetcher: &dyn Fetcher, extractor: &dyn Extractor, url: &str) -> ScrapeReport {
    scrape(fetcher, extractor, url).await.into()
}
