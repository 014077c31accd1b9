use serde::Serialize;

use crate::ExtractedArticle;

/// The single JSON object printed per invocation.
///
/// Either `title` and `article` are present (success) or `error` is
/// (failure), never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeReport {
    pub fn success(extracted: ExtractedArticle) -> Self {
        Self {
            success: true,
            title: Some(extracted.title),
            article: Some(extracted.article),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            title: None,
            article: None,
            error: Some(error.into()),
        }
    }

    /// Compact JSON terminated by a newline. Non-ASCII text is written as-is.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

impl From<Result<ExtractedArticle, crate::ScrapeError>> for ScrapeReport {
    fn from(result: Result<ExtractedArticle, crate::ScrapeError>) -> Self {
        match result {
            Ok(extracted) => Self::success(extracted),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
