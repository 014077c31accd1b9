use crate::document::Document;

/// Picks the page title: the first `<h1>` with text, else `<title>`, else "".
pub fn extract_title(doc: &Document) -> String {
    doc.all_by_tag("h1")
        .map(|h1| h1.trimmed_text())
        .find(|text| !text.is_empty())
        .or_else(|| {
            doc.first_by_tag("title")
                .map(|title| title.trimmed_text())
                .filter(|text| !text.is_empty())
        })
        .unwrap_or_default()
}
