//! Read-only view over a parsed HTML document.
//!
//! The extraction heuristics only need four capabilities from the tree:
//! find the first element by tag, find elements by tag (optionally filtered
//! by a class pattern), trimmed text, and space-joined text. This module
//! wraps `scraper` to provide exactly those.

use scraper::{ElementRef, Html};

const NON_RENDERED: [&str; 3] = ["script", "style", "template"];

/// Whitespace as the word splitter sees it: Unicode whitespace plus the
/// information separators U+001C..=U+001F.
pub fn is_text_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

pub struct Document {
    html: Html,
}

impl Document {
    /// Parses markup of unknown validity. Malformed input never fails; missing
    /// elements are simply not found later.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn root(&self) -> Region<'_> {
        Region(self.html.root_element())
    }

    pub fn first_by_tag(&self, tag: &str) -> Option<Region<'_>> {
        self.root().self_and_descendants().find(|r| r.is(tag))
    }

    pub fn all_by_tag(&self, tag: &str) -> impl Iterator<Item = Region<'_>> + '_ {
        let tag = tag.to_string();
        self.root().self_and_descendants().filter(move |r| r.is(&tag))
    }

    /// Elements named `tag` whose class attribute contains `pattern`,
    /// compared case-insensitively, in document order.
    pub fn all_by_tag_with_class<'a>(
        &'a self,
        tag: &'a str,
        pattern: &'a str,
    ) -> impl Iterator<Item = Region<'a>> + 'a {
        self.all_by_tag(tag)
            .filter(move |r| r.class_contains(pattern))
    }
}

/// A borrowed element of a [`Document`]. Copying a region never copies the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a>(ElementRef<'a>);

impl<'a> Region<'a> {
    pub fn tag_name(&self) -> &'a str {
        self.0.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    pub fn class_contains(&self, pattern: &str) -> bool {
        self.attr("class")
            .map(|class| class.to_lowercase().contains(&pattern.to_lowercase()))
            .unwrap_or(false)
    }

    /// Descendant elements named `tag`, excluding this element itself.
    pub fn elements_by_tag(self, tag: &'a str) -> impl Iterator<Item = Region<'a>> + 'a {
        self.self_and_descendants().skip(1).filter(move |r| r.is(tag))
    }

    /// Concatenated text content with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> String {
        self.visible_text()
            .collect::<String>()
            .trim_matches(is_text_whitespace)
            .to_string()
    }

    /// Text fragments between child element boundaries, each trimmed, empty
    /// ones dropped, joined with a single space.
    pub fn spaced_text(&self) -> String {
        self.visible_text()
            .map(|fragment| fragment.trim_matches(is_text_whitespace))
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Text nodes in document order, skipping anything under a non-rendered
    /// element such as `<script>` or `<style>`.
    fn visible_text(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.0.descendants().filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|el| NON_RENDERED.contains(&el.value().name()));
            (!hidden).then_some(&**text)
        })
    }

    fn is(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }

    fn self_and_descendants(self) -> impl Iterator<Item = Region<'a>> + 'a {
        self.0
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(Region)
    }
}
