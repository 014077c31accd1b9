use unicode_normalization::UnicodeNormalization;

use crate::collect::PARAGRAPH_SEPARATOR;

/// Cleans extracted text while keeping its paragraph structure.
///
/// Non-breaking spaces become spaces and the text is NFKC-normalized. Each
/// paragraph then has U+FFFD and C0/C1 control characters replaced by spaces,
/// runs of spaces and tabs collapsed, and its ends trimmed. Empty paragraphs
/// are dropped. Paragraphs are never merged or split further.
pub fn normalize_text(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let folded: String = input.replace('\u{a0}', " ").nfkc().collect();

    folded
        .split(PARAGRAPH_SEPARATOR)
        .map(clean_paragraph)
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

fn clean_paragraph(paragraph: &str) -> String {
    let mut cleaned = String::with_capacity(paragraph.len());
    let mut prev_blank = false;
    for ch in paragraph.chars() {
        let ch = if ch == '\u{FFFD}' || is_control(ch) { ' ' } else { ch };
        if ch == ' ' || ch == '\t' {
            if !prev_blank {
                cleaned.push(' ');
            }
            prev_blank = true;
        } else {
            cleaned.push(ch);
            prev_blank = false;
        }
    }
    cleaned.trim().to_string()
}

fn is_control(ch: char) -> bool {
    matches!(ch, '\u{00}'..='\u{1F}' | '\u{7F}'..='\u{9F}')
}
