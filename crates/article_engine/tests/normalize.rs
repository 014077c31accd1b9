use article_engine::normalize_text;
use pretty_assertions::assert_eq;

#[test]
fn empty_input_is_returned_unchanged() {
    assert_eq!(normalize_text(""), "");
}

#[test]
fn nbsp_and_bell_are_cleaned_per_paragraph() {
    assert_eq!(
        normalize_text("Hello\u{a0}world.\n\nSecond\u{7}para."),
        "Hello world.\n\nSecond para."
    );
}

#[test]
fn normalization_is_idempotent() {
    let samples = [
        "Hello\u{a0}world.\n\nSecond\u{7}para.",
        "  lots   of\t\tspace \n\n\n\n\u{FFFD}odd\u{9f}chars ",
        "ﬁrst\r\nline\n\n\u{2003}second",
        "plain",
    ];
    for sample in samples {
        let once = normalize_text(sample);
        assert_eq!(normalize_text(&once), once, "input {sample:?}");
    }
}

#[test]
fn whitespace_only_paragraphs_are_dropped() {
    assert_eq!(normalize_text("one\n\n \t \n\ntwo"), "one\n\ntwo");
    assert_eq!(normalize_text(" \n\n\t"), "");
}

#[test]
fn replacement_character_becomes_space() {
    assert_eq!(normalize_text("broken\u{FFFD}\u{FFFD}text"), "broken text");
}

#[test]
fn distinct_paragraphs_are_never_merged() {
    let text = normalize_text("alpha\n\nbeta\n\ngamma");
    assert_eq!(text.split("\n\n").collect::<Vec<_>>(), vec!["alpha", "beta", "gamma"]);
}
