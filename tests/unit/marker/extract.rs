use super::*;

const B: &str = "{{tw}}";
const E: &str = "{{/tw}}";

#[test]
fn finds_payload_between_markers() {
    let text = "Hello {{tw}}World{{/tw}} Bye";
    let span = extract(text, B, E).unwrap().unwrap();
    assert_eq!(span.payload(text), "World");
    assert_eq!(span.begin_index, 6);
    assert_eq!(span.end_index, 6 + B.len() + "World".len() + E.len());
    assert_eq!(&text[span.end_index..], " Bye");
}

#[test]
fn missing_begin_is_not_found() {
    assert_eq!(extract("Hello World{{/tw}}", B, E).unwrap(), None);
    assert_eq!(extract("", B, E).unwrap(), None);
}

#[test]
fn end_before_begin_is_not_found() {
    assert_eq!(extract("{{/tw}} then {{tw}} open", B, E).unwrap(), None);
}

#[test]
fn only_first_pair_is_used() {
    let text = "{{tw}}one{{/tw}} and {{tw}}two{{/tw}}";
    let span = extract(text, B, E).unwrap().unwrap();
    assert_eq!(span.payload(text), "one");
}

#[test]
fn second_begin_inside_payload_is_plain_text() {
    let text = "{{tw}}a{{tw}}b{{/tw}}";
    let span = extract(text, B, E).unwrap().unwrap();
    assert_eq!(span.begin_index, 0);
    assert_eq!(span.payload(text), "a{{tw}}b");
}

#[test]
fn identical_markers_do_not_overlap() {
    let text = "x|ab|y";
    let span = extract(text, "|", "|").unwrap().unwrap();
    assert_eq!(span.payload(text), "ab");

    // A single delimiter cannot close itself.
    assert_eq!(extract("x|ab", "|", "|").unwrap(), None);
}

#[test]
fn partial_marker_prefixes_are_skipped() {
    let text = "{{t {{tw} {{tw}}ok{{/t {{/tw}}";
    let span = extract(text, B, E).unwrap().unwrap();
    assert_eq!(span.payload(text), "ok{{/t ");
}

#[test]
fn empty_payload_is_found() {
    let text = "a{{tw}}{{/tw}}b";
    let span = extract(text, B, E).unwrap().unwrap();
    assert_eq!(span.payload(text), "");
    assert_eq!(span.marked_len(), B.len() + E.len());
}

#[test]
fn empty_markers_are_rejected() {
    assert!(matches!(
        extract("abc", "", E),
        Err(TypewriterError::Validation(_))
    ));
    assert!(matches!(
        extract("abc", B, ""),
        Err(TypewriterError::Validation(_))
    ));
}

#[test]
fn multibyte_offsets_stay_on_char_boundaries() {
    let text = "héllo «tw»wörld«/tw» ✓";
    let span = extract(text, "«tw»", "«/tw»").unwrap().unwrap();
    assert_eq!(span.payload(text), "wörld");
    assert!(text.is_char_boundary(span.begin_index));
    assert!(text.is_char_boundary(span.end_index));
    assert_eq!(splice(text, &span, "wö"), "héllo wö ✓");
}

#[test]
fn splice_accepts_output_longer_than_region() {
    let text = "A{{tw}}x{{/tw}}Z";
    let span = extract(text, B, E).unwrap().unwrap();
    let long = "0123456789".repeat(8);
    let out = splice(text, &span, &long);
    assert_eq!(out, format!("A{long}Z"));
}

#[test]
fn splice_with_empty_render_drops_region() {
    let text = "Hello {{tw}}World{{/tw}} Bye";
    let span = extract(text, B, E).unwrap().unwrap();
    assert_eq!(splice(text, &span, ""), "Hello  Bye");
}
