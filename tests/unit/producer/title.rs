use super::*;

#[test]
fn new_sets_markup_field() {
    let t = TitleProducer::new("<title>hi</title>");
    assert_eq!(t.text(), Some("<title>hi</title>"));
    assert_eq!(t.get(TITLE_TEXT_FIELD), Some("<title>hi</title>"));
    assert_eq!(t.get("missing"), None);
    assert!(!t.force_reload());
}

#[test]
fn layout_is_cached_until_text_changes() {
    let mut t = TitleProducer::new("a\nb");
    assert_eq!(t.layout().lines, vec!["a".to_owned(), "b".to_owned()]);
    let _ = t.layout();
    assert_eq!(t.layout_builds(), 1);

    t.set(TITLE_TEXT_FIELD, "c".to_owned());
    assert_eq!(t.layout().source, "c");
    assert_eq!(t.layout_builds(), 2);
}

#[test]
fn force_reload_rebuilds_same_text() {
    let mut t = TitleProducer::new("same");
    let _ = t.layout();
    t.set_force_reload(true);
    let _ = t.layout();
    assert_eq!(t.layout_builds(), 2);

    t.set_force_reload(false);
    let _ = t.layout();
    assert_eq!(t.layout_builds(), 2);
}

#[test]
fn unset_markup_lays_out_empty() {
    let mut t = TitleProducer::default();
    assert_eq!(t.text(), None);
    assert!(t.layout().lines.is_empty());
}
