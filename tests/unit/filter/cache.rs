use super::*;
use crate::filter::config::TypewriterConfig;
use crate::filter::state::CachedField;
use crate::marker::extract::extract;
use crate::producer::ProducerKind;
use crate::producer::title::TitleProducer;
use crate::reveal::typewriter::TypeWriter;

const TEXT: &str = "Hello {{tw}}World{{/tw}} Bye";

fn state_cached_on(text: &str) -> FilterState {
    let mut st = FilterState::new(TypewriterConfig::default(), TypeWriter::factory());
    let span = extract(text, "{{tw}}", "{{/tw}}").unwrap().unwrap();
    st.producer_kind = ProducerKind::Title;
    st.cached = Some(CachedField {
        name: "xmldata".to_owned(),
        raw: text.to_owned(),
        span,
    });
    st
}

#[test]
fn no_producer_is_no_known_field() {
    let st = state_cached_on(TEXT);
    assert_eq!(
        FieldSnapshotCache::check(&st, None),
        CacheDecision::NoKnownField
    );
}

#[test]
fn unset_field_is_no_known_field() {
    let st = FilterState::new(TypewriterConfig::default(), TypeWriter::factory());
    let p = Producer::Title(TitleProducer::default());
    assert_eq!(
        FieldSnapshotCache::check(&st, Some(&p)),
        CacheDecision::NoKnownField
    );
}

#[test]
fn uninitialized_state_rebuilds() {
    let st = FilterState::new(TypewriterConfig::default(), TypeWriter::factory());
    let p = Producer::Title(TitleProducer::new(TEXT));
    assert_eq!(
        FieldSnapshotCache::check(&st, Some(&p)),
        CacheDecision::Rebuild
    );
}

#[test]
fn identical_field_is_reused() {
    let st = state_cached_on(TEXT);
    let p = Producer::Title(TitleProducer::new(TEXT));
    assert_eq!(
        FieldSnapshotCache::check(&st, Some(&p)),
        CacheDecision::Reuse
    );
}

#[test]
fn one_character_edit_rebuilds() {
    let st = state_cached_on(TEXT);
    let p = Producer::Title(TitleProducer::new("Hello {{tw}}World{{/tw}} Bye!"));
    assert_eq!(
        FieldSnapshotCache::check(&st, Some(&p)),
        CacheDecision::Rebuild
    );
}

#[test]
fn kind_mismatch_rebuilds() {
    let mut st = state_cached_on(TEXT);
    st.producer_kind = ProducerKind::None;
    let p = Producer::Title(TitleProducer::new(TEXT));
    assert_eq!(
        FieldSnapshotCache::check(&st, Some(&p)),
        CacheDecision::Rebuild
    );
}
