use crate::filter::state::FilterState;
use crate::producer::Producer;

/// Outcome of comparing a producer's current field with the cached snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CacheDecision {
    /// Cached span and engine are valid for the current field.
    Reuse,
    /// The field changed (or nothing is cached); extract and parse again.
    Rebuild,
    /// No producer, or its text field has never been set.
    NoKnownField,
}

/// Stateless validity check for [`FilterState`]'s cached field.
pub(crate) struct FieldSnapshotCache;

impl FieldSnapshotCache {
    /// Decide whether the cached state still matches `producer`'s text field.
    ///
    /// Comparison is exact string equality, so any external edit between frames forces a rebuild.
    pub(crate) fn check(state: &FilterState, producer: Option<&Producer>) -> CacheDecision {
        let Some(producer) = producer else {
            return CacheDecision::NoKnownField;
        };
        let name = producer.text_field_name();
        let Some(current) = producer.field(name) else {
            return CacheDecision::NoKnownField;
        };

        match &state.cached {
            Some(c)
                if state.producer_kind == producer.kind() && c.name == name && c.raw == current =>
            {
                CacheDecision::Reuse
            }
            _ => CacheDecision::Rebuild,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/cache.rs"]
mod tests;
