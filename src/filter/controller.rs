use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::filter::cache::{CacheDecision, FieldSnapshotCache};
use crate::filter::config::TypewriterConfig;
use crate::filter::patch::PatchGuard;
use crate::filter::state::{CachedField, FilterPhase, FilterState};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TypewriterError, TypewriterResult};
use crate::marker::extract::{extract, splice};
use crate::producer::{Producer, ProducerKind};
use crate::reveal::animation::fit_capacity;
use crate::reveal::engine::EngineFactory;
use crate::reveal::typewriter::TypeWriter;

/// One frame-image request as seen by the filter.
#[derive(Debug)]
pub struct FrameRequest<'a> {
    /// Playback position of the frame.
    pub position: FrameIndex,
    /// Producer that will render the frame, if the host attached one.
    pub producer: Option<&'a mut Producer>,
}

impl<'a> FrameRequest<'a> {
    /// Request for `position` rendered by `producer`.
    pub fn new(position: FrameIndex, producer: &'a mut Producer) -> Self {
        Self {
            position,
            producer: Some(producer),
        }
    }

    /// Request for a frame without a producer.
    pub fn without_producer(position: FrameIndex) -> Self {
        Self {
            position,
            producer: None,
        }
    }
}

/// Why a request was rendered with the field untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassthroughReason {
    /// No producer, or its text field is unset.
    NoRecognizedProducer,
    /// The field has no begin marker followed by an end marker.
    MarkerNotFound,
    /// The engine rejected the payload.
    PayloadParseFailure,
}

/// What the filter did to the producer for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The field was patched for the downstream render and restored afterwards.
    Patched {
        /// Position rendered into the field.
        position: FrameIndex,
        /// Byte length of the text spliced in place of the marked region.
        rendered_len: usize,
    },
    /// The downstream render saw the field unmodified.
    Passthrough(PassthroughReason),
}

impl FrameOutcome {
    /// Whether the field was patched.
    pub fn is_patched(&self) -> bool {
        matches!(self, Self::Patched { .. })
    }
}

/// Downstream output plus the filter's outcome for that request.
#[derive(Clone, Debug)]
pub struct FrameResult<T> {
    /// Whatever the downstream render returned.
    pub output: T,
    /// Patch or pass-through.
    pub outcome: FrameOutcome,
}

enum Prepared {
    Ready,
    Passthrough(PassthroughReason),
}

/// Typewriter reveal filter.
///
/// Each [`TypewriterFilter::process`] call runs the whole cycle (cache check, extraction, engine
/// render, patch, downstream render, restore) under one lock, so concurrent requests against the
/// same filter are serialized.
pub struct TypewriterFilter {
    state: Mutex<FilterState>,
}

impl std::fmt::Debug for TypewriterFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypewriterFilter")
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}

impl TypewriterFilter {
    /// Create a filter driving the default [`TypeWriter`] engine.
    pub fn new(config: TypewriterConfig) -> TypewriterResult<Self> {
        Self::with_engine_factory(config, TypeWriter::factory())
    }

    /// Create a filter whose engines are built by `factory`.
    pub fn with_engine_factory(
        config: TypewriterConfig,
        factory: EngineFactory,
    ) -> TypewriterResult<Self> {
        config.validate()?;
        Ok(Self {
            state: Mutex::new(FilterState::new(config, factory)),
        })
    }

    // A panic in the downstream render poisons the lock only after the patch guard restored the
    // field, so the state behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, FilterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current configuration.
    pub fn config(&self) -> TypewriterConfig {
        self.lock().config.clone()
    }

    /// Replace the configuration. It is picked up at the next cache rebuild.
    pub fn set_config(&self, config: TypewriterConfig) -> TypewriterResult<()> {
        config.validate()?;
        self.lock().config = config;
        Ok(())
    }

    /// Release the cached field and engine, as when the filter is detached.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.invalidate();
        state.producer_kind = ProducerKind::None;
    }

    /// Phase between requests.
    pub fn phase(&self) -> FilterPhase {
        self.lock().phase()
    }

    /// Last position rendered into the field since the cache was built.
    pub fn last_position(&self) -> Option<FrameIndex> {
        self.lock().last_position
    }

    /// Run one frame request.
    ///
    /// `downstream` is the render that consumes the producer. It is called exactly once: with the
    /// field patched when a marker pair is found and parsed, otherwise with the producer untouched.
    /// The original field is restored before this returns, including when `downstream` fails or
    /// panics. Errors from `downstream` are returned after the restore.
    #[tracing::instrument(skip_all, fields(position = request.position.0))]
    pub fn process<T, F>(
        &self,
        request: FrameRequest<'_>,
        downstream: F,
    ) -> TypewriterResult<FrameResult<T>>
    where
        F: FnOnce(Option<&mut Producer>) -> TypewriterResult<T>,
    {
        let mut guard = self.lock();
        let state = &mut *guard;
        let FrameRequest { position, producer } = request;

        if let Prepared::Passthrough(reason) = prepare(state, producer.as_deref())? {
            let output = downstream(producer)?;
            return Ok(FrameResult {
                output,
                outcome: FrameOutcome::Passthrough(reason),
            });
        }

        let mut rendered = state.animation.render(position)?;
        if let Some(limit) = state.config.max_rendered_bytes
            && let Err(e) = fit_capacity(&mut rendered, limit)
        {
            tracing::warn!(error = %e, "rendered text truncated");
        }
        state.last_position = Some(position);

        let (Some(producer), Some(cached)) = (producer, state.cached.as_ref()) else {
            return Err(TypewriterError::validation(
                "patch requested without producer or cached field",
            ));
        };

        let patched = splice(&cached.raw, &cached.span, &rendered);
        tracing::trace!(rendered_len = rendered.len(), "field patched");

        let output = {
            let mut patch = PatchGuard::apply(producer, &cached.name, &cached.raw, patched);
            downstream(Some(patch.producer()))
        }?;

        Ok(FrameResult {
            output,
            outcome: FrameOutcome::Patched {
                position,
                rendered_len: rendered.len(),
            },
        })
    }
}

fn prepare(state: &mut FilterState, producer: Option<&Producer>) -> TypewriterResult<Prepared> {
    match FieldSnapshotCache::check(state, producer) {
        CacheDecision::Reuse => return Ok(Prepared::Ready),
        CacheDecision::NoKnownField => {
            tracing::debug!(error = %TypewriterError::NoRecognizedProducer, "passing frame through");
            return Ok(Prepared::Passthrough(PassthroughReason::NoRecognizedProducer));
        }
        CacheDecision::Rebuild => {}
    }

    let Some(producer) = producer else {
        return Ok(Prepared::Passthrough(PassthroughReason::NoRecognizedProducer));
    };
    let name = producer.text_field_name();
    let Some(raw) = producer.field(name) else {
        return Ok(Prepared::Passthrough(PassthroughReason::NoRecognizedProducer));
    };
    let raw = raw.to_owned();

    state.invalidate();
    state.producer_kind = producer.kind();

    let Some(span) = extract(&raw, &state.config.begin, &state.config.end)? else {
        tracing::debug!(error = %TypewriterError::MarkerNotFound, field = name, "passing frame through");
        return Ok(Prepared::Passthrough(PassthroughReason::MarkerNotFound));
    };

    match state.animation.rebuild(span.payload(&raw), &state.config.engine) {
        Ok(()) => {}
        Err(e @ TypewriterError::PayloadParse(_)) => {
            tracing::warn!(error = %e, "reveal disabled for this field");
            return Ok(Prepared::Passthrough(PassthroughReason::PayloadParseFailure));
        }
        Err(e) => return Err(e),
    }

    tracing::debug!(
        field = name,
        begin = span.begin_index,
        end = span.end_index,
        payload_len = span.payload.len(),
        "reveal cache rebuilt"
    );
    state.cached = Some(CachedField {
        name: name.to_owned(),
        raw,
        span,
    });
    Ok(Prepared::Ready)
}

#[cfg(test)]
#[path = "../../tests/unit/filter/controller.rs"]
mod tests;
