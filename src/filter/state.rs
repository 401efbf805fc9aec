use crate::filter::config::TypewriterConfig;
use crate::foundation::core::FrameIndex;
use crate::marker::extract::MarkerSpan;
use crate::producer::ProducerKind;
use crate::reveal::animation::AnimationState;
use crate::reveal::engine::EngineFactory;

/// Observable phase of a filter between requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterPhase {
    /// Nothing cached; the next request extracts from scratch.
    Idle,
    /// A field snapshot, marker span and parsed engine are cached.
    CacheValid,
}

/// Snapshot of the raw field the cached engine was built from.
#[derive(Clone, Debug)]
pub(crate) struct CachedField {
    pub(crate) name: String,
    pub(crate) raw: String,
    pub(crate) span: MarkerSpan,
}

/// Per-attachment state, exclusively owned by one filter.
///
/// `cached` is `Some` exactly when the state is initialized; its span always indexes into its own
/// `raw` snapshot.
#[derive(Debug)]
pub(crate) struct FilterState {
    pub(crate) config: TypewriterConfig,
    pub(crate) producer_kind: ProducerKind,
    pub(crate) cached: Option<CachedField>,
    pub(crate) animation: AnimationState,
    pub(crate) last_position: Option<FrameIndex>,
}

impl FilterState {
    pub(crate) fn new(config: TypewriterConfig, factory: EngineFactory) -> Self {
        Self {
            config,
            producer_kind: ProducerKind::None,
            cached: None,
            animation: AnimationState::new(factory),
            last_position: None,
        }
    }

    pub(crate) fn initialized(&self) -> bool {
        self.cached.is_some()
    }

    pub(crate) fn phase(&self) -> FilterPhase {
        if self.initialized() {
            FilterPhase::CacheValid
        } else {
            FilterPhase::Idle
        }
    }

    /// Drop the cached snapshot and the engine built from it.
    pub(crate) fn invalidate(&mut self) {
        self.cached = None;
        self.animation.clear();
        self.last_position = None;
    }
}
