//! Frame-synchronous typewriter reveal for title producers.
//!
//! A title's raw markup carries one region delimited by a begin and an end marker (by default
//! `{{tw}}` and `{{/tw}}`). For every frame request the filter replaces that region with the part
//! of its payload that should be visible at the frame's playback position, lets exactly one
//! downstream render observe the patched markup, and writes the original markup back before
//! returning.
//!
//! # Request cycle
//!
//! 1. **Check**: compare the producer's field with the cached snapshot (exact equality).
//! 2. **Rebuild** (on change): locate the first marker pair, feed the payload to a fresh
//!    [`RevealEngine`] and parse it once.
//! 3. **Render**: ask the engine for the text visible at the frame position.
//! 4. **Patch**: splice the rendered text over the marked region and raise the reload signal.
//! 5. **Delegate**: run the downstream render against the patched producer.
//! 6. **Restore**: write the original field back and clear the reload signal, on every exit path.
//!
//! When no producer is attached, no marker pair is present, or the payload does not parse, the
//! request passes through and the downstream render sees the field unmodified.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod filter;
mod foundation;
mod marker;
mod producer;
mod reveal;
mod title_doc;

pub use filter::config::{DEFAULT_BEGIN_MARKER, DEFAULT_END_MARKER, TypewriterConfig};
pub use filter::controller::{
    FrameOutcome, FrameRequest, FrameResult, PassthroughReason, TypewriterFilter,
};
pub use filter::state::FilterPhase;
pub use foundation::core::{FrameIndex, FrameRange};
pub use foundation::error::{TypewriterError, TypewriterResult};
pub use marker::extract::{MarkerSpan, extract, splice};
pub use producer::title::{TITLE_TEXT_FIELD, TitleLayout, TitleProducer};
pub use producer::{Producer, ProducerKind};
pub use reveal::animation::AnimationState;
pub use reveal::engine::{EngineFactory, EngineOpts, RevealEngine, RevealUnit};
pub use reveal::typewriter::TypeWriter;
pub use title_doc::TitleDocument;
