use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TypewriterError, TypewriterResult};
use crate::reveal::engine::{EngineFactory, EngineOpts, RevealEngine};

/// Owns the reveal engine instance built from the current payload.
pub struct AnimationState {
    factory: EngineFactory,
    engine: Option<Box<dyn RevealEngine>>,
}

impl std::fmt::Debug for AnimationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationState")
            .field("ready", &self.is_ready())
            .finish_non_exhaustive()
    }
}

impl AnimationState {
    /// Create an empty state that builds engines with `factory`.
    pub fn new(factory: EngineFactory) -> Self {
        Self {
            factory,
            engine: None,
        }
    }

    /// Whether a parsed engine is available for rendering.
    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    /// Replace the engine with a fresh one parsed from `payload`.
    ///
    /// The previous engine is dropped first. On parse failure no engine is kept.
    pub fn rebuild(&mut self, payload: &str, opts: &EngineOpts) -> TypewriterResult<()> {
        self.engine = None;

        let mut engine = (self.factory)(opts);
        engine.set_payload(payload);
        engine.parse()?;

        self.engine = Some(engine);
        Ok(())
    }

    /// Render the text visible at `position` into a new buffer.
    pub fn render(&self, position: FrameIndex) -> TypewriterResult<String> {
        let engine = self
            .engine
            .as_ref()
            .ok_or_else(|| TypewriterError::validation("animation rendered before rebuild"))?;
        let mut out = String::new();
        engine.render_into(position, &mut out);
        Ok(out)
    }

    /// Drop the engine and its parsed state.
    pub fn clear(&mut self) {
        self.engine = None;
    }
}

/// Truncate `text` to at most `limit` bytes, backing off to a character boundary.
///
/// Returns [`TypewriterError::CapacityExceeded`] describing the overflow when truncation happened;
/// `text` is always left valid.
pub(crate) fn fit_capacity(text: &mut String, limit: usize) -> TypewriterResult<()> {
    let needed = text.len();
    if needed <= limit {
        return Ok(());
    }
    let mut cut = limit;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    Err(TypewriterError::CapacityExceeded { needed, limit })
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/animation.rs"]
mod tests;
