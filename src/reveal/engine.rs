use std::sync::Arc;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::TypewriterResult;

/// Granularity at which the default engine reveals text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealUnit {
    /// One character per step.
    #[default]
    Char,
    /// One word (with its trailing whitespace) per step.
    Word,
    /// One line (with its trailing newline) per step.
    Line,
}

/// Options handed to the engine factory on every rebuild.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineOpts {
    /// Reveal granularity.
    pub unit: RevealUnit,
    /// Frames between two reveal steps.
    pub step_frames: u32,
    /// Maximum random deviation, in frames, applied to each step.
    pub sigma: u32,
    /// Seed for the step jitter.
    pub seed: u64,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            unit: RevealUnit::Char,
            step_frames: 1,
            sigma: 0,
            seed: 0,
        }
    }
}

/// Text-reveal engine driven by [`crate::AnimationState`].
///
/// An engine is fed one payload, parsed once, then rendered for arbitrary frame positions. For a
/// fixed payload the output must be a pure function of the position, and its visible length must
/// not decrease as the position grows.
pub trait RevealEngine: Send {
    /// Store the raw payload to be parsed.
    fn set_payload(&mut self, payload: &str);

    /// Parse the stored payload into the engine's private representation.
    fn parse(&mut self) -> TypewriterResult<()>;

    /// Append the text visible at `position` to `out`.
    fn render_into(&self, position: FrameIndex, out: &mut String);
}

/// Builds a fresh engine for every cache rebuild.
pub type EngineFactory = Arc<dyn Fn(&EngineOpts) -> Box<dyn RevealEngine> + Send + Sync>;
