use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{TypewriterError, TypewriterResult};
use crate::reveal::engine::EngineOpts;

/// Default begin marker.
pub const DEFAULT_BEGIN_MARKER: &str = "{{tw}}";
/// Default end marker.
pub const DEFAULT_END_MARKER: &str = "{{/tw}}";

/// Filter configuration.
///
/// Markers and engine options are read when the cached field is rebuilt, not on every frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypewriterConfig {
    /// Marker opening the animated region.
    #[serde(rename = "beg", alias = "begin")]
    pub begin: String,
    /// Marker closing the animated region.
    pub end: String,
    /// Upper bound, in bytes, for one rendered payload. `None` means unbounded.
    pub max_rendered_bytes: Option<usize>,
    /// Options handed to the reveal engine.
    pub engine: EngineOpts,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            begin: DEFAULT_BEGIN_MARKER.to_owned(),
            end: DEFAULT_END_MARKER.to_owned(),
            max_rendered_bytes: None,
            engine: EngineOpts::default(),
        }
    }
}

impl TypewriterConfig {
    /// Build a config with custom markers and default engine options.
    pub fn with_markers(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
            ..Self::default()
        }
    }

    /// Reject empty markers.
    pub fn validate(&self) -> TypewriterResult<()> {
        if self.begin.is_empty() {
            return Err(TypewriterError::validation("begin marker must not be empty"));
        }
        if self.end.is_empty() {
            return Err(TypewriterError::validation("end marker must not be empty"));
        }
        Ok(())
    }

    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TypewriterResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| TypewriterError::serde(format!("parse typewriter config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TypewriterResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TypewriterError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/config.rs"]
mod tests;
