use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::filter::config::TypewriterConfig;
use crate::filter::controller::{FrameOutcome, FrameRequest, TypewriterFilter};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TypewriterError, TypewriterResult};
use crate::producer::Producer;
use crate::producer::title::TitleProducer;

/// JSON-facing title plus the filter configuration to animate it with.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleDocument {
    /// Raw title markup containing the marker pair.
    pub text: String,
    /// Filter configuration.
    #[serde(default)]
    pub config: TypewriterConfig,
}

impl TitleDocument {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TypewriterResult<Self> {
        let doc: Self = serde_json::from_reader(r)
            .map_err(|e| TypewriterError::serde(format!("parse title document JSON: {e}")))?;
        doc.config.validate()?;
        Ok(doc)
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TypewriterResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TypewriterError::validation(format!("open title document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Markup a title producer lays out at each of `positions`.
    ///
    /// Runs a fresh filter over one producer, so the cache is built once and reused for every
    /// position.
    pub fn render_frames(
        &self,
        positions: impl IntoIterator<Item = FrameIndex>,
    ) -> TypewriterResult<Vec<(FrameIndex, String, FrameOutcome)>> {
        let filter = TypewriterFilter::new(self.config.clone())?;
        let mut producer = Producer::Title(TitleProducer::new(self.text.clone()));

        let mut out = Vec::new();
        for position in positions {
            let res = filter.process(FrameRequest::new(position, &mut producer), |p| {
                let title = p
                    .and_then(Producer::as_title_mut)
                    .ok_or_else(|| TypewriterError::downstream("frame has no title producer"))?;
                Ok(title.layout().source.clone())
            })?;
            out.push((position, res.output, res.outcome));
        }
        Ok(out)
    }
}
