/// Convenience result type used across the crate.
pub type TypewriterResult<T> = Result<T, TypewriterError>;

/// Top-level error taxonomy used by filter APIs.
#[derive(thiserror::Error, Debug)]
pub enum TypewriterError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// The frame carries no producer, or one whose kind has no known text field.
    #[error("no recognized producer")]
    NoRecognizedProducer,

    /// The text field does not contain a begin marker followed by an end marker.
    #[error("marker pair not found")]
    MarkerNotFound,

    /// The reveal engine rejected the extracted payload.
    #[error("payload parse error: {0}")]
    PayloadParse(String),

    /// Rendered text did not fit the configured byte limit.
    #[error("rendered text needs {needed} bytes, limit is {limit}")]
    CapacityExceeded {
        /// Bytes the engine produced.
        needed: usize,
        /// Configured limit.
        limit: usize,
    },

    /// The delegated downstream render failed.
    #[error("downstream render error: {0}")]
    DownstreamRender(String),

    /// Errors when serializing or deserializing configuration and documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TypewriterError {
    /// Build a [`TypewriterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TypewriterError::PayloadParse`] value.
    pub fn payload_parse(msg: impl Into<String>) -> Self {
        Self::PayloadParse(msg.into())
    }

    /// Build a [`TypewriterError::DownstreamRender`] value.
    pub fn downstream(msg: impl Into<String>) -> Self {
        Self::DownstreamRender(msg.into())
    }

    /// Build a [`TypewriterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
