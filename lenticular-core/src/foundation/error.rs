/// Convenience result type used across the engine.
pub type LenticularResult<T> = Result<T, LenticularError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LenticularError {
    /// Fewer than two source images were supplied.
    #[error("insufficient sources: {0}")]
    InsufficientSources(String),

    /// Non-positive pitch/resolution or otherwise malformed input data.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A source image with zero width or height.
    #[error("empty geometry: {0}")]
    EmptyGeometry(String),

    /// Input bytes that could not be decoded as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LenticularError {
    /// Build a [`LenticularError::InsufficientSources`] value.
    pub fn insufficient_sources(msg: impl Into<String>) -> Self {
        Self::InsufficientSources(msg.into())
    }

    /// Build a [`LenticularError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`LenticularError::EmptyGeometry`] value.
    pub fn empty_geometry(msg: impl Into<String>) -> Self {
        Self::EmptyGeometry(msg.into())
    }

    /// Build a [`LenticularError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
