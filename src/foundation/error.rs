/// Convenience result type used across the overlay engine.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Top-level error taxonomy used by engine APIs.
///
/// None of these are fatal to a session: callers degrade to defaults, fallbacks or per-item
/// log entries.
#[derive(thiserror::Error, Debug)]
pub enum OverlayError {
    /// Invalid user-provided settings or requests.
    #[error("validation error: {0}")]
    Validation(String),

    /// The image service could not report pixel dimensions.
    #[error("dimensions error: {0}")]
    Dimensions(String),

    /// The image service failed to compose a preview or final image.
    #[error("render error: {0}")]
    Render(String),

    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(String),

    /// Errors when serializing or deserializing settings and plans.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OverlayError {
    /// Build an [`OverlayError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OverlayError::Dimensions`] value.
    pub fn dimensions(msg: impl Into<String>) -> Self {
        Self::Dimensions(msg.into())
    }

    /// Build an [`OverlayError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`OverlayError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build an [`OverlayError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
