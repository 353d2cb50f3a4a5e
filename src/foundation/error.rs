/// Convenience result type used across photocal.
pub type PhotocalResult<T> = Result<T, PhotocalError>;

/// Top-level error taxonomy used by the page-render APIs.
#[derive(thiserror::Error, Debug)]
pub enum PhotocalError {
    /// A format letter that no renderer was registered for.
    #[error("unknown box type '{0}'")]
    UnknownBoxType(char),

    /// A format specification with no box letters at all.
    #[error("format specification contains no boxes")]
    EmptyFormat,

    /// A degenerate or negative-size rectangle reached a renderer.
    #[error("invalid rectangle: {0}")]
    InvalidRectangle(String),

    /// Invalid user-provided configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Font discovery or font resolution failures.
    #[error("font error: {0}")]
    Font(String),

    /// Failures in the raster canvas or text shaping layer.
    #[error("canvas error: {0}")]
    Canvas(String),

    /// Invalid event data.
    #[error("event error: {0}")]
    Events(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PhotocalError {
    /// Build a [`PhotocalError::InvalidRectangle`] value.
    pub fn invalid_rect(msg: impl Into<String>) -> Self {
        Self::InvalidRectangle(msg.into())
    }

    /// Build a [`PhotocalError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PhotocalError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`PhotocalError::Canvas`] value.
    pub fn canvas(msg: impl Into<String>) -> Self {
        Self::Canvas(msg.into())
    }

    /// Build a [`PhotocalError::Events`] value.
    pub fn events(msg: impl Into<String>) -> Self {
        Self::Events(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
