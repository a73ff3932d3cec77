/// Convenience result type used across cardflip.
pub type FlipResult<T> = Result<T, FlipError>;

/// Top-level error taxonomy used by controller APIs.
#[derive(thiserror::Error, Debug)]
pub enum FlipError {
    /// Invalid caller-provided configuration or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while scheduling or sampling transition timing.
    #[error("timing error: {0}")]
    Timing(String),

    /// Wrapped lower-level error from dependencies or the host.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlipError {
    /// Build a [`FlipError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlipError::Timing`] value.
    pub fn timing(msg: impl Into<String>) -> Self {
        Self::Timing(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
