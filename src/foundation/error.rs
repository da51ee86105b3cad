/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by fallible engine construction and configuration.
///
/// Per-frame work never returns these: frame-time failures are absorbed and retried on the next
/// frame or resize.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// A caller-provided value violated a documented constraint.
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface could not be created at the requested size.
    #[error("surface error: {0}")]
    Surface(String),

    /// Configuration could not be parsed or read.
    #[error("config error: {0}")]
    Config(String),

    /// Any other error source.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// Build an [`EngineError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EngineError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build an [`EngineError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
