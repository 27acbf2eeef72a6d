/// Convenience result type used across Tickflow.
pub type TickflowResult<T> = Result<T, TickflowError>;

/// Top-level error taxonomy used by the sequencing APIs.
#[derive(thiserror::Error, Debug)]
pub enum TickflowError {
    /// Invalid user-provided configuration (e.g. an empty timer chain).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing timer specs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TickflowError {
    /// Build a [`TickflowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TickflowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
