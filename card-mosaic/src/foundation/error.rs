/// Result alias used throughout the crate.
pub type MosaicResult<T> = Result<T, MosaicError>;

/// Terminal failure of a generation run.
#[derive(thiserror::Error, Debug)]
pub enum MosaicError {
    /// No input cards were located.
    #[error("not found: {0}")]
    NotFound(String),

    /// Options that can never produce an image.
    #[error("validation error: {0}")]
    Validation(String),

    /// Decode, encode or filesystem failure.
    #[error("io error: {context}")]
    Io {
        /// What was being read or written.
        context: String,
        /// Underlying failure.
        #[source]
        source: anyhow::Error,
    },

    /// Any other contextual failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MosaicError {
    /// Build a [`MosaicError::NotFound`].
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`MosaicError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MosaicError::Io`] wrapping `source`.
    pub fn io(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::Io {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Return `true` for [`MosaicError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
