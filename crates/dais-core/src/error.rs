use thiserror::Error;

/// Construction-time validation errors exposed by `dais-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("slide title cannot be empty")]
    EmptySlideTitle,
    #[error("presentation has no slides")]
    EmptyDeck,

    #[error("invalid stage expansion '{value}', expected one of all, final")]
    InvalidExpansion { value: String },
    #[error("invalid reveal mode '{value}', expected one of replace, append, accumulate")]
    InvalidRevealMode { value: String },
}

/// Top-level error type for presenter operations.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("stage renderer failed: {message}")]
    Renderer { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DeckError {
    /// Wrap a failure raised inside a deferred stage renderer.
    pub fn renderer(message: impl Into<String>) -> Self {
        Self::Renderer {
            message: message.into(),
        }
    }
}
