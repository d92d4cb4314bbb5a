//! Error types for the conversion pipeline

/// Everything that can go wrong while enhancing or rendering an image.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AsciiError {
    /// A setting is outside the domain the pipeline can work with
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The image has nothing to sample
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl AsciiError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        AsciiError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AsciiError>;
