//! Error types for color parsing.

use thiserror::Error;

/// Result type alias for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors produced while turning text into a [`Color`](crate::Color).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input is not a `#RRGGBB` hex color (the leading `#` is optional).
    #[error("invalid hex color: {input:?} (expected #RRGGBB)")]
    Format { input: String },
}

impl ColorError {
    pub(crate) fn format(input: &str) -> Self {
        Self::Format {
            input: input.to_string(),
        }
    }
}
