//! Error types for theme generation.

use thiserror::Error;

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Error, Debug)]
pub enum ThemeError {
    /// Fewer colors than a theme needs reached the role mapper.
    #[error(
        "not enough colors to generate a theme: got {actual}, need at least {required}; \
         select more or larger image regions"
    )]
    InsufficientPalette { actual: usize, required: usize },

    /// A theme format name that is neither `vscode` nor `zed`.
    #[error("unknown theme format: {0:?} (expected vscode or zed)")]
    UnknownFormat(String),

    /// Rendering the document to JSON failed.
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] serde_json::Error),
}
