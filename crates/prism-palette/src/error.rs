//! Parse errors for the palette enumerations.

use thiserror::Error;

/// A harmony scheme name that is not one of the four known schemes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "unknown harmony scheme: {0:?} (expected complementary, triadic, analogous or split-complementary)"
)]
pub struct ParseSchemeError(pub String);

/// A sort method name that is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort method: {0:?} (expected hue, saturation, lightness, luminance or none)")]
pub struct ParseSortError(pub String);
