// SPDX-License-Identifier: MIT
//
// prism-color — the color value layer for prism.
//
// Every other crate in the workspace speaks in terms of the `Color` type
// defined here. Colors are plain 8-bit sRGB values with an alpha channel,
// validated at construction so a malformed hex string can never travel past
// the parsing boundary.
//
// Modules:
//
//   color   → Color, Hsl, hex parsing/formatting, lighten/darken/alpha
//   metrics → WCAG luminance and contrast, brightness heuristic, RGB distance
//   ansi    → 24-bit SGR escapes for printing swatches to a terminal
//
// All functions are pure. Nothing here allocates except hex formatting.

pub mod ansi;
pub mod color;
pub mod error;
pub mod metrics;

pub use color::{Color, Hsl};
pub use error::{ColorError, Result};
pub use metrics::{contrast_ratio, is_dark, readable_extreme, relative_luminance, rgb_distance};
