//! Display orderings for palettes.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use prism_color::{Color, relative_luminance};
use serde::{Deserialize, Serialize};

use crate::error::ParseSortError;

/// How to order a palette for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    /// Hue ascending, starting at red.
    Hue,
    /// Most saturated first.
    Saturation,
    /// Darkest (HSL lightness) first.
    Lightness,
    /// Darkest (WCAG luminance) first.
    Luminance,
    /// Keep input order.
    #[default]
    None,
}

impl SortMethod {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
            Self::Luminance => "luminance",
            Self::None => "none",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Hue,
            Self::Saturation,
            Self::Lightness,
            Self::Luminance,
            Self::None,
        ]
    }

    fn compare(self, a: Color, b: Color) -> Ordering {
        match self {
            Self::Hue => a.to_hsl().h.total_cmp(&b.to_hsl().h),
            Self::Saturation => b.to_hsl().s.total_cmp(&a.to_hsl().s),
            Self::Lightness => a.to_hsl().l.total_cmp(&b.to_hsl().l),
            Self::Luminance => relative_luminance(a).total_cmp(&relative_luminance(b)),
            Self::None => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortMethod {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|method| method.name() == wanted)
            .copied()
            .ok_or_else(|| ParseSortError(s.to_string()))
    }
}

/// A sorted palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub colors: Vec<Color>,
    /// The palette was non-empty and already in this order. Always false
    /// for [`SortMethod::None`].
    pub unchanged: bool,
}

/// Stable-sort `colors` by `method`.
#[must_use]
pub fn sort_colors(colors: &[Color], method: SortMethod) -> SortOutcome {
    if method == SortMethod::None {
        return SortOutcome {
            colors: colors.to_vec(),
            unchanged: false,
        };
    }

    let mut sorted = colors.to_vec();
    sorted.sort_by(|&a, &b| method.compare(a, b));
    let unchanged = !colors.is_empty() && sorted == colors;

    SortOutcome {
        colors: sorted,
        unchanged,
    }
}
