//! Contrast repair — pushing a color away from its background.
//!
//! Two tiers:
//!
//! - [`adjust_for_contrast`] is best-effort. It nudges the color in fixed
//!   steps and returns whatever it reached, passing or not.
//! - [`ensure_readable_contrast`] always yields a readable color, falling
//!   back to black or white.

use prism_color::{Color, contrast_ratio, is_dark, readable_extreme};

/// WCAG AA for normal text.
pub const DEFAULT_MIN_CONTRAST: f64 = 4.5;

/// Step budget for [`adjust_for_contrast`].
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Fraction moved toward white/black per step.
const STEP: f64 = 0.1;

/// Lighten (on a dark background) or darken (on a light one) `color` in
/// 10% steps until it reaches `min_contrast` against `background` or
/// `max_iterations` steps have been taken.
///
/// The result may still fall short of `min_contrast`; saturated colors on
/// mid-tone backgrounds often cannot reach it.
#[must_use]
pub fn adjust_for_contrast(
    color: Color,
    background: Color,
    min_contrast: f64,
    max_iterations: usize,
) -> Color {
    let dark_background = is_dark(background);
    let mut adjusted = color;

    for _ in 0..max_iterations {
        if contrast_ratio(adjusted, background) >= min_contrast {
            break;
        }
        adjusted = if dark_background {
            adjusted.lighten(STEP)
        } else {
            adjusted.darken(STEP)
        };
    }

    adjusted
}

/// Return `proposed` if it reaches `min_contrast` against `background`,
/// otherwise whichever of white or black contrasts more (white on ties).
#[must_use]
pub fn ensure_readable_contrast(proposed: Color, background: Color, min_contrast: f64) -> Color {
    if contrast_ratio(proposed, background) >= min_contrast {
        return proposed;
    }
    readable_extreme(background)
}
