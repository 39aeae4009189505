// SPDX-License-Identifier: MIT
//
// Perceptual metrics — WCAG luminance/contrast and cheap distance heuristics.
//
// Two very different kinds of measurement live here:
//
// - `relative_luminance` / `contrast_ratio` follow the WCAG 2.x definitions
//   and are what accessibility guarantees are checked against.
// - `is_dark` and `rgb_distance` are fast heuristics. `is_dark` only picks a
//   direction (lighten vs darken); `rgb_distance` is plain Euclidean distance
//   in 0–255 RGB space. It is good enough to spread a palette apart and to
//   flag near-duplicates, but it is not a perceptual metric: equal RGB
//   distances do not look equally different, especially near black and in
//   saturated greens.

use crate::color::Color;

/// WCAG 2.0 sRGB linearization threshold.
const LINEAR_THRESHOLD: f64 = 0.039_28;

/// Convert one 8-bit sRGB channel to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG, in [0, 1].
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Alpha is ignored.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let r = srgb_to_linear(color.r);
    let g = srgb_to_linear(color.g);
    let b = srgb_to_linear(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG contrast ratio between two colors, in [1, 21].
///
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Black or white, whichever contrasts more with `background`.
///
/// White wins ties. This is the last resort for any text that must stay
/// readable.
#[must_use]
pub fn readable_extreme(background: Color) -> Color {
    if contrast_ratio(Color::WHITE, background) >= contrast_ratio(Color::BLACK, background) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Perceived-brightness heuristic: `(299R + 587G + 114B) / 255000 < 0.5`.
///
/// Cheaper than luminance and only used to decide which way to push a
/// color, never for contrast compliance.
#[must_use]
pub fn is_dark(color: Color) -> bool {
    let brightness = f64::from(color.r).mul_add(
        299.0,
        f64::from(color.g).mul_add(587.0, f64::from(color.b) * 114.0),
    ) / 255_000.0;
    brightness < 0.5
}

/// Euclidean distance between two colors in raw RGB space, in [0, ~441.7].
///
/// An approximation, not a perceptual difference (no CIE Lab). Alpha is
/// ignored.
#[must_use]
pub fn rgb_distance(a: Color, b: Color) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    db.mul_add(db, dr.mul_add(dr, dg * dg)).sqrt()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
