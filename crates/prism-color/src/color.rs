// SPDX-License-Identifier: MIT
//
// prism color system — 8-bit sRGB values with hex and HSL conversions.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// A palette is extracted from photographs, so the natural unit is the byte
// triple a pixel already is. Lightening and darkening are linear moves
// toward 255 or 0 per channel: not gamma-aware, cheap, and predictable when
// building theme role tables. HSL is a transient view used only for hue
// rotation; it is never stored.
//
// Conversion pipeline:
//
//   "#rrggbb" ↔ (r, g, b) ↔ HSL (h, s, l ∈ [0, 1])

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColorError, Result};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with 8 bits per channel and an 8-bit alpha.
///
/// Construction from text goes through [`Color::parse`], which only accepts
/// well-formed hex, so every `Color` in the system is a valid color.
/// Colors are opaque unless an alpha is attached with
/// [`with_alpha`](Self::with_alpha).
///
/// # Examples
///
/// ```
/// use prism_color::Color;
///
/// let red = Color::parse("#FF0000").unwrap();
/// assert_eq!(red, Color::rgb(255, 0, 0));
///
/// let hsl = red.to_hsl();
/// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));
///
/// // Linear channel moves toward white / black.
/// assert_eq!(red.lighten(0.5).to_hex(), "#ff7f7f");
/// assert_eq!(red.darken(0.5).to_hex(), "#7f0000");
///
/// // Alpha suffix as used by editor themes.
/// assert_eq!(red.with_alpha(0x60).to_hex(), "#ff000060");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity: 0 (fully transparent) to 255 (fully opaque).
    pub alpha: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 255 }
    }

    /// Create a color from 8-bit channels and alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self { r, g, b, alpha }
    }

    /// Parse a `#RRGGBB` hex color. The `#` is optional and digits are
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Format`] for anything that is not exactly six
    /// hex digits, including the short `#RGB` form and alpha suffixes.
    pub fn parse(s: &str) -> Result<Self> {
        let (r, g, b) = hex_to_rgb(s)?;
        Ok(Self::rgb(r, g, b))
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`. Used when reading finished theme
    /// documents, where roles carry an alpha suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Format`] if the input is neither form.
    pub fn parse_with_alpha(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
        match digits.len() {
            6 => Self::parse(s),
            8 => {
                let r = parse_hex_byte(&digits[0..2]);
                let g = parse_hex_byte(&digits[2..4]);
                let b = parse_hex_byte(&digits[4..6]);
                let a = parse_hex_byte(&digits[6..8]);
                match (r, g, b, a) {
                    (Some(r), Some(g), Some(b), Some(a)) => Ok(Self::rgba(r, g, b, a)),
                    _ => Err(ColorError::format(s)),
                }
            }
            _ => Err(ColorError::format(s)),
        }
    }

    /// Create an opaque color from HSL components.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        Self::rgb(r, g, b)
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent black (`#00000000`).
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// Whether this color is fully opaque.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.alpha == 255
    }

    /// Return the opaque version of this color.
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    // ─── Channel Operations ──────────────────────────────────────────────
    //
    // Linear interpolation per channel, floored and clamped. Alpha is kept.

    /// Move each channel `amount` of the way toward 255.
    ///
    /// `amount` is a fraction: 0.0 leaves the color alone, 1.0 yields white.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        let up = |c: u8| {
            let c = f64::from(c);
            to_u8((255.0 - c).mul_add(amount, c).floor())
        };
        Self {
            r: up(self.r),
            g: up(self.g),
            b: up(self.b),
            ..self
        }
    }

    /// Scale each channel by `1 - amount`, moving it toward 0.
    ///
    /// `amount` is a fraction: 0.0 leaves the color alone, 1.0 yields black.
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        let factor = 1.0 - amount;
        let down = |c: u8| to_u8((f64::from(c) * factor).floor());
        Self {
            r: down(self.r),
            g: down(self.g),
            b: down(self.b),
            ..self
        }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// The `(r, g, b)` channel triple.
    #[inline]
    #[must_use]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert to HSL with every component in [0, 1].
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Lowercase hex: `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b, alpha } = self;
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{alpha:02x}")
        }
    }

    /// Uppercase hex, same shape as [`to_hex`](Self::to_hex).
    #[must_use]
    pub fn to_hex_upper(self) -> String {
        self.to_hex().to_ascii_uppercase()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_with_alpha(&s).map_err(serde::de::Error::custom)
    }
}

// ─── HSL ─────────────────────────────────────────────────────────────────────

/// Hue, saturation, lightness — each normalized to [0, 1].
///
/// Hue is a fraction of a full turn and wraps modulo 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Rotate the hue by `turns` (1.0 = full circle), wrapping into [0, 1).
    #[must_use]
    pub fn rotate(self, turns: f64) -> Self {
        Self {
            h: normalize_hue(self.h + turns),
            ..self
        }
    }
}

/// Wrap a hue fraction into [0, 1).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if h >= 1.0 { 0.0 } else { h }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────

/// Parse `#RRGGBB` (the `#` is optional) into channel bytes.
///
/// # Errors
///
/// Returns [`ColorError::Format`] unless the input is exactly six hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    if digits.len() != 6 {
        return Err(ColorError::format(hex));
    }
    let r = parse_hex_byte(&digits[0..2]);
    let g = parse_hex_byte(&digits[2..4]);
    let b = parse_hex_byte(&digits[4..6]);
    match (r, g, b) {
        (Some(r), Some(g), Some(b)) => Ok((r, g, b)),
        _ => Err(ColorError::format(hex)),
    }
}

/// Format channel bytes as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Color::rgb(r, g, b).to_hex()
}

/// Convert 8-bit sRGB to HSL.
///
/// When two channels share the maximum, the hue is derived from the first
/// of them in R, G, B order.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    Hsl::new(h, s, l)
}

/// Convert HSL (components in [0, 1]) to 8-bit sRGB, rounding each channel.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = to_u8((l * 255.0).round());
        return (v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l.mul_add(-s, l + s)
    };
    let p = 2.0f64.mul_add(l, -q);

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);

    (
        to_u8((r * 255.0).round()),
        to_u8((g * 255.0).round()),
        to_u8((b * 255.0).round()),
    )
}

/// One channel of the HSL → RGB piecewise ramp.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Clamp an already-rounded channel value into a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_to_rgb_red() {
        assert_eq!(hex_to_rgb("#FF0000").unwrap(), (255, 0, 0));
    }

    #[test]
    fn hex_parsing_mixed_case() {
        let color = Color::parse("#c86Af2").unwrap();
        assert_eq!(color.to_rgb(), (0xc8, 0x6a, 0xf2));
        assert!(color.is_opaque());
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(Color::parse("00ff00").unwrap(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn hex_parsing_invalid() {
        for bad in ["", "#", "xyz", "#12345", "#1234567", "#f80", "#gg0000", "# ff0000", "##ff0000"] {
            assert!(
                matches!(Color::parse(bad), Err(ColorError::Format { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn hex_parsing_rejects_alpha_in_strict_mode() {
        assert!(Color::parse("#ff000080").is_err());
    }

    #[test]
    fn format_error_names_input() {
        let err = Color::parse("#nope").unwrap_err();
        assert_eq!(err, ColorError::Format { input: "#nope".to_string() });
        assert!(err.to_string().contains("#nope"));
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let color = Color::parse_with_alpha("#ff000080").unwrap();
        assert_eq!(color, Color::rgba(255, 0, 0, 0x80));
        assert_eq!(Color::parse_with_alpha("#ff0000").unwrap(), Color::rgb(255, 0, 0));
        assert!(Color::parse_with_alpha("#ff00008").is_err());
        assert!(Color::parse_with_alpha("#ff0000zz").is_err());
    }

    #[test]
    fn from_str_is_strict() {
        assert_eq!("#0a0b0c".parse::<Color>().unwrap(), Color::rgb(10, 11, 12));
        assert!("#0a0b0c0d".parse::<Color>().is_err());
    }

    // ── Hex Formatting ───────────────────────────────────────────────────

    #[test]
    fn rgb_to_hex_pads_and_lowercases() {
        assert_eq!(rgb_to_hex(1, 2, 255), "#0102ff");
    }

    #[test]
    fn hex_roundtrip_normalizes_case() {
        let color = Color::parse("#C86432").unwrap();
        assert_eq!(color.to_hex(), "#c86432");
        assert_eq!(color.to_hex_upper(), "#C86432");
    }

    #[test]
    fn alpha_hex_suffix() {
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(0x1a).to_hex(), "#0102031a");
        assert_eq!(Color::TRANSPARENT.to_hex(), "#00000000");
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(0x1a).opaque().to_hex(), "#010203");
    }

    #[test]
    fn display_and_debug() {
        let c = Color::rgb(255, 128, 0);
        assert_eq!(c.to_string(), "#ff8000");
        assert_eq!(format!("{c:?}"), "Color(#ff8000)");
    }

    // ── HSL ──────────────────────────────────────────────────────────────

    #[test]
    fn red_to_hsl() {
        let hsl = rgb_to_hsl(255, 0, 0);
        assert_eq!(hsl, Hsl::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn gray_has_no_saturation() {
        let hsl = rgb_to_hsl(128, 128, 128);
        assert!(approx_eq(hsl.s, 0.0, 1e-12));
        assert!(approx_eq(hsl.h, 0.0, 1e-12));
        assert!(approx_eq(hsl.l, 128.0 / 255.0, 1e-12));
    }

    #[test]
    fn hue_tie_break_prefers_red_then_green() {
        // Yellow: R and G share the max, hue comes from the R branch.
        let yellow = rgb_to_hsl(255, 255, 0);
        assert!(approx_eq(yellow.h, 1.0 / 6.0, 1e-12));
        // Cyan: G and B share the max, hue comes from the G branch.
        let cyan = rgb_to_hsl(0, 255, 255);
        assert!(approx_eq(cyan.h, 0.5, 1e-12));
        // Magenta: R and B share the max, hue comes from the R branch.
        let magenta = rgb_to_hsl(255, 0, 255);
        assert!(approx_eq(magenta.h, 5.0 / 6.0, 1e-12));
    }

    #[test]
    fn hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), (0, 255, 0));
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), (0, 0, 255));
        assert_eq!(hsl_to_rgb(0.5, 1.0, 0.5), (0, 255, 255));
    }

    #[test]
    fn hsl_to_rgb_achromatic() {
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.0), (0, 0, 0));
        assert_eq!(hsl_to_rgb(0.3, 0.0, 1.0), (255, 255, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), (128, 128, 128));
    }

    #[test]
    fn rotate_wraps() {
        let hsl = Hsl::new(0.75, 0.5, 0.5).rotate(0.5);
        assert!(approx_eq(hsl.h, 0.25, 1e-12));
        let hsl = Hsl::new(0.0, 0.5, 0.5).rotate(-1.0 / 12.0);
        assert!(approx_eq(hsl.h, 11.0 / 12.0, 1e-12));
    }

    #[test]
    fn normalize_hue_stays_below_one() {
        assert!(normalize_hue(-1e-18) < 1.0);
        assert!(approx_eq(normalize_hue(2.25), 0.25, 1e-12));
    }

    // ── Lighten / Darken ─────────────────────────────────────────────────

    #[test]
    fn darken_scales_toward_black() {
        assert_eq!(Color::rgb(200, 100, 51).darken(0.5), Color::rgb(100, 50, 25));
        assert_eq!(Color::rgb(200, 100, 50).darken(1.0), Color::BLACK);
        assert_eq!(Color::rgb(200, 100, 50).darken(0.0), Color::rgb(200, 100, 50));
    }

    #[test]
    fn lighten_moves_toward_white() {
        assert_eq!(Color::rgb(0, 100, 255).lighten(0.5), Color::rgb(127, 177, 255));
        assert_eq!(Color::rgb(0, 100, 255).lighten(1.0), Color::WHITE);
    }

    #[test]
    fn channel_ops_clamp_out_of_range_amounts() {
        assert_eq!(Color::rgb(10, 20, 30).darken(1.5), Color::BLACK);
        assert_eq!(Color::rgb(10, 20, 30).lighten(2.0), Color::WHITE);
        assert_eq!(Color::rgb(200, 200, 200).darken(-1.0), Color::WHITE);
    }

    #[test]
    fn channel_ops_keep_alpha() {
        let c = Color::rgba(100, 100, 100, 0x40);
        assert_eq!(c.lighten(0.1).alpha, 0x40);
        assert_eq!(c.darken(0.1).alpha, 0x40);
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(255, 0, 0).with_alpha(0x60)).unwrap();
        assert_eq!(json, "\"#ff000060\"");
    }

    #[test]
    fn deserializes_from_hex_string() {
        let colors: Vec<Color> = serde_json::from_str(r##"["#FF0000", "00ff0080"]"##).unwrap();
        assert_eq!(colors, vec![Color::rgb(255, 0, 0), Color::rgba(0, 255, 0, 0x80)]);
        assert!(serde_json::from_str::<Color>("\"#bad\"").is_err());
    }

    // ── Properties ───────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn hex_roundtrip_is_normalized(r: u8, g: u8, b: u8, upper: bool, hash: bool) {
            let hex = format!("{r:02x}{g:02x}{b:02x}");
            let hex = if upper { hex.to_ascii_uppercase() } else { hex };
            let input = if hash { format!("#{hex}") } else { hex };
            let (pr, pg, pb) = hex_to_rgb(&input).unwrap();
            prop_assert_eq!(rgb_to_hex(pr, pg, pb), format!("#{r:02x}{g:02x}{b:02x}"));
        }

        #[test]
        fn hsl_roundtrip_within_one(r: u8, g: u8, b: u8) {
            let hsl = rgb_to_hsl(r, g, b);
            prop_assert!((0.0..1.0).contains(&hsl.h));
            prop_assert!((0.0..=1.0).contains(&hsl.s));
            prop_assert!((0.0..=1.0).contains(&hsl.l));
            let (rr, rg, rb) = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
            prop_assert!(r.abs_diff(rr) <= 1, "r {} vs {}", r, rr);
            prop_assert!(g.abs_diff(rg) <= 1, "g {} vs {}", g, rg);
            prop_assert!(b.abs_diff(rb) <= 1, "b {} vs {}", b, rb);
        }

        #[test]
        fn lighten_never_darkens(r: u8, g: u8, b: u8, amount in 0.0f64..=1.0) {
            let c = Color::rgb(r, g, b);
            let l = c.lighten(amount);
            prop_assert!(l.r >= r && l.g >= g && l.b >= b);
        }

        #[test]
        fn darken_never_lightens(r: u8, g: u8, b: u8, amount in 0.0f64..=1.0) {
            let c = Color::rgb(r, g, b);
            let d = c.darken(amount);
            prop_assert!(d.r <= r && d.g <= g && d.b <= b);
        }
    }
}
