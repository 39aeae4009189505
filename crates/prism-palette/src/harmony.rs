//! Hue-wheel harmonies.
//!
//! Each scheme rotates the base color's hue by fixed fractions of a turn,
//! keeping saturation and lightness. The first color in every result is
//! the base itself.

use std::fmt;
use std::str::FromStr;

use prism_color::{Color, Hsl};
use serde::{Deserialize, Serialize};

use crate::error::ParseSchemeError;

/// One twelfth of a turn (30°).
const TWELFTH: f64 = 1.0 / 12.0;

/// A rule for deriving companion colors from a base color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyScheme {
    /// The opposite hue (180°). One companion.
    Complementary,
    /// Hues at 120° and 240°. Two companions.
    #[default]
    Triadic,
    /// Neighbors at −30° and +30°. Two companions.
    Analogous,
    /// The complement's neighbors, 150° and 210°. Two companions.
    SplitComplementary,
}

impl HarmonyScheme {
    /// Kebab-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split-complementary",
        }
    }

    /// All schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Complementary,
            Self::Triadic,
            Self::Analogous,
            Self::SplitComplementary,
        ]
    }

    /// Companion hues for a base color, excluding the base.
    fn companions(self, base: Hsl) -> Vec<Hsl> {
        match self {
            Self::Complementary => vec![base.rotate(0.5)],
            Self::Triadic => vec![base.rotate(1.0 / 3.0), base.rotate(2.0 / 3.0)],
            Self::Analogous => neighbors(base.h, base),
            Self::SplitComplementary => neighbors((base.h + 0.5) % 1.0, base),
        }
    }
}

/// Hues a twelfth of a turn either side of `hue`, with the saturation and
/// lightness of `base`.
///
/// Wrapped as `(h + offset + 1) % 1` rather than with [`Hsl::rotate`]. The
/// two round differently and hex output must not drift between them.
fn neighbors(hue: f64, base: Hsl) -> Vec<Hsl> {
    [-TWELFTH, TWELFTH]
        .into_iter()
        .map(|offset| Hsl::new((hue + offset + 1.0) % 1.0, base.s, base.l))
        .collect()
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyScheme {
    type Err = ParseSchemeError;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .find(|scheme| scheme.name() == wanted)
            .copied()
            .ok_or_else(|| ParseSchemeError(s.to_string()))
    }
}

/// Generate `base` followed by its companions under `scheme`.
///
/// Companions are opaque. Grays (zero saturation) produce companions equal
/// to the base.
#[must_use]
pub fn generate_harmony(base: Color, scheme: HarmonyScheme) -> Vec<Color> {
    let hsl = base.to_hsl();
    std::iter::once(base)
        .chain(scheme.companions(hsl).into_iter().map(Color::from_hsl))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn c(hex: &str) -> Color {
        Color::parse(hex).unwrap()
    }

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(|c| c.to_hex_upper()).collect()
    }

    // ── Schemes ─────────────────────────────────────────────────────

    #[test]
    fn complementary_of_red_is_cyan() {
        let colors = generate_harmony(c("#FF0000"), HarmonyScheme::Complementary);
        assert_eq!(hexes(&colors), vec!["#FF0000", "#00FFFF"]);
    }

    #[test]
    fn triadic_of_red() {
        let colors = generate_harmony(c("#FF0000"), HarmonyScheme::Triadic);
        assert_eq!(hexes(&colors), vec!["#FF0000", "#00FF00", "#0000FF"]);
    }

    /// Channels equal within one step (half-way hues round either way).
    fn near(color: Color, (r, g, b): (u8, u8, u8)) -> bool {
        color.r.abs_diff(r) <= 1 && color.g.abs_diff(g) <= 1 && color.b.abs_diff(b) <= 1
    }

    #[test]
    fn analogous_of_red() {
        // −30° is rose, +30° is orange.
        let colors = generate_harmony(c("#FF0000"), HarmonyScheme::Analogous);
        assert_eq!(colors.len(), 3);
        assert!(near(colors[1], (255, 0, 128)), "{:?}", colors[1]);
        assert!(near(colors[2], (255, 128, 0)), "{:?}", colors[2]);
    }

    #[test]
    fn analogous_of_olive_green_is_exact() {
        let colors = generate_harmony(c("#a7c84d"), HarmonyScheme::Analogous);
        assert_eq!(hexes(&colors), vec!["#A7C84D", "#C8AB4D", "#6AC84D"]);
    }

    #[test]
    fn split_complementary_of_red() {
        // Offsets are taken from the complement: 150° and 210°.
        let colors = generate_harmony(c("#FF0000"), HarmonyScheme::SplitComplementary);
        assert_eq!(colors.len(), 3);
        assert!(near(colors[1], (0, 255, 128)), "{:?}", colors[1]);
        assert!(near(colors[2], (0, 128, 255)), "{:?}", colors[2]);
    }

    #[test]
    fn companions_keep_saturation_and_lightness() {
        let base = c("#3a7bd5");
        let hsl = base.to_hsl();
        for companion in &generate_harmony(base, HarmonyScheme::Triadic)[1..] {
            let other = companion.to_hsl();
            assert!((other.s - hsl.s).abs() < 0.02, "{companion:?}");
            assert!((other.l - hsl.l).abs() < 0.01, "{companion:?}");
        }
    }

    #[test]
    fn base_is_always_first() {
        let base = c("#3a7bd5");
        for &scheme in HarmonyScheme::all() {
            assert_eq!(generate_harmony(base, scheme)[0], base, "{scheme}");
        }
    }

    #[test]
    fn companion_counts() {
        let base = c("#3a7bd5");
        assert_eq!(generate_harmony(base, HarmonyScheme::Complementary).len(), 2);
        assert_eq!(generate_harmony(base, HarmonyScheme::Triadic).len(), 3);
        assert_eq!(generate_harmony(base, HarmonyScheme::Analogous).len(), 3);
        assert_eq!(generate_harmony(base, HarmonyScheme::SplitComplementary).len(), 3);
    }

    #[test]
    fn gray_companions_equal_base() {
        let gray = c("#777777");
        let colors = generate_harmony(gray, HarmonyScheme::Triadic);
        assert!(colors.iter().all(|&c| c == gray));
    }

    #[test]
    fn deterministic() {
        let base = c("#c0ffee");
        assert_eq!(
            generate_harmony(base, HarmonyScheme::Analogous),
            generate_harmony(base, HarmonyScheme::Analogous)
        );
    }

    // ── Names ───────────────────────────────────────────────────────

    #[test]
    fn names_round_trip() {
        for &scheme in HarmonyScheme::all() {
            assert_eq!(scheme.name().parse::<HarmonyScheme>(), Ok(scheme));
        }
    }

    #[test]
    fn parse_is_lenient_about_case_and_separator() {
        assert_eq!("Split_Complementary".parse::<HarmonyScheme>(), Ok(HarmonyScheme::SplitComplementary));
        assert_eq!(" TRIADIC ".parse::<HarmonyScheme>(), Ok(HarmonyScheme::Triadic));
    }

    #[test]
    fn parse_unknown_fails() {
        assert_eq!(
            "tetradic".parse::<HarmonyScheme>(),
            Err(ParseSchemeError("tetradic".to_string()))
        );
    }

    #[test]
    fn default_is_triadic() {
        assert_eq!(HarmonyScheme::default(), HarmonyScheme::Triadic);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&HarmonyScheme::SplitComplementary).unwrap();
        assert_eq!(json, "\"split-complementary\"");
        let back: HarmonyScheme = serde_json::from_str("\"analogous\"").unwrap();
        assert_eq!(back, HarmonyScheme::Analogous);
    }
}
