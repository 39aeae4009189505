//! Role derivation — the bridge from a palette to theme colors.
//!
//! Takes the first eight colors of a palette and derives the roles every
//! theme schema is painted from: appearance, background, foreground, two
//! primary accents (`c1`, `c2`) and five semantic colors (`c3`..`c7`).
//!
//! Palette index → role:
//!
//! ```text
//!   0  base        background / foreground source
//!   1  c1          secondary accent (properties, borders)
//!   2  c2          primary accent (functions, focus, cursor)
//!   3  c3          strings, additions            (green)
//!   4  c4          errors, deletions             (red)
//!   5  c5          numbers, warnings             (yellow)
//!   6  c6          keywords                      (magenta)
//!   7  c7          types, operators              (cyan)
//! ```

use prism_color::{Color, contrast_ratio, relative_luminance, rgb_distance};
use prism_palette::{adjust_for_contrast, ensure_readable_contrast, improve_quality};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};

/// Colors a palette must provide.
pub const MIN_PALETTE_SIZE: usize = 8;

/// Accents closer than this to the foreground are pushed away once.
const ACCENT_FOREGROUND_SEPARATION: f64 = 60.0;

/// `c2` closer than this to `c1` is pushed away once.
const ACCENT_PAIR_SEPARATION: f64 = 50.0;

/// Size of the single corrective step for crowded accents.
const SEPARATION_STEP: f64 = 0.15;

/// Dark or light theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// The derived role colors of one theme.
///
/// Built once per theme by [`ThemeRoles::derive`]; every schema-specific
/// color is a transform of these fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeRoles {
    pub appearance: Appearance,
    /// Mean WCAG luminance of the first eight palette colors.
    pub average_luminance: f64,
    /// Palette color 0, unmodified.
    pub base: Color,
    pub background: Color,
    pub foreground: Color,
    /// Accents `c1`..`c7`, after contrast repair.
    pub accents: [Color; 7],
}

impl ThemeRoles {
    /// Derive roles from `palette`.
    ///
    /// Unless `config.strict` is set the palette is optimized first (to
    /// `config.optimizer.target_count` colors). Only the first eight colors
    /// are used.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InsufficientPalette`] if fewer than eight colors are
    /// available after optimization.
    pub fn derive(palette: &[Color], config: &ThemeConfig) -> Result<Self> {
        let colors = if config.strict {
            palette.to_vec()
        } else {
            improve_quality(palette, &config.optimizer)
        };

        if colors.len() < MIN_PALETTE_SIZE {
            return Err(ThemeError::InsufficientPalette {
                actual: colors.len(),
                required: MIN_PALETTE_SIZE,
            });
        }

        Ok(Self::from_eight(&colors[..MIN_PALETTE_SIZE], config))
    }

    /// Derive roles from exactly eight colors, without optimization.
    #[allow(clippy::cast_precision_loss)]
    fn from_eight(colors: &[Color], config: &ThemeConfig) -> Self {
        let base = colors[0];

        let average_luminance =
            colors.iter().map(|&c| relative_luminance(c)).sum::<f64>() / MIN_PALETTE_SIZE as f64;
        let appearance = if average_luminance < 0.5 {
            Appearance::Dark
        } else {
            Appearance::Light
        };
        let dark = appearance.is_dark();

        // Very dark palettes are darkened less, very light ones lightened less.
        let background = if dark {
            base.darken(average_luminance.mul_add(0.2, 0.825))
        } else {
            base.lighten((1.0 - average_luminance).mul_add(0.25, 0.7))
        };

        let proposed = if dark { base.lighten(0.7) } else { base.darken(0.8) };
        let foreground = ensure_readable_contrast(proposed, background, config.foreground_contrast);

        debug!(
            ?appearance,
            average_luminance,
            background = %background,
            foreground = %foreground,
            "derived base roles"
        );

        let advance = |c: Color| {
            if dark {
                c.lighten(SEPARATION_STEP)
            } else {
                c.darken(SEPARATION_STEP)
            }
        };
        let repair = |c: Color, target: f64| {
            adjust_for_contrast(c, background, target, config.accent_max_iterations)
        };

        let mut c1 = repair(colors[1], config.accent_contrast);
        let mut c2 = repair(colors[2], config.accent_contrast);

        if rgb_distance(c1, foreground) < ACCENT_FOREGROUND_SEPARATION {
            c1 = advance(c1);
        }
        if rgb_distance(c2, foreground) < ACCENT_FOREGROUND_SEPARATION {
            c2 = advance(c2);
        }
        if rgb_distance(c1, c2) < ACCENT_PAIR_SEPARATION {
            c2 = advance(c2);
        }

        for (name, accent) in [("c1", c1), ("c2", c2)] {
            let ratio = contrast_ratio(accent, background);
            if ratio < config.accent_contrast {
                warn!(
                    accent = name,
                    color = %accent,
                    ratio,
                    target = config.accent_contrast,
                    "accent contrast below target"
                );
            }
        }

        let semantic = |i: usize| repair(colors[i], config.semantic_contrast);
        let accents = [
            c1,
            c2,
            semantic(3),
            semantic(4),
            semantic(5),
            semantic(6),
            semantic(7),
        ];

        Self {
            appearance,
            average_luminance,
            base,
            background,
            foreground,
            accents,
        }
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.appearance.is_dark()
    }

    /// Accent `n` (1..=7).
    ///
    /// # Panics
    ///
    /// Panics if `n` is not in 1..=7.
    #[must_use]
    pub const fn accent(&self, n: usize) -> Color {
        self.accents[n - 1]
    }

    /// Move `color` toward the background: darken on dark themes, lighten
    /// on light ones.
    #[must_use]
    pub fn recede(&self, color: Color, amount: f64) -> Color {
        if self.is_dark() {
            color.darken(amount)
        } else {
            color.lighten(amount)
        }
    }

    /// Move `color` away from the background.
    #[must_use]
    pub fn advance(&self, color: Color, amount: f64) -> Color {
        if self.is_dark() {
            color.lighten(amount)
        } else {
            color.darken(amount)
        }
    }

    /// Text drawn on accent-filled buttons and badges.
    #[must_use]
    pub fn button_text(&self) -> Color {
        if self.is_dark() {
            self.background
        } else {
            self.base.darken(0.9)
        }
    }
}
