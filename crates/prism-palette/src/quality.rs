//! Palette quality scoring.
//!
//! Quality is judged purely from pairwise RGB distances: a palette whose
//! closest pair is far apart, and whose colors are spread out on average,
//! scores well. Pairs closer than [`QualityThresholds::poor_pair_distance`]
//! are reported so the optimizer can drop one side of each.

use prism_color::{Color, rgb_distance};
use serde::{Deserialize, Serialize};

/// Tunable cut-offs for [`score_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    /// Pairs closer than this are poor pairs.
    pub poor_pair_distance: f64,
    /// Minimum composite score (0–100) for a good palette.
    pub min_score: f64,
    /// Minimum closest-pair distance for a good palette.
    pub min_distance: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            poor_pair_distance: 50.0,
            min_score: 60.0,
            min_distance: 40.0,
        }
    }
}

/// Two palette entries that are visually redundant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoorPair {
    /// The earlier of the two colors in palette order.
    pub color1: Color,
    pub color2: Color,
    pub distance: f64,
}

/// Distance statistics for a palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteQualityScore {
    /// Composite score, 0–100.
    pub score: u8,
    pub min_distance: f64,
    pub avg_distance: f64,
    /// Worst (closest) pair first.
    pub poor_pairs: Vec<PoorPair>,
    pub is_good_quality: bool,
}

impl PaletteQualityScore {
    /// The score of a palette with fewer than two colors.
    #[must_use]
    pub const fn trivial() -> Self {
        Self {
            score: 100,
            min_distance: 0.0,
            avg_distance: 0.0,
            poor_pairs: Vec::new(),
            is_good_quality: true,
        }
    }
}

/// Score `palette` with the default thresholds.
#[must_use]
pub fn score(palette: &[Color]) -> PaletteQualityScore {
    score_with(palette, &QualityThresholds::default())
}

/// Score `palette`.
///
/// ```text
/// score = min(100, min/100 × 50 + avg/150 × 50)
/// good  = score ≥ min_score  and  min ≥ min_distance
/// ```
///
/// The good/poor decision uses the unrounded score; `score` is rounded for
/// display.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score_with(palette: &[Color], thresholds: &QualityThresholds) -> PaletteQualityScore {
    if palette.len() < 2 {
        return PaletteQualityScore::trivial();
    }

    let mut min_distance = f64::INFINITY;
    let mut total = 0.0;
    let mut pairs = 0usize;
    let mut poor_pairs = Vec::new();

    for (i, &a) in palette.iter().enumerate() {
        for &b in &palette[i + 1..] {
            let distance = rgb_distance(a, b);
            min_distance = min_distance.min(distance);
            total += distance;
            pairs += 1;
            if distance < thresholds.poor_pair_distance {
                poor_pairs.push(PoorPair {
                    color1: a,
                    color2: b,
                    distance,
                });
            }
        }
    }

    // Stable: equal distances keep palette order.
    poor_pairs.sort_by(|x, y| x.distance.total_cmp(&y.distance));

    let avg_distance = total / pairs as f64;
    let raw = (min_distance / 100.0)
        .mul_add(50.0, avg_distance / 150.0 * 50.0)
        .min(100.0);

    PaletteQualityScore {
        // raw is in [0, 100].
        score: raw.round() as u8,
        min_distance,
        avg_distance,
        poor_pairs,
        is_good_quality: raw >= thresholds.min_score && min_distance >= thresholds.min_distance,
    }
}
