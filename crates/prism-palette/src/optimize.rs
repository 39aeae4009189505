//! Palette optimizer.
//!
//! Composes diversity selection, quality scoring and harmony generation
//! into a pipeline that produces a palette of (at most) the requested size
//! from any input. It never fails: with too few distinct colors it returns
//! what it has, and the caller decides whether that is enough.
//!
//! ```text
//! cap working set ─► good already? ─► yes ─► select_diverse(target)
//!                          │
//!                          no
//!                          ▼
//!                       dedup ─► enough unique? ─► yes ─► select_diverse(target)
//!                          │
//!                          no
//!                          ▼
//!        drop worst offenders ─► harmonic fill ─► top-up ─► dedup + trim
//! ```
//!
//! Offender removal and harmonic fill only run when the palette has poor
//! pairs. A short palette of well separated colors is returned as it is.
//!
//! The result never scores below the working set it was built from, so
//! running the optimizer on its own output cannot make a palette worse.

use std::collections::HashSet;

use prism_color::Color;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diversity::select_diverse;
use crate::harmony::{HarmonyScheme, generate_harmony};
use crate::quality::{QualityThresholds, score_with};

/// Poor pairs whose first color is dropped before filling.
const MAX_OFFENDERS: usize = 2;

/// Diverse base colors harmonized when the palette has more than this many.
const HARMONY_BASES: usize = 2;

/// Optimizer parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Number of colors wanted.
    pub target_count: usize,
    /// Scheme used to synthesize companions when the input is short.
    pub scheme: HarmonyScheme,
    /// Inputs larger than this are reduced by diversity selection first,
    /// bounding the O(n²) scoring work.
    pub max_working_set: usize,
    /// Harmonic fill never grows the working set to this size.
    pub max_palette_size: usize,
    pub quality: QualityThresholds,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            target_count: 12,
            scheme: HarmonyScheme::Triadic,
            max_working_set: 50,
            max_palette_size: 200,
            quality: QualityThresholds::default(),
        }
    }
}

impl OptimizerConfig {
    /// Defaults with a specific target and scheme.
    #[must_use]
    pub fn new(target_count: usize, scheme: HarmonyScheme) -> Self {
        Self {
            target_count,
            scheme,
            ..Self::default()
        }
    }
}

/// Produce a balanced palette of at most `config.target_count` colors.
///
/// Deterministic for a given input order. The result is shorter than the
/// target only when even harmony generation cannot supply enough distinct
/// colors (for example, a single gray).
#[must_use]
pub fn improve_quality(colors: &[Color], config: &OptimizerConfig) -> Vec<Color> {
    let target = config.target_count;

    let working = if colors.len() > config.max_working_set {
        debug!(
            input = colors.len(),
            cap = config.max_working_set,
            "capping working set"
        );
        select_diverse(colors, config.max_working_set)
    } else {
        colors.to_vec()
    };

    let quality = score_with(&working, &config.quality);
    debug!(
        colors = working.len(),
        score = quality.score,
        poor_pairs = quality.poor_pairs.len(),
        good = quality.is_good_quality,
        "scored working set"
    );

    if quality.is_good_quality && working.len() >= target {
        debug!(target, "palette already good; selecting most diverse");
        return select_diverse(&working, target);
    }

    let unique = dedup(&working);
    if unique.is_empty() {
        return Vec::new();
    }
    if unique.len() >= target {
        debug!(unique = unique.len(), target, "enough unique colors");
        return select_diverse(&unique, target);
    }

    let mut improved = unique.clone();

    let offenders: Vec<Color> = quality
        .poor_pairs
        .iter()
        .take(MAX_OFFENDERS)
        .map(|pair| pair.color1)
        .collect();
    if !offenders.is_empty() {
        improved.retain(|c| !offenders.contains(c));
        if improved.is_empty() {
            improved.clone_from(&unique);
        }
        debug!(
            dropped = unique.len() - improved.len(),
            remaining = improved.len(),
            "removed worst offenders"
        );

        harmonic_fill(&mut improved, config);
    }

    if improved.len() < target {
        let before = improved.len();
        for color in select_diverse(&unique, target.min(unique.len())) {
            if !improved.contains(&color) {
                improved.push(color);
            }
        }
        debug!(added = improved.len() - before, "topped up from unique colors");
    }

    let improved = dedup(&improved);
    if improved.is_empty() {
        return unique.into_iter().take(target).collect();
    }

    let candidate = select_diverse(&improved, target.min(improved.len()));
    let candidate_score = score_with(&candidate, &config.quality).score;
    if candidate_score < quality.score {
        debug!(
            candidate = candidate_score,
            input = quality.score,
            "synthesized palette scores lower; keeping input"
        );
        return unique;
    }
    candidate
}

/// Grow `working` with harmony companions.
///
/// Only runs while `working` is below the target. With more than two
/// colors the two most diverse are harmonized once. With two or fewer,
/// every color is harmonized in turn, companions included, so a nearly
/// empty palette keeps growing until it holds twice the target.
/// Companions are never added if they would reach `max_palette_size`.
fn harmonic_fill(working: &mut Vec<Color>, config: &OptimizerConfig) {
    let target = config.target_count;
    if working.is_empty() || working.len() >= target || working.len() >= config.max_palette_size / 2
    {
        return;
    }

    let goal = target.saturating_mul(2);
    let fixed_bases =
        (working.len() > HARMONY_BASES).then(|| select_diverse(working, HARMONY_BASES));

    let base_at = |working: &[Color], i: usize| {
        fixed_bases
            .as_ref()
            .map_or_else(|| working.get(i), |bases| bases.get(i))
            .copied()
    };

    let mut next = 0usize;
    while let Some(base) = base_at(working.as_slice(), next) {
        if working.len() >= goal {
            break;
        }

        let before = working.len();
        let novel: Vec<Color> = generate_harmony(base, config.scheme)
            .into_iter()
            .skip(1)
            .filter(|companion| !working.contains(companion))
            .collect();
        if !novel.is_empty() && working.len() + novel.len() < config.max_palette_size {
            working.extend(novel);
        }

        next += 1;
        debug!(
            %base,
            added = working.len() - before,
            size = working.len(),
            "harmonic fill"
        );
    }
}

/// Remove repeated colors, keeping first occurrences in order.
fn dedup(colors: &[Color]) -> Vec<Color> {
    let mut seen = HashSet::with_capacity(colors.len());
    colors.iter().copied().filter(|c| seen.insert(*c)).collect()
}
