//! Greedy farthest-point sampling.
//!
//! Picks colors that are as far apart as possible: start from the first
//! candidate, then repeatedly take the candidate whose nearest selected
//! neighbor is farthest away. Ties go to the earliest candidate, so the
//! result only depends on input order.

use prism_color::{Color, rgb_distance};

/// Select up to `count` maximally separated colors from `candidates`.
///
/// - `count == 0` yields an empty palette.
/// - When `candidates.len() <= count` the input is returned unchanged,
///   duplicates included.
/// - Otherwise the result never contains duplicates and may come out
///   shorter than `count` when the candidates run out of distinct colors.
///
/// Runs at most `count × candidates.len()` selection rounds.
#[must_use]
pub fn select_diverse(candidates: &[Color], count: usize) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }
    if candidates.len() <= count {
        return candidates.to_vec();
    }

    let mut selected = vec![candidates[0]];
    let max_rounds = count.saturating_mul(candidates.len());
    let mut rounds = 0;

    while selected.len() < count && rounds < max_rounds {
        rounds += 1;

        let mut best: Option<Color> = None;
        let mut best_distance = 0.0;
        for &candidate in candidates {
            if selected.contains(&candidate) {
                continue;
            }
            let nearest = selected
                .iter()
                .map(|&s| rgb_distance(candidate, s))
                .fold(f64::INFINITY, f64::min);
            // Strict: the first candidate at the maximum wins.
            if nearest > best_distance {
                best_distance = nearest;
                best = Some(candidate);
            }
        }

        let Some(best) = best else { break };
        selected.push(best);
    }

    selected
}
