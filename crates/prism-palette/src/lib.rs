//! # prism-palette — palette optimization engine
//!
//! Turns an arbitrary, possibly redundant list of colors into a balanced
//! palette of a requested size.
//!
//! # Architecture
//!
//! ```text
//! raw colors
//!     │
//!     ▼
//! diversity.rs: greedy farthest-point sampling (cap the working set)
//!     │
//!     ▼
//! quality.rs:   pairwise distance statistics, poor pairs, score
//!     │
//!     ▼
//! optimize.rs:  dedup → drop offenders → harmonic fill → top-up → trim
//!     │            ▲
//!     │            └── harmony.rs: hue-wheel companions
//!     ▼
//! balanced palette
//! ```
//!
//! `repair.rs` holds the contrast repair used when palette colors are
//! placed against a background, and `sort.rs` the display orderings.
//!
//! Everything is a pure function of its inputs. Distances are Euclidean
//! RGB (see [`prism_color::rgb_distance`]), so all loops are O(n²) in the
//! working-set size; the optimizer caps that size before scoring.

// Pair counts and palette lengths are far below f64's exact-integer range.
#![allow(clippy::cast_precision_loss)]

pub mod diversity;
pub mod error;
pub mod harmony;
pub mod optimize;
pub mod quality;
pub mod repair;
pub mod sort;

pub use diversity::select_diverse;
pub use error::{ParseSchemeError, ParseSortError};
pub use harmony::{HarmonyScheme, generate_harmony};
pub use optimize::{OptimizerConfig, improve_quality};
pub use quality::{PaletteQualityScore, PoorPair, QualityThresholds};
pub use repair::{adjust_for_contrast, ensure_readable_contrast};
pub use sort::{SortMethod, SortOutcome, sort_colors};
