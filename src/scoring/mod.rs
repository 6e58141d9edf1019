//! Scoring primitives: feature normalization and linear score blending.
//!
//! This module turns raw catalog columns into per-row combined scores:
//! min-max normalization with polarity handling, a weighted numeric blend,
//! and the text/numeric combination that drives ranking.

/// Linear blending of normalized features and text similarity.
pub mod combine;
/// Polarity-aware min-max normalization.
pub mod normalize;
/// Scored candidate types.
pub mod types;

pub use combine::{combined_scores, numeric_scores, round_score, ScoreWeights};
pub use normalize::normalize_feature;
pub use types::ScoredCandidate;
