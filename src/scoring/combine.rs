//! Linear score blending.
//!
//! Two stages, both plain weighted sums: the numeric features (normalized
//! rating score and price) blend into one numeric score, then text
//! similarity and the numeric score blend into the combined score that
//! drives ranking. Weights are configuration, not constants; the numeric
//! weights enter the formula literally and need not sum to 1.

use crate::config;
use crate::error::RecommendError;
use crate::scoring::normalize::normalize_feature;
use serde::{Deserialize, Serialize};

/// Blend weights for the combined score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of text similarity in [0, 1]. The numeric score receives
    /// `1 - text_weight`.
    pub text_weight: f32,
    /// Signed weight of the normalized rating score. Positive: higher
    /// raw rating is better.
    pub rating_weight: f32,
    /// Signed weight of the normalized price. Negative: lower raw price
    /// is better.
    pub price_weight: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            text_weight: config::DEFAULT_TEXT_WEIGHT,
            rating_weight: config::DEFAULT_RATING_WEIGHT,
            price_weight: config::DEFAULT_PRICE_WEIGHT,
        }
    }
}

impl ScoreWeights {
    /// Validates the documented ranges: `text_weight` in [0, 1], every
    /// weight finite.
    pub fn validate(&self) -> Result<(), RecommendError> {
        if !self.text_weight.is_finite() || !(0.0..=1.0).contains(&self.text_weight) {
            return Err(RecommendError::InvalidParameter(format!(
                "text_weight must be in [0, 1], got {}",
                self.text_weight
            )));
        }
        if !self.rating_weight.is_finite() || !self.price_weight.is_finite() {
            return Err(RecommendError::InvalidParameter(
                "numeric weights must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rounds a score to [`config::SCORE_DECIMALS`] decimal places.
pub fn round_score(score: f32) -> f32 {
    let factor = 10f32.powi(config::SCORE_DECIMALS as i32);
    (score * factor).round() / factor
}

/// Computes the numeric score per row:
/// `rating_weight * norm(rating) + price_weight * norm(price)`, where
/// `norm` honors the polarity encoded in each weight's sign. At the
/// default weights this is `0.7 * norm(rating) - 0.3 * norm(price)`.
pub fn numeric_scores(ratings: &[f32], prices: &[f32], weights: &ScoreWeights) -> Vec<f32> {
    debug_assert_eq!(ratings.len(), prices.len());
    let norm_rating = normalize_feature(ratings, weights.rating_weight);
    let norm_price = normalize_feature(prices, weights.price_weight);

    norm_rating
        .iter()
        .zip(&norm_price)
        .map(|(&r, &p)| weights.rating_weight * r + weights.price_weight * p)
        .collect()
}

/// Blends text similarity and numeric score per row and rounds the
/// result. Ranking operates on these rounded values.
pub fn combined_scores(text_similarity: &[f32], numeric: &[f32], text_weight: f32) -> Vec<f32> {
    debug_assert_eq!(text_similarity.len(), numeric.len());
    text_similarity
        .iter()
        .zip(numeric)
        .map(|(&sim, &num)| round_score(text_weight * sim + (1.0 - text_weight) * num))
        .collect()
}
