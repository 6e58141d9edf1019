//! Scored candidate types for the ranking pipeline.

/// A catalog row with its per-request scores.
///
/// Created fresh for every row on each request and discarded once the
/// response is produced. `combined_score` is already rounded to
/// [`config::SCORE_DECIMALS`](crate::config::SCORE_DECIMALS) decimals;
/// ranking ties are broken after rounding.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    /// Catalog row index.
    pub row: usize,
    /// Cosine similarity of the row's text against the query text.
    pub text_similarity: f32,
    /// Weighted blend of the normalized numeric features.
    pub numeric_score: f32,
    /// `text_weight * text_similarity + (1 - text_weight) * numeric_score`,
    /// rounded. The sole ranking key, with `rating_count` as tie-break.
    pub combined_score: f32,
    /// Copied from the product row: tie-break and eligibility filter.
    pub rating_count: u32,
    /// Copied from the product row: "new" classification.
    pub age_days: u32,
}
