//! Global configuration constants for shoprec.
//!
//! All tuning parameters and request defaults are defined here. Every value
//! can be overridden per request via [`RecommendParams`](crate::RecommendParams)
//! or per index via [`TfidfConfig`](crate::tfidf::TfidfConfig); these are the
//! defaults a caller gets without any configuration.

/// Default number of recommendations returned per request.
pub const DEFAULT_TOP_N: usize = 8;

/// Default weight of text similarity in the combined score.
///
/// The numeric score receives `1 - text weight`. Must lie in [0, 1].
pub const DEFAULT_TEXT_WEIGHT: f32 = 0.7;

/// Default weight of the normalized rating score inside the numeric blend.
///
/// Positive sign: a higher raw rating score is better.
pub const DEFAULT_RATING_WEIGHT: f32 = 0.7;

/// Default weight of the normalized price inside the numeric blend.
///
/// Negative sign: a lower raw price is better. The sign both flips the
/// min-max normalization and enters the blend literally, so the default
/// numeric score is `0.7 * norm(rating) - 0.3 * norm(price)`.
pub const DEFAULT_PRICE_WEIGHT: f32 = -0.3;

/// Default minimum number of ratings a candidate must exceed (strictly)
/// to be eligible for recommendation.
pub const DEFAULT_RATING_COUNT_THRESHOLD: u32 = 20;

/// Default age in days at or below which a product counts as "new".
///
/// The ranker reserves one result slot for the highest-ranked eligible
/// new product, if any exists.
pub const DEFAULT_NEW_ITEM_AGE_DAYS: u32 = 1500;

/// Normalized value substituted when a feature column is degenerate
/// (`max == min`, including single-row catalogs). Plain min-max is
/// undefined there; mid-scale keeps the column neutral in the blend.
pub const DEGENERATE_NORM: f32 = 0.5;

/// Number of decimal places combined and rating scores are rounded to.
/// Ranking ties are broken after rounding.
pub const SCORE_DECIMALS: u32 = 2;

/// Minimum token length in characters. Shorter tokens are discarded
/// during tokenization.
pub const MIN_TOKEN_LEN: usize = 4;

/// Default minimum document frequency for a term to enter the vocabulary.
///
/// Absolute count. 1 admits every term; large catalogs typically raise
/// this to prune noise terms.
pub const TFIDF_MIN_DF: usize = 1;

/// Default maximum document frequency for a term, as a fraction of the
/// corpus. Terms appearing in more than this share of documents are
/// pruned as near-stop-words. 1.0 disables the bound.
pub const TFIDF_MAX_DF_RATIO: f32 = 1.0;
