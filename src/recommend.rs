//! Recommendation engine facade.
//!
//! A [`Recommender`] owns a validated [`Catalog`] and a text similarity
//! index that is fitted once and shared read-only across requests. Each
//! `recommend` call is a pure, request-scoped pipeline: resolve the query
//! row, look up its similarity column, normalize the numeric features,
//! blend, rank with the freshness carve-out, and project result rows.
//! Nothing is written back to the catalog on any path.

use crate::catalog::Catalog;
use crate::config;
use crate::error::RecommendError;
use crate::rank::{rank, RankParams};
use crate::scoring::{combined_scores, numeric_scores, round_score, ScoreWeights, ScoredCandidate};
use crate::tfidf::{TfidfConfig, TfidfIndex};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Text similarity provider consumed by the engine.
///
/// Implementations hold a fitted index over the catalog's combined texts.
/// The contract: `similarity_for` returns one score per catalog row, in
/// catalog row order, deterministically for a fixed fitted index, each
/// score in [-1, 1]. The default implementation is
/// [`TfidfIndex`](crate::tfidf::TfidfIndex).
pub trait SimilaritySource: Send + Sync {
    /// Number of corpus rows the index was fitted with. Must equal the
    /// catalog length, or every request fails with `IndexSizeMismatch`.
    fn row_count(&self) -> usize;

    /// Similarity of `query_text` against every corpus row, in row order.
    fn similarity_for(&self, query_text: &str) -> Vec<f32>;
}

/// Parameters of a recommendation request. `Default` gives the documented
/// defaults from [`config`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecommendParams {
    /// Maximum number of result rows.
    pub top_n: usize,
    /// Blend weights for text similarity, rating, and price.
    pub weights: ScoreWeights,
    /// A candidate needs strictly more ratings than this to be eligible.
    pub rating_count_threshold: u32,
    /// Age in days at or below which a candidate counts as "new".
    pub new_item_age_days: u32,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            top_n: config::DEFAULT_TOP_N,
            weights: ScoreWeights::default(),
            rating_count_threshold: config::DEFAULT_RATING_COUNT_THRESHOLD,
            new_item_age_days: config::DEFAULT_NEW_ITEM_AGE_DAYS,
        }
    }
}

/// One recommended product, scores rounded for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Display title of the recommended product.
    pub title: String,
    /// Blended ranking score, rounded to 2 decimals.
    pub combined_score: f32,
    /// Confidence-adjusted rating score, rounded to 2 decimals.
    pub rating_score: f32,
    /// Number of ratings observed.
    pub rating_count: u32,
    /// Days since listing.
    pub age_days: u32,
}

/// Content-based recommendation engine over a fixed catalog.
///
/// The similarity index is built lazily on first use behind a read-mostly
/// lock (single writer builds once, many readers thereafter), or injected
/// pre-built via [`with_index`](Self::with_index). `Recommender` is
/// `Send + Sync`; concurrent `recommend` calls share the catalog and the
/// fitted index read-only.
pub struct Recommender {
    catalog: Catalog,
    tfidf_config: TfidfConfig,
    index: RwLock<Option<Arc<dyn SimilaritySource>>>,
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("catalog", &self.catalog)
            .field("tfidf_config", &self.tfidf_config)
            .field("index", &self.index.read().as_ref().map(|_| "<fitted>"))
            .finish()
    }
}

impl Recommender {
    /// Creates an engine that fits its own TF-IDF index on first request.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_tfidf_config(catalog, TfidfConfig::default())
    }

    /// Creates an engine with custom TF-IDF document-frequency bounds.
    pub fn with_tfidf_config(catalog: Catalog, tfidf_config: TfidfConfig) -> Self {
        Self {
            catalog,
            tfidf_config,
            index: RwLock::new(None),
        }
    }

    /// Creates an engine around a pre-built similarity index.
    ///
    /// Fails fast with `IndexSizeMismatch` when the index does not cover
    /// the catalog row-for-row.
    pub fn with_index(
        catalog: Catalog,
        index: Arc<dyn SimilaritySource>,
    ) -> Result<Self, RecommendError> {
        if index.row_count() != catalog.len() {
            return Err(RecommendError::IndexSizeMismatch {
                rows: index.row_count(),
                products: catalog.len(),
            });
        }
        let engine = Self::with_tfidf_config(catalog, TfidfConfig::default());
        *engine.index.write() = Some(index);
        Ok(engine)
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the shared similarity index, fitting it on first use.
    fn similarity_index(&self) -> Arc<dyn SimilaritySource> {
        if let Some(index) = self.index.read().as_ref() {
            return Arc::clone(index);
        }
        let mut slot = self.index.write();
        // Another thread may have built it while we waited on the lock.
        if let Some(index) = slot.as_ref() {
            return Arc::clone(index);
        }
        let fitted = TfidfIndex::fit(self.catalog.texts(), &self.tfidf_config);
        tracing::debug!(
            rows = fitted.row_count(),
            vocabulary = fitted.vocabulary_len(),
            "fitted similarity index"
        );
        let index: Arc<dyn SimilaritySource> = Arc::new(fitted);
        *slot = Some(Arc::clone(&index));
        index
    }

    /// Returns the top recommendations for the product identified by
    /// `query` (id, or unique title).
    ///
    /// Empty result sets are a valid outcome, not an error: filters may
    /// eliminate every candidate. Errors cover unresolvable queries,
    /// invalid parameters, and a similarity index that does not match the
    /// catalog.
    pub fn recommend(
        &self,
        query: &str,
        params: &RecommendParams,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        params.weights.validate()?;
        let query_row = self.catalog.resolve(query)?;

        let index = self.similarity_index();
        if index.row_count() != self.catalog.len() {
            return Err(RecommendError::IndexSizeMismatch {
                rows: index.row_count(),
                products: self.catalog.len(),
            });
        }

        let query_product = self.catalog.product(query_row);
        let text_similarity = index.similarity_for(&query_product.text);
        debug_assert_eq!(text_similarity.len(), self.catalog.len());

        let ratings: Vec<f32> = self.catalog.products().iter().map(|p| p.rating_score).collect();
        let prices: Vec<f32> = self.catalog.products().iter().map(|p| p.price).collect();
        let numeric = numeric_scores(&ratings, &prices, &params.weights);
        let combined = combined_scores(&text_similarity, &numeric, params.weights.text_weight);

        let candidates: Vec<ScoredCandidate> = self
            .catalog
            .products()
            .iter()
            .enumerate()
            .map(|(row, product)| ScoredCandidate {
                row,
                text_similarity: text_similarity[row],
                numeric_score: numeric[row],
                combined_score: combined[row],
                rating_count: product.rating_count,
                age_days: product.age_days,
            })
            .collect();

        let rank_params = RankParams {
            top_n: params.top_n,
            rating_count_threshold: params.rating_count_threshold,
            new_item_age_days: params.new_item_age_days,
        };
        let ranked = rank(candidates, &self.catalog, &query_product.title, &rank_params);

        tracing::debug!(
            query = %query_product.title,
            returned = ranked.len(),
            top_n = params.top_n,
            "recommendation request served"
        );

        Ok(ranked
            .into_iter()
            .map(|c| {
                let product = self.catalog.product(c.row);
                Recommendation {
                    title: product.title.clone(),
                    combined_score: c.combined_score,
                    rating_score: round_score(product.rating_score),
                    rating_count: product.rating_count,
                    age_days: product.age_days,
                }
            })
            .collect())
    }
}
