//! # shoprec
//!
//! Embeddable content-based product recommendation engine: TF-IDF text
//! similarity over combined product texts, min-max-normalized rating and
//! price signals blended linearly, and a ranking stage that guarantees at
//! least one qualifying new product a result slot.
//!
//! This is a synchronous core library with zero async dependencies —
//! suitable for embedding directly in services, batch jobs, or language
//! bindings. The catalog is read-only input; the similarity index is
//! fitted once per catalog and shared across requests.
//!
//! ```
//! use shoprec::{Catalog, Product, RecommendParams, Recommender};
//!
//! let catalog = Catalog::new(vec![
//!     Product::new("a1", "Chef Knife", 4.6, 500, 39.99, 2200),
//!     Product::new("b2", "Paring Knife", 4.4, 300, 19.99, 90),
//!     Product::new("c3", "Garden Trowel", 4.0, 150, 14.99, 1800),
//! ])?;
//! let engine = Recommender::new(catalog);
//!
//! let params = RecommendParams {
//!     top_n: 2,
//!     rating_count_threshold: 100,
//!     ..RecommendParams::default()
//! };
//! let results = engine.recommend("a1", &params)?;
//! assert!(results.len() <= 2);
//! # Ok::<(), shoprec::RecommendError>(())
//! ```

/// Read-only product catalog with id and title lookup.
pub mod catalog;
/// Global configuration constants: defaults and tuning parameters.
pub mod config;
/// Error types for catalog construction and recommendation requests.
pub mod error;
/// Core product record.
pub mod product;
/// Ranking: canonical ordering, eligibility filters, freshness carve-out.
pub mod rank;
/// Recommender facade and the consumed similarity interface.
pub mod recommend;
/// Scoring primitives: normalization and linear score blending.
pub mod scoring;
/// TF-IDF text similarity engine: tokenizer, vectorizer, fitted index.
pub mod tfidf;

pub use catalog::Catalog;
pub use error::RecommendError;
pub use product::Product;
pub use rank::RankParams;
pub use recommend::{Recommendation, RecommendParams, Recommender, SimilaritySource};
pub use scoring::ScoreWeights;
pub use tfidf::{TfidfConfig, TfidfIndex};
