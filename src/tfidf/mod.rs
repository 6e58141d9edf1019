//! TF-IDF text similarity engine.
//!
//! Implements the default [`SimilaritySource`](crate::SimilaritySource):
//! a vocabulary fitted over the catalog's combined product texts, with
//! cosine similarity between L2-normalized TF×IDF sparse vectors. No
//! stemming is applied; Unicode is NFKD-folded to ASCII.

/// Fitted similarity index with pre-transformed corpus rows.
pub mod index;
/// Tokenizer with Unicode folding, length floor, and stop word removal.
pub mod tokenizer;
/// Vocabulary fitting, IDF weighting, and sparse vector transforms.
pub mod vectorizer;

pub use index::TfidfIndex;
pub use vectorizer::{SparseVector, TfidfConfig, TfidfVectorizer};
