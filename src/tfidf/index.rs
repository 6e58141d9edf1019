//! Fitted text similarity index.
//!
//! A [`TfidfIndex`] pairs a fitted [`TfidfVectorizer`] with the
//! pre-transformed vector of every catalog row. Querying returns the
//! cosine similarity of the query text against each row, aligned to the
//! corpus row order the index was fitted with. The index is immutable
//! after fitting; it is fitted once per catalog and shared across
//! requests.

use crate::recommend::SimilaritySource;
use crate::tfidf::vectorizer::{SparseVector, TfidfConfig, TfidfVectorizer};
use serde::{Deserialize, Serialize};

/// TF-IDF cosine similarity index over a fixed corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfIndex {
    vectorizer: TfidfVectorizer,
    rows: Vec<SparseVector>,
}

impl TfidfIndex {
    /// Fits the vocabulary over the corpus and pre-transforms every row.
    /// Row order of the corpus is preserved in every similarity vector
    /// this index produces.
    pub fn fit<'a, I>(corpus: I, cfg: &TfidfConfig) -> Self
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        let vectorizer = TfidfVectorizer::fit(corpus.clone(), cfg);
        let rows = corpus
            .into_iter()
            .map(|text| vectorizer.transform(text))
            .collect();
        Self { vectorizer, rows }
    }

    /// Returns the cosine similarity of `query_text` against every corpus
    /// row, in row order. Scores are in [0, 1]; a query with no
    /// in-vocabulary tokens scores 0 everywhere.
    pub fn similarity_for(&self, query_text: &str) -> Vec<f32> {
        let query = self.vectorizer.transform(query_text);
        self.rows.iter().map(|row| query.dot(row)).collect()
    }

    /// Returns the number of corpus rows the index was fitted with.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the fitted vocabulary size.
    pub fn vocabulary_len(&self) -> usize {
        self.vectorizer.vocabulary_len()
    }
}

impl SimilaritySource for TfidfIndex {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn similarity_for(&self, query_text: &str) -> Vec<f32> {
        TfidfIndex::similarity_for(self, query_text)
    }
}
