//! TF-IDF vectorizer: vocabulary, inverse document frequencies, and
//! sparse vector transforms.
//!
//! Fitting scans the corpus once to count document frequencies, prunes the
//! vocabulary by the configured df bounds, and precomputes smoothed IDF
//! weights. Transforming a text yields an L2-normalized sparse vector, so
//! cosine similarity between two transformed texts is a plain dot product.

use crate::config;
use crate::tfidf::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Document-frequency bounds applied when fitting a vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfConfig {
    /// Minimum number of documents a term must appear in. Absolute count.
    pub min_df: usize,
    /// Maximum share of documents a term may appear in before it is
    /// pruned as a near-stop-word. 1.0 disables the bound.
    pub max_df_ratio: f32,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            min_df: config::TFIDF_MIN_DF,
            max_df_ratio: config::TFIDF_MAX_DF_RATIO,
        }
    }
}

/// An L2-normalized sparse TF-IDF vector. Term ids are sorted ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SparseVector {
    terms: Vec<(u32, f32)>,
}

impl SparseVector {
    /// Dot product via merge join over the sorted term ids. Because both
    /// vectors are L2-normalized this is the cosine similarity.
    pub fn dot(&self, other: &Self) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.terms.len() && j < other.terms.len() {
            let (ta, wa) = self.terms[i];
            let (tb, wb) = other.terms[j];
            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Returns the number of non-zero terms.
    pub fn nnz(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the vector has no non-zero terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Fitted vocabulary with per-term smoothed IDF weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// term → term id
    vocabulary: HashMap<String, u32>,
    /// term id → smoothed IDF weight
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Fits a vocabulary over the corpus.
    ///
    /// Terms outside the df bounds are pruned. Surviving terms get ids in
    /// lexicographic order, so fitting the same corpus twice produces a
    /// bit-identical vectorizer. IDF is smoothed: `ln((1+n)/(1+df)) + 1`,
    /// never zero or negative.
    pub fn fit<'a, I>(corpus: I, cfg: &TfidfConfig) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut df: HashMap<String, usize> = HashMap::new();
        let mut doc_count = 0usize;

        for text in corpus {
            doc_count += 1;
            let tokens = tokenize(text);
            let mut seen: HashSet<&str> = HashSet::with_capacity(tokens.len());
            for token in tokens.iter() {
                if seen.insert(token) {
                    *df.entry(token.to_string()).or_insert(0) += 1;
                }
            }
        }

        let max_df = cfg.max_df_ratio * doc_count as f32;
        let mut kept: Vec<(String, usize)> = df
            .into_iter()
            .filter(|&(_, count)| count >= cfg.min_df && count as f32 <= max_df)
            .collect();
        kept.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let n = doc_count as f32;
        let mut vocabulary = HashMap::with_capacity(kept.len());
        let mut idf = Vec::with_capacity(kept.len());
        for (term_id, (term, count)) in kept.into_iter().enumerate() {
            vocabulary.insert(term, term_id as u32);
            idf.push(((1.0 + n) / (1.0 + count as f32)).ln() + 1.0);
        }

        Self { vocabulary, idf }
    }

    /// Transforms a text into an L2-normalized TF×IDF sparse vector.
    /// Out-of-vocabulary tokens contribute nothing; a text with no known
    /// tokens yields the empty vector (similarity 0 against everything).
    pub fn transform(&self, text: &str) -> SparseVector {
        let tokens = tokenize(text);
        let mut tf: HashMap<u32, u32> = HashMap::with_capacity(tokens.len());
        for token in tokens.iter() {
            if let Some(&term_id) = self.vocabulary.get(token) {
                *tf.entry(term_id).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<(u32, f32)> = tf
            .into_iter()
            .map(|(term_id, count)| (term_id, count as f32 * self.idf[term_id as usize]))
            .collect();
        terms.sort_unstable_by_key(|&(term_id, _)| term_id);

        let norm: f32 = terms.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut terms {
                *w /= norm;
            }
        }

        SparseVector { terms }
    }

    /// Returns the number of terms in the fitted vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit_default(corpus: &[&str]) -> TfidfVectorizer {
        TfidfVectorizer::fit(corpus.iter().copied(), &TfidfConfig::default())
    }

    #[test]
    fn test_fit_builds_vocabulary() {
        let v = fit_default(&["wireless speaker", "wireless headphones"]);
        assert_eq!(v.vocabulary_len(), 3);
    }

    #[test]
    fn test_min_df_prunes_rare_terms() {
        let cfg = TfidfConfig {
            min_df: 2,
            max_df_ratio: 1.0,
        };
        let v = TfidfVectorizer::fit(
            ["wireless speaker", "wireless headphones"].into_iter(),
            &cfg,
        );
        // Only "wireless" appears in 2 documents.
        assert_eq!(v.vocabulary_len(), 1);
    }

    #[test]
    fn test_max_df_prunes_ubiquitous_terms() {
        let cfg = TfidfConfig {
            min_df: 1,
            max_df_ratio: 0.7,
        };
        let v = TfidfVectorizer::fit(
            [
                "wireless speaker",
                "wireless headphones",
                "wireless charger",
            ]
            .into_iter(),
            &cfg,
        );
        // "wireless" appears in 3/3 documents > 0.7, pruned.
        assert_eq!(v.vocabulary_len(), 3);
        assert!(v.transform("wireless").is_empty());
    }

    #[test]
    fn test_transform_is_normalized() {
        let v = fit_default(&["ceramic coffee mug", "steel travel mug"]);
        let vec = v.transform("ceramic coffee mug");
        let norm: f32 = (vec.dot(&vec)).sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm = {norm}");
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let v = fit_default(&["ceramic coffee"]);
        let vec = v.transform("zirconium flask");
        assert!(vec.is_empty());
    }

    #[test]
    fn test_rare_term_weighs_more_than_common() {
        let v = fit_default(&[
            "steel knife kitchen",
            "steel fork kitchen",
            "steel spoon garden",
        ]);
        // "garden" (df=1) must outweigh "steel" (df=3) within one vector.
        let vec = v.transform("steel garden");
        let a = v.transform("steel knife kitchen");
        let b = v.transform("steel spoon garden");
        assert!(
            vec.dot(&b) > vec.dot(&a),
            "shared rare term should dominate similarity"
        );
    }

    #[test]
    fn test_fit_is_deterministic() {
        let corpus = ["alpha beta gamma", "beta gamma delta", "gamma delta epsilon"];
        let v1 = TfidfVectorizer::fit(corpus.into_iter(), &TfidfConfig::default());
        let v2 = TfidfVectorizer::fit(corpus.into_iter(), &TfidfConfig::default());
        let s1 = v1.transform("alpha gamma epsilon");
        let s2 = v2.transform("alpha gamma epsilon");
        assert_eq!(format!("{s1:?}"), format!("{s2:?}"));
    }

    #[test]
    fn test_dot_orthogonal_and_identical() {
        let v = fit_default(&["ceramic coffee", "steel flask"]);
        let a = v.transform("ceramic coffee");
        let b = v.transform("steel flask");
        assert!(a.dot(&b).abs() < 1e-6);
        assert!((a.dot(&a) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_corpus() {
        let v = TfidfVectorizer::fit(std::iter::empty(), &TfidfConfig::default());
        assert_eq!(v.vocabulary_len(), 0);
        assert!(v.transform("anything").is_empty());
    }
}
