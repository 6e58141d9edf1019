//! Core product record.
//!
//! A `Product` is one catalog row: a stable id, a display title, the
//! combined text blob fed to the similarity index, and the numeric signals
//! used for scoring and filtering. Records are plain data; all derived
//! columns (similarity, normalized features, combined score) live in
//! request-scoped buffers and are never written back.

use serde::{Deserialize, Serialize};

/// A catalog product with text metadata and numeric signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier. Uniqueness across the catalog is
    /// enforced by [`Catalog::new`](crate::Catalog::new).
    pub id: String,
    /// Display name. Also the de-duplication key against the query item.
    pub title: String,
    /// Combined text representation (title + category), the unit fed to
    /// the text similarity index.
    pub text: String,
    /// Confidence-adjusted quality score. Arrives pre-computed; low-evidence
    /// ratings are already discounted.
    pub rating_score: f32,
    /// Number of ratings observed. Eligibility filter and tie-break only,
    /// never rescaled.
    pub rating_count: u32,
    /// Price, >= 0.
    pub price: f32,
    /// Days since listing. Classifies "new" vs "established" only.
    pub age_days: u32,
}

impl Product {
    /// Creates a product. The combined text defaults to the title; use
    /// [`with_text`](Self::with_text) when a richer blob is available.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        rating_score: f32,
        rating_count: u32,
        price: f32,
        age_days: u32,
    ) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            text: title.clone(),
            title,
            rating_score,
            rating_count,
            price,
            age_days,
        }
    }

    /// Replaces the combined text representation.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}
