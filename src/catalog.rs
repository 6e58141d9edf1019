//! Read-only product catalog with id and title lookup.
//!
//! A [`Catalog`] owns the product rows for the lifetime of the engine and
//! never changes after construction. Construction validates the invariants
//! the scoring pipeline relies on: unique ids and finite numeric signals.
//! Ids are the primary lookup key; titles are a convenience layer on top
//! and may be shared between rows.

use crate::error::RecommendError;
use crate::product::Product;
use std::collections::HashMap;

/// Validated, immutable set of products available for recommendation.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
    by_title: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Builds a catalog, validating invariants.
    ///
    /// Returns `DuplicateId` if two products share an id and `NonFinite`
    /// if a rating score or price is NaN or infinite (either would poison
    /// the ranking order downstream).
    pub fn new(products: Vec<Product>) -> Result<Self, RecommendError> {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut by_title: HashMap<String, Vec<usize>> = HashMap::with_capacity(products.len());

        for (row, product) in products.iter().enumerate() {
            if !product.rating_score.is_finite() {
                return Err(RecommendError::NonFinite {
                    id: product.id.clone(),
                    field: "rating_score",
                });
            }
            if !product.price.is_finite() {
                return Err(RecommendError::NonFinite {
                    id: product.id.clone(),
                    field: "price",
                });
            }
            if by_id.insert(product.id.clone(), row).is_some() {
                return Err(RecommendError::DuplicateId(product.id.clone()));
            }
            by_title.entry(product.title.clone()).or_default().push(row);
        }

        Ok(Self {
            products,
            by_id,
            by_title,
        })
    }

    /// Resolves a query to a row index.
    ///
    /// An exact id match wins. Otherwise the query is treated as a title:
    /// a unique title resolves to its row, a shared title is an error
    /// (logged, never silently picking one of the rows), and no match at
    /// all is `ItemNotFound`.
    pub fn resolve(&self, query: &str) -> Result<usize, RecommendError> {
        if let Some(&row) = self.by_id.get(query) {
            return Ok(row);
        }
        match self.by_title.get(query).map(Vec::as_slice) {
            Some([row]) => Ok(*row),
            Some(rows) => {
                tracing::warn!(title = %query, matches = rows.len(), "ambiguous title lookup");
                Err(RecommendError::AmbiguousTitle {
                    title: query.to_string(),
                    matches: rows.len(),
                })
            }
            None => Err(RecommendError::ItemNotFound {
                query: query.to_string(),
            }),
        }
    }

    /// Returns the product at `row`.
    pub fn product(&self, row: usize) -> &Product {
        &self.products[row]
    }

    /// Returns all products in row order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates over the combined text of every row, in row order. This is
    /// the corpus a similarity index must be fitted against.
    pub fn texts(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.products.iter().map(|p| p.text.as_str())
    }
}
