//! Error types for catalog construction and recommendation requests.
//!
//! Every failure carries the offending input so callers can render a
//! user-facing message without string parsing. Empty result sets are not
//! errors; `recommend` returns an empty `Vec` when filters eliminate all
//! candidates.

use thiserror::Error;

/// Errors surfaced by catalog construction and `recommend` requests.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The query matched no catalog row, neither by id nor by title.
    #[error("no catalog item matches '{query}'")]
    ItemNotFound {
        /// The id or title the caller asked for.
        query: String,
    },

    /// The query title matched multiple distinct catalog rows.
    ///
    /// Titles are a convenience lookup layered over ids; when a title is
    /// shared the caller must disambiguate by id.
    #[error("title '{title}' matches {matches} catalog items; query by id instead")]
    AmbiguousTitle {
        /// The ambiguous title.
        title: String,
        /// Number of rows sharing the title.
        matches: usize,
    },

    /// The similarity index does not cover the catalog row-for-row.
    ///
    /// Raised when an injected index was fitted against a different
    /// catalog. Fatal for the request; the caller must rebuild the index.
    #[error("similarity index has {rows} rows but the catalog has {products} products")]
    IndexSizeMismatch {
        /// Rows covered by the index.
        rows: usize,
        /// Products in the catalog.
        products: usize,
    },

    /// A request parameter is outside its documented range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two catalog products share an id.
    #[error("duplicate product id '{0}' in catalog")]
    DuplicateId(String),

    /// A numeric product field is NaN or infinite.
    #[error("product '{id}' has a non-finite {field}")]
    NonFinite {
        /// Id of the offending product.
        id: String,
        /// Name of the offending field.
        field: &'static str,
    },
}
