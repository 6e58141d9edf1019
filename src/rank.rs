//! Ranking with eligibility filtering and a freshness carve-out.
//!
//! The canonical ordering everywhere in this module is
//! `(combined_score desc, rating_count desc)`, stable under exact ties.
//! After self-exclusion and the rating-count filter, one result slot is
//! guaranteed to the highest-ranked eligible "new" row (if any exists);
//! the remaining slots fill with the top eligible rows, and the merged
//! short list is re-sorted by the same canonical ordering before
//! truncation.

use crate::catalog::Catalog;
use crate::config;
use crate::scoring::ScoredCandidate;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Request parameters for the ranking stage.
#[derive(Debug, Clone, Copy)]
pub struct RankParams {
    /// Maximum number of rows returned.
    pub top_n: usize,
    /// A row is eligible only if `rating_count` strictly exceeds this.
    pub rating_count_threshold: u32,
    /// A row is "new" if `age_days` is at or below this.
    pub new_item_age_days: u32,
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            top_n: config::DEFAULT_TOP_N,
            rating_count_threshold: config::DEFAULT_RATING_COUNT_THRESHOLD,
            new_item_age_days: config::DEFAULT_NEW_ITEM_AGE_DAYS,
        }
    }
}

/// Sorts candidates by the canonical ordering, stable under ties.
fn sort_canonical(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by_key(|c| {
        (
            Reverse(OrderedFloat(c.combined_score)),
            Reverse(c.rating_count),
        )
    });
}

/// Ranks scored candidates into the final short list.
///
/// Steps, in order: canonical sort; exclusion of every row whose title
/// equals `query_title` (title-match semantics — all rows sharing the
/// query title are excluded); strict rating-count filter; freshness
/// carve-out; fill; merge, re-sort, truncate to `top_n`. Returns an empty
/// list (not an error) when no row survives the filters.
pub fn rank(
    mut candidates: Vec<ScoredCandidate>,
    catalog: &Catalog,
    query_title: &str,
    params: &RankParams,
) -> Vec<ScoredCandidate> {
    sort_canonical(&mut candidates);

    let eligible: Vec<ScoredCandidate> = candidates
        .into_iter()
        .filter(|c| catalog.product(c.row).title != query_title)
        .filter(|c| c.rating_count > params.rating_count_threshold)
        .collect();

    // Highest-ranked eligible new row, if any, gets a guaranteed slot.
    let fresh = eligible
        .iter()
        .position(|c| c.age_days <= params.new_item_age_days);

    let mut short_list: Vec<ScoredCandidate> = match fresh {
        Some(fresh_idx) => {
            let slots = params.top_n.saturating_sub(1);
            let mut merged: Vec<ScoredCandidate> = vec![eligible[fresh_idx].clone()];
            merged.extend(
                eligible
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != fresh_idx)
                    .take(slots)
                    .map(|(_, c)| c.clone()),
            );
            merged
        }
        None => eligible.into_iter().take(params.top_n).collect(),
    };

    sort_canonical(&mut short_list);
    short_list.truncate(params.top_n);
    short_list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    fn make_catalog(rows: &[(&str, &str)]) -> Catalog {
        Catalog::new(
            rows.iter()
                .map(|&(id, title)| Product::new(id, title, 4.0, 100, 10.0, 2000))
                .collect(),
        )
        .unwrap()
    }

    fn candidate(row: usize, score: f32, rating_count: u32, age_days: u32) -> ScoredCandidate {
        ScoredCandidate {
            row,
            text_similarity: 0.0,
            numeric_score: 0.0,
            combined_score: score,
            rating_count,
            age_days,
        }
    }

    #[test]
    fn test_canonical_ordering() {
        let catalog = make_catalog(&[("q", "Query"), ("a", "A"), ("b", "B"), ("c", "C")]);
        let candidates = vec![
            candidate(1, 0.50, 10, 2000),
            candidate(2, 0.90, 10, 2000),
            candidate(3, 0.50, 99, 2000),
        ];
        let params = RankParams {
            rating_count_threshold: 0,
            ..RankParams::default()
        };
        let ranked = rank(candidates, &catalog, "Query", &params);
        let rows: Vec<usize> = ranked.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![2, 3, 1], "score desc, then rating count desc");
    }

    #[test]
    fn test_self_excluded_by_title() {
        let catalog = make_catalog(&[("q", "Query"), ("a", "A"), ("dup", "Query")]);
        let candidates = vec![
            candidate(0, 0.99, 100, 2000),
            candidate(1, 0.10, 100, 2000),
            candidate(2, 0.95, 100, 2000),
        ];
        let params = RankParams {
            rating_count_threshold: 0,
            ..RankParams::default()
        };
        let ranked = rank(candidates, &catalog, "Query", &params);
        let rows: Vec<usize> = ranked.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![1], "both rows titled 'Query' are excluded");
    }

    #[test]
    fn test_strict_rating_count_filter() {
        let catalog = make_catalog(&[("q", "Query"), ("a", "A"), ("b", "B")]);
        let candidates = vec![
            candidate(1, 0.9, 20, 2000), // exactly at threshold: excluded
            candidate(2, 0.8, 21, 2000),
        ];
        let params = RankParams {
            rating_count_threshold: 20,
            ..RankParams::default()
        };
        let ranked = rank(candidates, &catalog, "Query", &params);
        let rows: Vec<usize> = ranked.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![2]);
    }

    #[test]
    fn test_new_item_carved_in() {
        let catalog = make_catalog(&[
            ("q", "Query"),
            ("a", "A"),
            ("b", "B"),
            ("c", "C"),
            ("e", "E"),
        ]);
        // E scores lowest but is the only new row; with top_n=3 it must
        // displace the weakest established row.
        let candidates = vec![
            candidate(1, 0.9, 100, 2000),
            candidate(2, 0.8, 100, 2000),
            candidate(3, 0.7, 100, 2000),
            candidate(4, 0.1, 100, 50),
        ];
        let params = RankParams {
            top_n: 3,
            rating_count_threshold: 0,
            ..RankParams::default()
        };
        let ranked = rank(candidates, &catalog, "Query", &params);
        let rows: Vec<usize> = ranked.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![1, 2, 4], "E fills the guaranteed slot, re-ranked last");
    }

    #[test]
    fn test_single_new_item_only() {
        let catalog = make_catalog(&[("q", "Query"), ("a", "A"), ("b", "B"), ("c", "C")]);
        // Two new rows: only the higher-ranked one is guaranteed; the
        // other competes for the remaining slots like anyone else.
        let candidates = vec![
            candidate(1, 0.9, 100, 100),
            candidate(2, 0.8, 100, 2000),
            candidate(3, 0.1, 100, 100),
        ];
        let params = RankParams {
            top_n: 2,
            rating_count_threshold: 0,
            ..RankParams::default()
        };
        let ranked = rank(candidates, &catalog, "Query", &params);
        let rows: Vec<usize> = ranked.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![1, 2], "row 3 is not pulled in: slot already new");
    }

    #[test]
    fn test_new_item_not_double_counted() {
        let catalog = make_catalog(&[("q", "Query"), ("a", "A"), ("b", "B")]);
        // The new row is also the top-scored row; it must appear once.
        let candidates = vec![
            candidate(1, 0.9, 100, 100),
            candidate(2, 0.8, 100, 2000),
        ];
        let params = RankParams {
            top_n: 2,
            rating_count_threshold: 0,
            ..RankParams::default()
        };
        let ranked = rank(candidates, &catalog, "Query", &params);
        let rows: Vec<usize> = ranked.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn test_no_new_items_plain_top_n() {
        let catalog = make_catalog(&[("q", "Query"), ("a", "A"), ("b", "B"), ("c", "C")]);
        let candidates = vec![
            candidate(1, 0.9, 100, 3000),
            candidate(2, 0.8, 100, 3000),
            candidate(3, 0.7, 100, 3000),
        ];
        let params = RankParams {
            top_n: 2,
            rating_count_threshold: 0,
            ..RankParams::default()
        };
        let ranked = rank(candidates, &catalog, "Query", &params);
        let rows: Vec<usize> = ranked.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn test_filters_eliminate_all() {
        let catalog = make_catalog(&[("q", "Query"), ("a", "A")]);
        let candidates = vec![candidate(1, 0.9, 5, 2000)];
        let params = RankParams {
            rating_count_threshold: 1000,
            ..RankParams::default()
        };
        assert!(rank(candidates, &catalog, "Query", &params).is_empty());
    }

    #[test]
    fn test_bounded_by_eligible_pool() {
        let catalog = make_catalog(&[("q", "Query"), ("a", "A"), ("b", "B")]);
        let candidates = vec![
            candidate(1, 0.9, 100, 2000),
            candidate(2, 0.8, 100, 100),
        ];
        let params = RankParams {
            top_n: 10,
            rating_count_threshold: 0,
            ..RankParams::default()
        };
        let ranked = rank(candidates, &catalog, "Query", &params);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_top_n_zero() {
        let catalog = make_catalog(&[("q", "Query"), ("a", "A")]);
        let candidates = vec![candidate(1, 0.9, 100, 100)];
        let params = RankParams {
            top_n: 0,
            rating_count_threshold: 0,
            ..RankParams::default()
        };
        assert!(rank(candidates, &catalog, "Query", &params).is_empty());
    }
}
