//! Polarity-aware min-max feature normalization.
//!
//! Rescales a raw numeric column into [0, 1] so heterogeneous features can
//! be blended linearly. The sign of the feature's weight encodes polarity:
//! positive means a higher raw value is better, negative means lower is
//! better, and "better" always maps toward 1.

use crate::config;

/// Min-max normalizes `values` into [0, 1], honoring the polarity encoded
/// in the sign of `weight`.
///
/// With `weight > 0` the maximum maps to 1; with `weight < 0` the minimum
/// maps to 1 (`1 - minmax`). A degenerate column where every value is
/// equal (including a single-row catalog) has no defined min-max image;
/// every value becomes [`config::DEGENERATE_NORM`] instead of dividing by
/// zero.
pub fn normalize_feature(values: &[f32], weight: f32) -> Vec<f32> {
    let Some((min, max)) = min_max(values) else {
        return Vec::new();
    };
    let range = max - min;
    if range < f32::EPSILON {
        return vec![config::DEGENERATE_NORM; values.len()];
    }

    values
        .iter()
        .map(|&v| {
            let scaled = (v - min) / range;
            if weight < 0.0 {
                1.0 - scaled
            } else {
                scaled
            }
        })
        .collect()
}

/// Single-pass min/max computation.
fn min_max(values: &[f32]) -> Option<(f32, f32)> {
    if values.is_empty() {
        return None;
    }
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Some((min, max))
}
