//! Euclidean distance helpers shared by fitting, scoring and comparison.

/// Squared Euclidean distance, for comparisons that do not need the root.
///
/// Both vectors must have the same dimension; zipping alone would silently
/// truncate to the shorter one.
#[inline]
pub(crate) fn euclidean_sq(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "dimension mismatch");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

/// Euclidean distance between two feature vectors.
#[inline]
pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    euclidean_sq(a, b).sqrt()
}
