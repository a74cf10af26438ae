//! Silhouette scoring for a fitted labeling
//!
//! The silhouette of a point combines cohesion (mean distance to its own
//! cluster) with separation (mean distance to the nearest other cluster).
//! The score of a labeling is the mean silhouette over all points and lands
//! in [-1, 1]. It is only defined for at least two clusters; that policy is
//! enforced by the caller, not here.

use crate::distance::euclidean;

/// Mean silhouette coefficient of `points` under `labels`.
///
/// `labels[i]` is the cluster index of `points[i]`, all below `k`. Points in
/// singleton clusters score 0, the usual convention. Cost is O(n^2 * d).
#[must_use]
pub fn silhouette_score(points: &[Vec<f64>], labels: &[usize], k: usize) -> f64 {
    debug_assert_eq!(points.len(), labels.len());

    let mut sizes = vec![0usize; k];
    for &label in labels {
        sizes[label] += 1;
    }

    let n = points.len();
    let mut total = 0.0;

    for i in 0..n {
        let own = labels[i];
        if sizes[own] <= 1 {
            // Singleton cluster: silhouette defined as 0.
            continue;
        }

        // Mean distance from point i to every cluster.
        let mut sums = vec![0.0f64; k];
        for j in 0..n {
            if i != j {
                sums[labels[j]] += euclidean(&points[i], &points[j]);
            }
        }

        let a = sums[own] / (sizes[own] - 1) as f64;
        let b = (0..k)
            .filter(|&c| c != own && sizes[c] > 0)
            .map(|c| sums[c] / sizes[c] as f64)
            .fold(f64::INFINITY, f64::min);

        if b.is_finite() {
            total += (b - a) / a.max(b);
        }
    }

    total / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_separated_clusters_score_high() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.0],
            vec![10.0, 10.1],
        ];
        let labels = vec![0, 0, 0, 1, 1, 1];
        let score = silhouette_score(&points, &labels, 2);
        assert!(score > 0.9, "score was {score}");
        assert!(score <= 1.0);
    }

    #[test]
    fn test_bad_labeling_scores_low() {
        let points = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![10.0, 10.0],
            vec![10.1, 10.0],
        ];
        // Deliberately split each tight pair across clusters.
        let labels = vec![0, 1, 0, 1];
        let score = silhouette_score(&points, &labels, 2);
        assert!(score < 0.0, "score was {score}");
        assert!(score >= -1.0);
    }

    #[test]
    fn test_singleton_clusters_score_zero() {
        let points = vec![vec![0.0], vec![5.0]];
        let labels = vec![0, 1];
        assert_eq!(silhouette_score(&points, &labels, 2), 0.0);
    }
}
