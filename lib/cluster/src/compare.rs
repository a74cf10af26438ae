//! Cluster correspondence between two snapshots
//!
//! Two models of the same cluster count are compared by first matching their
//! clusters, then reporting per-pair shift metrics. Matching is greedy
//! nearest-centroid: clusters of the left model, in ascending index order,
//! each claim the closest still-unmatched cluster of the right model. That
//! is deterministic and cheap but not a minimum-total-distance bipartite
//! match; callers needing optimality can swap the matching step without
//! touching the surrounding contract.

use ordered_float::OrderedFloat;
use serde::Serialize;

use driftx_core::{Error, Result};

use crate::distance::euclidean;
use crate::kmeans::ClusterModel;

/// Shift metrics for one matched cluster pair, all signed `right - left`
/// except `centroid_shift`, which is a distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterShift {
    /// Cluster index in the left model.
    pub source: usize,
    /// Matched cluster index in the right model.
    pub matched: usize,
    /// Euclidean distance between the matched centroids.
    pub centroid_shift: f64,
    pub radius_delta: f64,
    pub population_percentage_delta: f64,
}

/// Result of comparing two cluster models of equal cluster count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterComparison {
    /// One entry per cluster of the left model, in ascending source order.
    pub shifts: Vec<ClusterShift>,
    /// `right - left` silhouette difference; `None` when either side's
    /// silhouette is undefined (single-cluster models).
    pub silhouette_delta: Option<f64>,
}

impl ClusterComparison {
    /// True when every pair shows zero shift and the silhouette delta is
    /// zero or undefined on both sides.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.shifts.iter().all(|s| {
            s.centroid_shift == 0.0
                && s.radius_delta == 0.0
                && s.population_percentage_delta == 0.0
        }) && self.silhouette_delta.unwrap_or(0.0) == 0.0
    }
}

/// Match clusters between two models and compute their shift metrics.
///
/// Fails with [`Error::ClusterCountMismatch`] when the models disagree on
/// cluster count; there is no best-effort matching across differing counts.
pub fn compare_models(left: &ClusterModel, right: &ClusterModel) -> Result<ClusterComparison> {
    if left.num_clusters != right.num_clusters {
        return Err(Error::ClusterCountMismatch {
            left: left.num_clusters,
            right: right.num_clusters,
        });
    }

    let k = left.num_clusters;
    let mut claimed = vec![false; k];
    let mut shifts = Vec::with_capacity(k);

    for (source, centroid) in left.centroids.iter().enumerate() {
        // Strict less-than while scanning ascending j keeps the lowest
        // right-hand index on distance ties.
        let mut matched = usize::MAX;
        let mut best = OrderedFloat(f64::INFINITY);
        for (j, candidate) in right.centroids.iter().enumerate() {
            if claimed[j] {
                continue;
            }
            let dist = OrderedFloat(euclidean(centroid, candidate));
            if dist < best {
                best = dist;
                matched = j;
            }
        }
        claimed[matched] = true;

        shifts.push(ClusterShift {
            source,
            matched,
            centroid_shift: best.into_inner(),
            radius_delta: right.radius[matched] - left.radius[source],
            population_percentage_delta: right.labels_percentages[matched]
                - left.labels_percentages[source],
        });
    }

    let silhouette_delta = match (left.silhouette_score, right.silhouette_score) {
        (Some(l), Some(r)) => Some(r - l),
        _ => None,
    };

    Ok(ClusterComparison {
        shifts,
        silhouette_delta,
    })
}
