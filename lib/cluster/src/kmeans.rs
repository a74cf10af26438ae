//! Deterministic k-means clustering summaries
//!
//! [`ClusterModel::fit`] runs Lloyd's algorithm with k-means++ initialization
//! driven by an explicit seed, so two fits over identical input produce
//! identical models. That determinism is what makes serialization round-trip
//! tests and snapshot-to-snapshot comparison meaningful.
//!
//! [`ClusterModel::best_fit`] searches a cluster-count range and keeps the
//! fit with the best silhouette score, preferring the smallest count on ties.

use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use driftx_core::{Dataset, Error, Result};

use crate::distance::{euclidean, euclidean_sq};
use crate::silhouette::silhouette_score;

/// Tolerance used for centroid and silhouette equality between models.
pub const MODEL_EPSILON: f64 = 1e-4;

/// Configuration for one k-means fit.
///
/// The seed is caller-visible on purpose: repeated fits over identical input
/// must be byte-identical, so there is no hidden entropy anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitConfig {
    /// Seed for centroid initialization.
    pub seed: u64,
    /// Independent restarts; the run with the lowest inertia wins.
    pub n_init: usize,
    /// Iteration cap for Lloyd's algorithm, per restart.
    pub max_iterations: usize,
    /// Convergence threshold on the largest centroid movement.
    pub convergence_threshold: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            n_init: 10,
            max_iterations: 300,
            convergence_threshold: 1e-6,
        }
    }
}

/// Inclusive cluster-count range searched by [`ClusterModel::best_fit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRange {
    pub min_k: usize,
    pub max_k: usize,
}

impl SearchRange {
    pub fn new(min_k: usize, max_k: usize) -> Self {
        Self { min_k, max_k }
    }

    /// Default search range for a dataset: 2 through `min(10, rows - 1)`.
    #[must_use]
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            min_k: 2,
            max_k: 10.min(dataset.num_rows().saturating_sub(1)),
        }
    }
}

/// K-means summary of one snapshot at a fixed cluster count.
///
/// Equality compares `num_clusters`, `radius` and `labels_percentages`
/// exactly, and `centroids` and `silhouette_score` within [`MODEL_EPSILON`],
/// matching what survives a serialization round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterModel {
    pub num_clusters: usize,
    /// One coordinate vector per cluster, each of feature-column length.
    pub centroids: Vec<Vec<f64>>,
    /// `radius[i]` is the largest distance from a member of cluster `i` to
    /// its centroid; 0.0 for singleton (or emptied) clusters.
    pub radius: Vec<f64>,
    /// Mean silhouette of the fitted labeling; `None` for a single cluster,
    /// where the metric is undefined.
    pub silhouette_score: Option<f64>,
    /// `labels_percentages[i]` is the fraction of points in cluster `i`;
    /// sums to 1.0 within floating tolerance.
    pub labels_percentages: Vec<f64>,
}

impl PartialEq for ClusterModel {
    fn eq(&self, other: &Self) -> bool {
        if self.num_clusters != other.num_clusters
            || self.radius != other.radius
            || self.labels_percentages != other.labels_percentages
        {
            return false;
        }
        let silhouette_close = match (self.silhouette_score, other.silhouette_score) {
            (None, None) => true,
            (Some(a), Some(b)) => (a - b).abs() <= MODEL_EPSILON,
            _ => false,
        };
        silhouette_close
            && self.centroids.len() == other.centroids.len()
            && self
                .centroids
                .iter()
                .zip(&other.centroids)
                .all(|(a, b)| {
                    a.len() == b.len()
                        && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= MODEL_EPSILON)
                })
    }
}

impl ClusterModel {
    /// Fit a `k`-cluster summary of the dataset.
    ///
    /// Requires `1 <= k <= num_rows`, otherwise fails with
    /// [`Error::InvalidClusterCount`]. The fit is deterministic in
    /// `(dataset, k, config)`.
    pub fn fit(dataset: &Dataset, k: usize, config: &FitConfig) -> Result<Self> {
        let rows = dataset.num_rows();
        if k == 0 || k > rows {
            return Err(Error::InvalidClusterCount { k, rows });
        }

        let points = dataset.to_rows();
        let mut rng = StdRng::seed_from_u64(config.seed);

        // Restarts draw from one seeded stream, so the whole fit stays a
        // deterministic function of (dataset, k, config).
        let restarts = config.n_init.max(1);
        let mut centroids = Vec::new();
        let mut best_inertia = f64::INFINITY;
        for _ in 0..restarts {
            let candidate = lloyd(&points, k, config, &mut rng);
            let candidate_inertia = inertia(&points, &candidate);
            if candidate_inertia < best_inertia {
                best_inertia = candidate_inertia;
                centroids = candidate;
            }
        }
        tracing::debug!(k, restarts, inertia = best_inertia, "k-means fit complete");

        let mut labels = vec![0usize; points.len()];
        assign_labels(&points, &centroids, &mut labels);

        let mut counts = vec![0usize; k];
        let mut radius = vec![0.0f64; k];
        for (point, &label) in points.iter().zip(&labels) {
            counts[label] += 1;
            let dist = euclidean(point, &centroids[label]);
            if dist > radius[label] {
                radius[label] = dist;
            }
        }
        let labels_percentages = counts
            .iter()
            .map(|&c| c as f64 / points.len() as f64)
            .collect();

        let silhouette = if k >= 2 {
            Some(silhouette_score(&points, &labels, k))
        } else {
            None
        };

        Ok(Self {
            num_clusters: k,
            centroids,
            radius,
            silhouette_score: silhouette,
            labels_percentages,
        })
    }

    /// Fit every cluster count in `range` and keep the best.
    ///
    /// "Best" is the maximum silhouette score; ties prefer the smallest
    /// count. The per-count fits are independent and run on the rayon pool;
    /// the first failing fit aborts the whole search. Requires
    /// `2 <= min_k <= max_k <= num_rows`.
    pub fn best_fit(dataset: &Dataset, range: &SearchRange, config: &FitConfig) -> Result<Self> {
        let rows = dataset.num_rows();
        if range.min_k < 2 {
            return Err(Error::InvalidClusterCount {
                k: range.min_k,
                rows,
            });
        }
        if range.max_k < range.min_k || range.max_k > rows {
            return Err(Error::InvalidClusterCount {
                k: range.max_k,
                rows,
            });
        }

        let models = (range.min_k..=range.max_k)
            .into_par_iter()
            .map(|k| Self::fit(dataset, k, config))
            .collect::<Result<Vec<_>>>()?;

        let best = select_best(models).ok_or(Error::InvalidClusterCount {
            k: range.min_k,
            rows,
        })?;
        tracing::debug!(
            chosen_k = best.num_clusters,
            silhouette = best.silhouette_score,
            "best-fit search complete"
        );
        Ok(best)
    }
}

/// Pick the model with the maximum silhouette score.
///
/// Strict greater keeps the earliest candidate on ties; with candidates in
/// ascending cluster-count order that is the smallest count.
fn select_best(models: Vec<ClusterModel>) -> Option<ClusterModel> {
    let mut best: Option<ClusterModel> = None;
    for model in models {
        let better = match &best {
            None => true,
            Some(current) => {
                OrderedFloat(model.silhouette_score.unwrap_or(f64::NEG_INFINITY))
                    > OrderedFloat(current.silhouette_score.unwrap_or(f64::NEG_INFINITY))
            }
        };
        if better {
            best = Some(model);
        }
    }
    best
}

/// Number of distinct values in a label column, as a cluster-count hint.
///
/// Returns `None` when there are more than 10 distinct values, in which case
/// a caller is better served by [`ClusterModel::best_fit`].
#[must_use]
pub fn suggest_cluster_count(labels: &[f64]) -> Option<usize> {
    let mut sorted = labels.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    if sorted.len() > 10 {
        None
    } else {
        Some(sorted.len())
    }
}

/// One restart of Lloyd's algorithm: k-means++ init, then alternate
/// assignment and centroid updates until movement falls below the threshold
/// or the iteration cap is hit.
fn lloyd(points: &[Vec<f64>], k: usize, config: &FitConfig, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let mut centroids = kmeans_pp_init(points, k, rng);
    let mut labels = vec![0usize; points.len()];

    for iteration in 0..config.max_iterations {
        assign_labels(points, &centroids, &mut labels);
        let updated = update_centroids(points, &labels, &centroids);

        let movement = centroids
            .iter()
            .zip(&updated)
            .map(|(old, new)| euclidean(old, new))
            .fold(0.0f64, f64::max);
        centroids = updated;

        if movement < config.convergence_threshold {
            tracing::trace!(k, iteration, movement, "k-means restart converged");
            break;
        }
    }

    centroids
}

/// Within-cluster sum of squared distances to the nearest centroid.
fn inertia(points: &[Vec<f64>], centroids: &[Vec<f64>]) -> f64 {
    points
        .iter()
        .map(|p| {
            centroids
                .iter()
                .map(|c| euclidean_sq(p, c))
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

/// K-means++ initialization: spread the initial centroids out by picking
/// each next one with probability proportional to its squared distance from
/// the closest centroid chosen so far.
fn kmeans_pp_init(points: &[Vec<f64>], k: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    centroids.push(points[rng.random_range(0..n)].clone());

    let mut min_dists: Vec<f64> = points
        .iter()
        .map(|p| euclidean_sq(p, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = min_dists.iter().sum();
        let next = if total > 0.0 {
            let mut target = rng.random::<f64>() * total;
            let mut chosen = n - 1;
            for (i, d) in min_dists.iter().enumerate() {
                if target <= *d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            chosen
        } else {
            // All remaining points coincide with a centroid; any index keeps
            // the fit deterministic.
            rng.random_range(0..n)
        };

        centroids.push(points[next].clone());
        let latest = centroids.last().map(Vec::as_slice).unwrap_or_default();
        for (dist, point) in min_dists.iter_mut().zip(points) {
            let d = euclidean_sq(point, latest);
            if d < *dist {
                *dist = d;
            }
        }
    }

    centroids
}

/// Assign every point to its nearest centroid (lowest index wins ties).
fn assign_labels(points: &[Vec<f64>], centroids: &[Vec<f64>], labels: &mut [usize]) {
    for (label, point) in labels.iter_mut().zip(points) {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (j, centroid) in centroids.iter().enumerate() {
            let dist = euclidean_sq(point, centroid);
            if dist < best_dist {
                best_dist = dist;
                best = j;
            }
        }
        *label = best;
    }
}

/// Recompute centroids as the mean of their members. A cluster that lost all
/// its members keeps its previous centroid.
fn update_centroids(
    points: &[Vec<f64>],
    labels: &[usize],
    previous: &[Vec<f64>],
) -> Vec<Vec<f64>> {
    let k = previous.len();
    let dim = previous.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0f64; dim]; k];
    let mut counts = vec![0usize; k];

    for (point, &label) in points.iter().zip(labels) {
        counts[label] += 1;
        for (sum, value) in sums[label].iter_mut().zip(point) {
            *sum += value;
        }
    }

    sums.into_iter()
        .zip(counts)
        .zip(previous)
        .map(|((mut sum, count), old)| {
            if count > 0 {
                for value in &mut sum {
                    *value /= count as f64;
                }
                sum
            } else {
                old.clone()
            }
        })
        .collect()
}
