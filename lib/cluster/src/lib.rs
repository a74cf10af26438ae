//! # driftX Cluster
//!
//! Clustering summaries for the driftX drift detection engine.
//!
//! This crate fits deterministic k-means summaries of tabular snapshots and
//! compares them across time:
//!
//! - [`ClusterModel`] - centroids, radii, population shares and silhouette
//!   of one snapshot at a fixed cluster count
//! - [`ClusterModel::best_fit`] - silhouette-guided cluster-count search
//! - [`compare_models`] - greedy cluster correspondence with shift metrics
//! - [`cluster_evolution`] - per-snapshot model sequences
//!
//! ## Example
//!
//! ```rust
//! use driftx_core::Dataset;
//! use driftx_cluster::{ClusterModel, FitConfig, SearchRange, compare_models};
//!
//! let snapshot = Dataset::new(vec![
//!     ("x".to_string(), vec![0.0, 0.1, -0.1, 9.9, 10.0, 10.1]),
//!     ("y".to_string(), vec![0.0, -0.1, 0.1, 10.1, 10.0, 9.9]),
//! ]).unwrap();
//!
//! let config = FitConfig::default();
//! let model = ClusterModel::best_fit(&snapshot, &SearchRange::for_dataset(&snapshot), &config).unwrap();
//! assert_eq!(model.num_clusters, 2);
//!
//! let refit = ClusterModel::fit(&snapshot, 2, &config).unwrap();
//! let comparison = compare_models(&model, &refit).unwrap();
//! assert!(comparison.is_zero());
//! ```

pub mod compare;
mod distance;
pub mod evolution;
pub mod kmeans;
pub mod silhouette;

pub use compare::{compare_models, ClusterComparison, ClusterShift};
pub use evolution::{cluster_evolution, ClusterEvolution};
pub use kmeans::{
    suggest_cluster_count, ClusterModel, FitConfig, SearchRange, MODEL_EPSILON,
};
pub use silhouette::silhouette_score;
