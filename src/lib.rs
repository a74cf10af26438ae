//! # driftX
//!
//! A statistical drift detection engine for tabular data.
//!
//! driftX summarizes snapshots of a tabular dataset and compares the
//! summaries over time: per-column distribution descriptors, deterministic
//! k-means clustering summaries, snapshot-to-snapshot deltas, and ordered
//! evolution sequences. It produces structured comparison data and leaves
//! the drift verdict to the consumer; it performs no file I/O and no
//! plotting.
//!
//! ## Quick Start
//!
//! ```rust
//! use driftx::prelude::*;
//!
//! // Two snapshots of the same source, the second drifted.
//! let before = Dataset::new(vec![
//!     ("temperature".to_string(), vec![20.1, 20.4, 19.8, 20.0, 20.2]),
//! ]).unwrap();
//! let after = Dataset::new(vec![
//!     ("temperature".to_string(), vec![22.0, 22.5, 21.9, 22.2, 22.4]),
//! ]).unwrap();
//!
//! let left = DescriptorSet::compute_all(&before).unwrap();
//! let right = DescriptorSet::compute_all(&after).unwrap();
//!
//! let comparison = left.compare(&right).unwrap();
//! let delta = comparison.get("temperature").unwrap();
//! assert!(delta.mean_delta > 1.5);
//! ```
//!
//! ## Crate Structure
//!
//! driftX is composed of several crates:
//!
//! - [`driftx-core`](https://docs.rs/driftx-core) - Datasets, distribution
//!   descriptors, descriptor evolution
//! - [`driftx-cluster`](https://docs.rs/driftx-cluster) - Deterministic
//!   k-means summaries, silhouette search, cluster correspondence
//! - [`driftx-codec`](https://docs.rs/driftx-codec) - Wire mappings with
//!   exact round trips and strict decoding
//!
//! ## Determinism
//!
//! Every operation is a pure function of its inputs plus an explicit
//! clustering seed. Two descriptor computations over the same column compare
//! exactly equal; two k-means fits over the same snapshot and config are
//! identical, which is what makes serialized summaries comparable across
//! runs.

// Re-export core types
pub use driftx_core::{
    descriptor_evolution, descriptor_set_evolution, Dataset, Descriptor, DescriptorDelta,
    DescriptorEvolution, DescriptorSet, DescriptorSetEvolution, Error, Result, SetComparison,
};

// Re-export clustering
pub use driftx_cluster::{
    cluster_evolution, compare_models, silhouette_score, suggest_cluster_count, ClusterComparison,
    ClusterEvolution, ClusterModel, ClusterShift, FitConfig, SearchRange, MODEL_EPSILON,
};

// Re-export codec
pub use driftx_codec::{
    cluster_comparison_to_mapping, cluster_model_from_mapping, cluster_model_to_mapping,
    descriptor_from_mapping, descriptor_set_from_mapping, descriptor_set_to_mapping,
    descriptor_to_mapping, set_comparison_to_mapping, Mapping,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        cluster_evolution, compare_models, descriptor_evolution, descriptor_set_evolution,
        ClusterComparison, ClusterModel, ClusterShift, Dataset, Descriptor, DescriptorDelta,
        DescriptorSet, Error, FitConfig, Mapping, Result, SearchRange, SetComparison,
    };
}
