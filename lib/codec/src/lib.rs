//! # driftX Codec
//!
//! Structured-mapping serialization for driftX summaries.
//!
//! Summaries cross process boundaries as nested key-value mappings (JSON
//! objects in practice; this crate is agnostic to what the caller does with
//! the mapping). The key names are a compatibility contract with existing
//! report consumers and are preserved exactly:
//!
//! - Descriptor: `mean, std, min_val, max_val, q1, q2, q3`
//! - DescriptorSet: column name -> descriptor mapping
//! - ClusterModel: `num_clusters, silhouette_score, centroids, radius,
//!   labels_percentages`
//!
//! Decoding is strict: a missing key or a value of the wrong basic type
//! fails with `SerializationMismatch` naming the key, never a guessed
//! default. Round trips are exact for descriptors and within the model
//! tolerance for cluster models:
//!
//! ```rust
//! use driftx_core::{Dataset, DescriptorSet};
//! use driftx_codec::{descriptor_set_to_mapping, descriptor_set_from_mapping};
//!
//! let snapshot = Dataset::new(vec![
//!     ("x".to_string(), vec![1.0, 2.5, 3.75]),
//! ]).unwrap();
//! let set = DescriptorSet::compute_all(&snapshot).unwrap();
//!
//! let mapping = descriptor_set_to_mapping(&set);
//! let reloaded = descriptor_set_from_mapping(&mapping).unwrap();
//! assert_eq!(set, reloaded);
//! ```

mod cluster;
mod descriptor;
mod value;

pub use cluster::{
    cluster_comparison_to_mapping, cluster_model_from_mapping, cluster_model_to_mapping,
};
pub use descriptor::{
    descriptor_from_mapping, descriptor_set_from_mapping, descriptor_set_to_mapping,
    descriptor_to_mapping, set_comparison_to_mapping,
};

/// The mapping type all codec functions speak.
pub type Mapping = serde_json::Map<String, serde_json::Value>;
