//! # driftX Core
//!
//! Core library for the driftX drift detection engine.
//!
//! This crate provides the fundamental data structures and statistics:
//!
//! - [`Dataset`] - An immutable named-column numeric snapshot
//! - [`Descriptor`] - Distribution summary of one column
//! - [`DescriptorSet`] - Descriptors for every column of a snapshot
//! - [`descriptor_evolution`] - Per-snapshot descriptor sequences
//!
//! ## Example
//!
//! ```rust
//! use driftx_core::{Dataset, DescriptorSet};
//!
//! let snapshot = Dataset::new(vec![
//!     ("alcohol".to_string(), vec![9.4, 9.8, 10.5, 11.2]),
//!     ("ph".to_string(), vec![3.51, 3.20, 3.26, 3.16]),
//! ]).unwrap();
//!
//! let set = DescriptorSet::compute_all(&snapshot).unwrap();
//! let alcohol = set.get("alcohol").unwrap();
//! assert!(alcohol.min_val <= alcohol.q2 && alcohol.q2 <= alcohol.max_val);
//! ```

pub mod dataset;
pub mod descriptor;
pub mod error;
pub mod evolution;

pub use dataset::Dataset;
pub use descriptor::{Descriptor, DescriptorDelta, DescriptorSet, SetComparison};
pub use error::{Error, Result};
pub use evolution::{
    descriptor_evolution, descriptor_set_evolution, DescriptorEvolution, DescriptorSetEvolution,
};
