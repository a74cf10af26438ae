//! Descriptor and descriptor-set mappings.

use serde_json::{json, Value};

use driftx_core::{Descriptor, DescriptorSet, Error, Result, SetComparison};

use crate::value::require_f64;
use crate::Mapping;

/// Encode a descriptor as its seven-key wire mapping.
///
/// The column name is not part of the mapping; it travels as the enclosing
/// key in a descriptor-set mapping.
#[must_use]
pub fn descriptor_to_mapping(descriptor: &Descriptor) -> Mapping {
    let mut mapping = Mapping::new();
    mapping.insert("mean".to_string(), json!(descriptor.mean));
    mapping.insert("std".to_string(), json!(descriptor.std));
    mapping.insert("min_val".to_string(), json!(descriptor.min_val));
    mapping.insert("max_val".to_string(), json!(descriptor.max_val));
    mapping.insert("q1".to_string(), json!(descriptor.q1));
    mapping.insert("q2".to_string(), json!(descriptor.q2));
    mapping.insert("q3".to_string(), json!(descriptor.q3));
    mapping
}

/// Decode a descriptor of `column_name` from its wire mapping.
pub fn descriptor_from_mapping(column_name: &str, mapping: &Mapping) -> Result<Descriptor> {
    Ok(Descriptor {
        column_name: column_name.to_string(),
        mean: require_f64(mapping, "mean")?,
        std: require_f64(mapping, "std")?,
        min_val: require_f64(mapping, "min_val")?,
        max_val: require_f64(mapping, "max_val")?,
        q1: require_f64(mapping, "q1")?,
        q2: require_f64(mapping, "q2")?,
        q3: require_f64(mapping, "q3")?,
    })
}

/// Encode a descriptor set as a column-name-keyed mapping, in column order.
#[must_use]
pub fn descriptor_set_to_mapping(set: &DescriptorSet) -> Mapping {
    set.iter()
        .map(|d| {
            (
                d.column_name.clone(),
                Value::Object(descriptor_to_mapping(d)),
            )
        })
        .collect()
}

/// Decode a descriptor set, keeping the mapping's column order.
pub fn descriptor_set_from_mapping(mapping: &Mapping) -> Result<DescriptorSet> {
    let mut descriptors = Vec::with_capacity(mapping.len());
    for (name, value) in mapping {
        let inner = value
            .as_object()
            .ok_or_else(|| Error::mismatch(name.clone(), "a descriptor mapping"))?;
        descriptors.push(descriptor_from_mapping(name, inner)?);
    }
    DescriptorSet::from_descriptors(descriptors)
}

/// Encode a set comparison as a column-name-keyed mapping of delta
/// mappings, in the comparison's column order.
#[must_use]
pub fn set_comparison_to_mapping(comparison: &SetComparison) -> Mapping {
    comparison
        .iter()
        .map(|(name, delta)| {
            let mut inner = Mapping::new();
            inner.insert("mean_delta".to_string(), json!(delta.mean_delta));
            inner.insert("std_delta".to_string(), json!(delta.std_delta));
            inner.insert("min_delta".to_string(), json!(delta.min_delta));
            inner.insert("max_delta".to_string(), json!(delta.max_delta));
            inner.insert("q1_delta".to_string(), json!(delta.q1_delta));
            inner.insert("q2_delta".to_string(), json!(delta.q2_delta));
            inner.insert("q3_delta".to_string(), json!(delta.q3_delta));
            (name.to_string(), Value::Object(inner))
        })
        .collect()
}
