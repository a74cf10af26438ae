//! Strict accessors over JSON mapping values.
//!
//! Every accessor fails with `SerializationMismatch` naming the offending
//! key, so a caller can diagnose a malformed mapping without inspecting it.

use serde_json::Value;

use driftx_core::{Error, Result};

use crate::Mapping;

pub(crate) fn require_f64(mapping: &Mapping, key: &str) -> Result<f64> {
    mapping
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| Error::mismatch(key, "a number"))
}

pub(crate) fn require_usize(mapping: &Mapping, key: &str) -> Result<usize> {
    mapping
        .get(key)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .ok_or_else(|| Error::mismatch(key, "an integer"))
}

/// A numeric value or null; null maps to `None`.
pub(crate) fn optional_f64(mapping: &Mapping, key: &str) -> Result<Option<f64>> {
    match mapping.get(key) {
        Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| Error::mismatch(key, "a number or null")),
        None => Err(Error::mismatch(key, "a number or null")),
    }
}

pub(crate) fn require_f64_seq(mapping: &Mapping, key: &str) -> Result<Vec<f64>> {
    let array = mapping
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::mismatch(key, "a sequence of numbers"))?;
    array
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| Error::mismatch(key, "a sequence of numbers"))
        })
        .collect()
}

pub(crate) fn require_f64_seq_seq(mapping: &Mapping, key: &str) -> Result<Vec<Vec<f64>>> {
    let array = mapping
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::mismatch(key, "a sequence of numeric sequences"))?;
    array
        .iter()
        .map(|row| {
            let row = row
                .as_array()
                .ok_or_else(|| Error::mismatch(key, "a sequence of numeric sequences"))?;
            row.iter()
                .map(|v| {
                    v.as_f64()
                        .ok_or_else(|| Error::mismatch(key, "a sequence of numeric sequences"))
                })
                .collect()
        })
        .collect()
}
