//! Distribution descriptors for numeric columns
//!
//! A [`Descriptor`] summarizes one column's distribution (mean, sample
//! standard deviation, extremes, quartiles); a [`DescriptorSet`] carries one
//! descriptor per column of a snapshot, in source column order. Descriptors
//! are pure deterministic functions of their input column, so two computes
//! over the same values always compare exactly equal.

use rayon::prelude::*;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Statistical summary of one numeric column.
///
/// Invariants for any non-empty numeric column:
/// `min_val <= q1 <= q2 <= q3 <= max_val`, `std >= 0`, all values finite.
/// Equality is exact field-wise comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    pub column_name: String,
    pub mean: f64,
    /// Sample standard deviation (N-1 divisor); 0.0 for a single value.
    pub std: f64,
    pub min_val: f64,
    pub max_val: f64,
    /// 25th percentile, linear interpolation over the sorted values.
    pub q1: f64,
    /// 50th percentile (median).
    pub q2: f64,
    /// 75th percentile.
    pub q3: f64,
}

impl Descriptor {
    /// Compute the descriptor of a column.
    ///
    /// Fails with [`Error::EmptyColumn`] on zero values and
    /// [`Error::NonNumericColumn`] on any NaN or infinite value, reporting
    /// the row of the first offender.
    pub fn compute(column_name: &str, values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyColumn(column_name.to_string()));
        }
        if let Some(row) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonNumericColumn {
                column: column_name.to_string(),
                row,
            });
        }

        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;

        let std = if n > 1 {
            let ss = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
            (ss / (n - 1) as f64).sqrt()
        } else {
            0.0
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Ok(Self {
            column_name: column_name.to_string(),
            mean,
            std,
            min_val: sorted[0],
            max_val: sorted[n - 1],
            q1: percentile(&sorted, 0.25),
            q2: percentile(&sorted, 0.50),
            q3: percentile(&sorted, 0.75),
        })
    }

    /// Signed deltas `other - self`, field by field.
    #[must_use]
    pub fn delta(&self, other: &Descriptor) -> DescriptorDelta {
        DescriptorDelta {
            mean_delta: other.mean - self.mean,
            std_delta: other.std - self.std,
            min_delta: other.min_val - self.min_val,
            max_delta: other.max_val - self.max_val,
            q1_delta: other.q1 - self.q1,
            q2_delta: other.q2 - self.q2,
            q3_delta: other.q3 - self.q3,
        }
    }
}

/// Linear-interpolation percentile over values already sorted ascending.
///
/// `p` is a fraction in [0, 1]. For rank `h = (n - 1) * p` the result
/// interpolates between the values at `floor(h)` and `ceil(h)`.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Signed per-field differences between two descriptors of the same column.
///
/// The core reports deltas as-is; whether a delta amounts to drift is the
/// consumer's judgment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptorDelta {
    pub mean_delta: f64,
    pub std_delta: f64,
    pub min_delta: f64,
    pub max_delta: f64,
    pub q1_delta: f64,
    pub q2_delta: f64,
    pub q3_delta: f64,
}

impl DescriptorDelta {
    /// True when every field delta is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mean_delta == 0.0
            && self.std_delta == 0.0
            && self.min_delta == 0.0
            && self.max_delta == 0.0
            && self.q1_delta == 0.0
            && self.q2_delta == 0.0
            && self.q3_delta == 0.0
    }
}

/// Descriptors for every column of one snapshot, in source column order.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorSet {
    descriptors: Vec<Descriptor>,
}

impl DescriptorSet {
    /// Compute descriptors for all columns of a snapshot.
    ///
    /// Columns are independent, so they are computed on the rayon pool; a
    /// failure on any single column aborts the whole set, returning no
    /// partial results.
    pub fn compute_all(dataset: &Dataset) -> Result<Self> {
        tracing::debug!(
            columns = dataset.num_columns(),
            rows = dataset.num_rows(),
            "computing descriptor set"
        );
        let pairs: Vec<(&str, &[f64])> = dataset.iter().collect();
        let descriptors = pairs
            .par_iter()
            .map(|(name, values)| Descriptor::compute(name, values))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { descriptors })
    }

    /// Assemble a set from descriptors already computed, keeping their order.
    pub fn from_descriptors(descriptors: Vec<Descriptor>) -> Result<Self> {
        if descriptors.is_empty() {
            return Err(Error::EmptyDataset);
        }
        for (i, d) in descriptors.iter().enumerate() {
            if descriptors[..i].iter().any(|o| o.column_name == d.column_name) {
                return Err(Error::DuplicateColumn(d.column_name.clone()));
            }
        }
        Ok(Self { descriptors })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptor of the named column, if present.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.column_name == column_name)
    }

    /// Iterate descriptors in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter()
    }

    /// Compare two snapshots column by column.
    ///
    /// Returns `other - self` deltas in this set's column order. Fails with
    /// [`Error::ColumnMismatch`] naming the first column that is not present
    /// on both sides; the two sets must carry identical column-name sets
    /// (order may differ).
    pub fn compare(&self, other: &DescriptorSet) -> Result<SetComparison> {
        if let Some(d) = other.descriptors.iter().find(|d| self.get(&d.column_name).is_none()) {
            return Err(Error::ColumnMismatch(d.column_name.clone()));
        }

        let mut deltas = Vec::with_capacity(self.descriptors.len());
        for d in &self.descriptors {
            match other.get(&d.column_name) {
                Some(o) => deltas.push((d.column_name.clone(), d.delta(o))),
                None => return Err(Error::ColumnMismatch(d.column_name.clone())),
            }
        }
        Ok(SetComparison { deltas })
    }
}

/// Result of comparing two descriptor sets, in the left set's column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetComparison {
    deltas: Vec<(String, DescriptorDelta)>,
}

impl SetComparison {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Delta of the named column, if present.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&DescriptorDelta> {
        self.deltas
            .iter()
            .find(|(name, _)| name == column_name)
            .map(|(_, d)| d)
    }

    /// Iterate `(column name, delta)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DescriptorDelta)> {
        self.deltas.iter().map(|(name, d)| (name.as_str(), d))
    }
}
