//! Descriptor evolution across an ordered sequence of snapshots
//!
//! Evolution iterators are lazy (each element is computed on `next()`),
//! finite (exactly one element per snapshot, in snapshot order) and
//! restartable (clone the iterator, or build it again from the same slice).
//! Elements are independent: no state is carried from one snapshot to the
//! next, so a failure on one snapshot does not poison the rest.

use crate::dataset::Dataset;
use crate::descriptor::{Descriptor, DescriptorSet};
use crate::error::{Error, Result};

/// Lazily compute one column's [`Descriptor`] per snapshot, in order.
pub fn descriptor_evolution<'a>(
    snapshots: &'a [Dataset],
    column_name: &str,
) -> DescriptorEvolution<'a> {
    DescriptorEvolution {
        snapshots,
        column_name: column_name.to_string(),
        next: 0,
    }
}

/// Lazily compute a full [`DescriptorSet`] per snapshot, in order.
pub fn descriptor_set_evolution(snapshots: &[Dataset]) -> DescriptorSetEvolution<'_> {
    DescriptorSetEvolution { snapshots, next: 0 }
}

/// Iterator produced by [`descriptor_evolution`].
///
/// A snapshot that does not carry the column at all yields `ColumnMismatch`
/// naming it, keeping absence distinct from an empty column.
#[derive(Debug, Clone)]
pub struct DescriptorEvolution<'a> {
    snapshots: &'a [Dataset],
    column_name: String,
    next: usize,
}

impl Iterator for DescriptorEvolution<'_> {
    type Item = Result<Descriptor>;

    fn next(&mut self) -> Option<Self::Item> {
        let snapshot = self.snapshots.get(self.next)?;
        self.next += 1;
        let Some(values) = snapshot.column(&self.column_name) else {
            return Some(Err(Error::ColumnMismatch(self.column_name.clone())));
        };
        Some(Descriptor::compute(&self.column_name, values))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshots.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DescriptorEvolution<'_> {}

/// Iterator produced by [`descriptor_set_evolution`].
#[derive(Debug, Clone)]
pub struct DescriptorSetEvolution<'a> {
    snapshots: &'a [Dataset],
    next: usize,
}

impl Iterator for DescriptorSetEvolution<'_> {
    type Item = Result<DescriptorSet>;

    fn next(&mut self) -> Option<Self::Item> {
        let snapshot = self.snapshots.get(self.next)?;
        self.next += 1;
        Some(DescriptorSet::compute_all(snapshot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshots.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DescriptorSetEvolution<'_> {}
