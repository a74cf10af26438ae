//! Clustering evolution across an ordered sequence of snapshots
//!
//! Same contract as the descriptor evolutions in `driftx-core`: lazy,
//! finite, restartable, one independently fitted model per snapshot.

use driftx_core::{Dataset, Result};

use crate::kmeans::{ClusterModel, FitConfig};

/// Lazily fit one fixed-`k` [`ClusterModel`] per snapshot, in order.
pub fn cluster_evolution(snapshots: &[Dataset], k: usize, config: FitConfig) -> ClusterEvolution<'_> {
    ClusterEvolution {
        snapshots,
        k,
        config,
        next: 0,
    }
}

/// Iterator produced by [`cluster_evolution`].
#[derive(Debug, Clone)]
pub struct ClusterEvolution<'a> {
    snapshots: &'a [Dataset],
    k: usize,
    config: FitConfig,
    next: usize,
}

impl Iterator for ClusterEvolution<'_> {
    type Item = Result<ClusterModel>;

    fn next(&mut self) -> Option<Self::Item> {
        let snapshot = self.snapshots.get(self.next)?;
        self.next += 1;
        tracing::debug!(snapshot = self.next - 1, k = self.k, "fitting evolution step");
        Some(ClusterModel::fit(snapshot, self.k, &self.config))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshots.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ClusterEvolution<'_> {}
