//! Immutable tabular snapshots
//!
//! A [`Dataset`] is one snapshot of a tabular source: ordered named columns
//! of `f64` values, all the same length. It replaces the rich data-table
//! objects drift pipelines usually lean on with a small explicit value type,
//! so the statistics modules carry no hidden dependency on one.

use ahash::AHashMap;

use crate::error::{Error, Result};

/// An immutable multi-column numeric dataset captured at a point in time.
///
/// Column order is the source order and is preserved everywhere downstream:
/// descriptor sets iterate in it and clustering feature vectors are laid out
/// in it. Construction validates shape once; after that the dataset is never
/// mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    index: AHashMap<String, usize>,
    rows: usize,
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names && self.columns == other.columns
    }
}

impl Dataset {
    /// Create a dataset from `(name, values)` column pairs.
    ///
    /// Fails with [`Error::EmptyDataset`] when there are zero columns or
    /// zero rows, [`Error::RaggedDataset`] when column lengths differ, and
    /// [`Error::DuplicateColumn`] on a repeated name. Non-finite values are
    /// accepted here and rejected later by the statistical operations.
    pub fn new(columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let rows = columns[0].1.len();
        if rows == 0 {
            return Err(Error::EmptyDataset);
        }

        let mut names = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());
        let mut index = AHashMap::with_capacity(columns.len());

        for (name, column) in columns {
            if column.len() != rows {
                return Err(Error::RaggedDataset {
                    column: name,
                    expected: rows,
                    actual: column.len(),
                });
            }
            if index.insert(name.clone(), names.len()).is_some() {
                return Err(Error::DuplicateColumn(name));
            }
            names.push(name);
            values.push(column);
        }

        Ok(Self {
            names,
            columns: values,
            index,
            rows,
        })
    }

    /// Build a dataset from row-major feature vectors and column names.
    ///
    /// Convenience for callers that already hold their points as rows.
    pub fn from_rows(names: Vec<String>, rows: &[Vec<f64>]) -> Result<Self> {
        if names.is_empty() || rows.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(rows.len()); names.len()];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != names.len() {
                return Err(Error::RaggedDataset {
                    column: format!("row {i}"),
                    expected: names.len(),
                    actual: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(*value);
            }
        }
        Self::new(names.into_iter().zip(columns).collect())
    }

    #[inline]
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column names in source order.
    #[inline]
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Values of the named column, if present.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.index.get(name).map(|&i| self.columns[i].as_slice())
    }

    /// Iterate `(name, values)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// The feature vector of row `i`, laid out in column order.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_rows()`.
    #[must_use]
    pub fn row(&self, i: usize) -> Vec<f64> {
        assert!(i < self.rows, "row index out of bounds");
        self.columns.iter().map(|c| c[i]).collect()
    }

    /// Materialize all rows as feature vectors, in row order.
    ///
    /// Clustering works point-wise, so it consumes this layout.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|i| self.row(i)).collect()
    }
}
