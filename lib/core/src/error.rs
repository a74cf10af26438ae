use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Column '{0}' has no values")]
    EmptyColumn(String),

    #[error("Column '{column}' has a non-numeric value at row {row}")]
    NonNumericColumn { column: String, row: usize },

    #[error("Dataset has no columns or no rows")]
    EmptyDataset,

    #[error("Column '{column}' has {actual} values, expected {expected}")]
    RaggedDataset {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate column name: '{0}'")]
    DuplicateColumn(String),

    #[error("Missing column: '{0}'")]
    ColumnMismatch(String),

    #[error("Invalid cluster count {k}: expected 1 <= k <= {rows}")]
    InvalidClusterCount { k: usize, rows: usize },

    #[error("Cluster count mismatch: {left} vs {right}")]
    ClusterCountMismatch { left: usize, right: usize },

    #[error("Serialization mismatch: key '{key}' missing or not {expected}")]
    SerializationMismatch {
        key: String,
        expected: &'static str,
    },
}

impl Error {
    /// Shorthand for a strict-decoding failure on `key`.
    pub fn mismatch(key: impl Into<String>, expected: &'static str) -> Self {
        Error::SerializationMismatch {
            key: key.into(),
            expected,
        }
    }
}
