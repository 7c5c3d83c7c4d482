//! Error types for aggregation and scene building.

use thiserror::Error;

/// Structural errors detected before any scene geometry is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A structurally required column is absent from the dataset.
    #[error("CSV is missing the \"{0}\" column")]
    MissingColumn(String),

    /// Zero rows were supplied.
    #[error("no data available")]
    EmptyDataset,
}

/// Result type alias for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;
