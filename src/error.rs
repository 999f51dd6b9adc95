use thiserror::Error;

/// Convenience result type for pipeline and adapter operations.
pub type EtlResult<T> = Result<T, EtlError>;

/// Error type used across the pipeline runner and the CSV/NDJSON adapters.
///
/// The runner itself never constructs or handles errors: whatever error an
/// extractor, transformer, or loader produces is propagated out of
/// [`crate::pipeline::Pipeline::run`] untouched.
#[derive(Debug, Error)]
pub enum EtlError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An input record could not be converted into a [`crate::types::Row`]
    /// (non-object NDJSON line, non-scalar field value, etc.).
    #[error("invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// A user-supplied transformer signaled failure for a row.
    #[error("transform failed: {0}")]
    Transform(String),
}
