//! Error taxonomy of the estimation pipeline.

use thiserror::Error;

/// Errors produced by the estimation pipeline.
///
/// Every variant carries enough context (record index or pipeline stage)
/// to diagnose the failure. No stage returns partial results on error.
#[derive(Debug, Error)]
pub enum EstimationError {
    /// A malformed input record or an operation code outside the declared domain.
    #[error("schema error at record {record}: {message}")]
    Schema {
        /// Index of the offending record in the input trace.
        record: usize,
        /// Human-readable description of the violation.
        message: String,
    },
    /// An empty or undersized training set, or a degenerate evaluation set.
    #[error("data error in {stage}: {message}")]
    Data {
        /// Pipeline stage that rejected the data.
        stage: &'static str,
        /// Human-readable description of the violation.
        message: String,
    },
    /// A numerical failure, e.g. a singular linear system.
    #[error("numerical error in {stage}: {message}")]
    Numerical {
        /// Pipeline stage where the failure occurred.
        stage: &'static str,
        /// Human-readable description of the failure.
        message: String,
    },
}

/// The result type used throughout the library.
pub type Result<T> = std::result::Result<T, EstimationError>;
