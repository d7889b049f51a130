//! Pipeline Error Kinds
//!
//! Every stage of the analysis pipeline returns `Result<_, PipelineError>`.
//! All variants describe malformed input rather than transient conditions:
//! retrying with the same bytes cannot succeed, so no retry machinery exists.
//! A failed run aborts before producing any partial output and never affects
//! subsequent runs.

use thiserror::Error;

/// Errors produced by the load -> embed -> persistence pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The required signal column is absent from the table header.
    #[error("required column `{0}` not found in input table")]
    MissingColumn(String),

    /// The table parsed successfully but contains no data rows.
    #[error("input table contains no rows")]
    EmptyInput,

    /// The signal is too short for the requested embedding parameters.
    #[error("signal has {actual} samples but the embedding needs at least {required}")]
    InsufficientSamples { required: usize, actual: usize },

    /// Fewer than two points: no distance matrix, no homology.
    #[error("point cloud of {0} point(s) is degenerate; at least 2 required")]
    DegenerateInput(usize),

    /// A cell in the signal column failed to parse as a real number.
    #[error("column `{column}` row {row}: `{value}` is not numeric")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
