use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur when binning samples or building rose geometry
#[derive(Debug, Error)]
pub enum RoseError {
    /// Structurally invalid configuration (bad sector count, breakpoints,
    /// spacing or palette). Never retried; the caller must fix the input.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Normalization requested over zero retained samples
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// The tabular input collaborator failed structurally
    /// (missing column, unusable dtype)
    #[error("dataframe error: {0}")]
    Frame(#[from] PolarsError),
}

/// Type alias for Results using RoseError
pub type Result<T> = std::result::Result<T, RoseError>;
