//! Error types for exploratory data analysis
//!
//! Provides a unified error type for all eda crates.

use thiserror::Error;

/// Core error type for descriptive and inferential operations
#[derive(Error, Debug)]
pub enum Error {
    /// A column's element type disagrees with the requested analysis branch
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// A contingency table has a zero row or column total
    #[error("Degenerate table: {0}")]
    DegenerateTable(String),

    /// Operation invoked in a state where it is not valid
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Statistic is undefined for the given data
    #[error("Undefined statistic: {0}")]
    UndefinedStatistic(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Column lookup failed
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a significance level outside (0, 1)
    pub fn invalid_significance(alpha: f64) -> Self {
        Self::InvalidParameter(format!("Significance {alpha} must be in (0, 1)"))
    }

    /// Create an error for an operation that needs a completed test
    pub fn not_tested(operation: &str) -> Self {
        Self::InvalidState(format!("{operation} requires a completed test"))
    }

    /// Create an error for a moment computed on an empty sample
    pub fn empty_moment(statistic: &str) -> Self {
        Self::UndefinedStatistic(format!("{statistic} of an empty sample"))
    }
}
