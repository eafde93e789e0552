//! Error types for tour construction, evaluation, and input loading.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TspError>;

/// Errors raised at the input boundary of the solvers.
///
/// The search algorithms themselves never fail: once the point set, tours,
/// and configs have been validated, a bad run simply yields a worse tour.
#[derive(Error, Debug)]
pub enum TspError {
    /// Reading an input file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A point record could not be parsed.
    #[error("invalid point record on line {line}: {reason}")]
    InvalidPointRecord {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the record.
        reason: String,
    },

    /// A tour is not a permutation of all city indices.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// The point set contains no points.
    #[error("point set is empty")]
    EmptyInstance,

    /// A solver parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A JSON config document could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
