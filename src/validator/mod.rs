//! DBSCAN compliance verification.
//!
//! The pipeline runs in two clearly separated passes over index-aligned
//! arrays: a symmetric pairwise pass producing per-point neighbor counts
//! ([`distance`]), then a classification and reachability pass producing a
//! per-cluster verdict ([`compliance`]). [`batch`] folds per-cluster
//! verdicts into a run-level report.

pub mod batch;
pub mod compliance;
pub mod distance;

use thiserror::Error;

pub use batch::{validate_run, ClusterStatus, RunReport};
pub use compliance::{check_compliance, validate_activity, Verdict};
pub use distance::neighbor_counts;

/// Errors that can occur while validating a single cluster.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A run parameter is outside its accepted range.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// The pairwise distance pass exceeded its configured budget.
    #[error("distance computation exceeded {budget_ms} ms for {n_points} points")]
    ComputationTimeout {
        /// Configured budget in milliseconds.
        budget_ms: u64,
        /// Number of points in the offending cluster.
        n_points: usize,
    },
}

/// Result type for validator operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
