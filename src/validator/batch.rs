//! Run-level validation over many activities.
//!
//! Every activity is validated independently against the same run
//! parameters, so the per-cluster loop is parallelized with rayon; the only
//! coordination is collecting the ordered results. Nothing is shared or
//! mutated across clusters.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::ValidationConfig;
use crate::core::records::Activity;
use crate::validator::compliance::{validate_activity, Verdict};
use crate::validator::ValidationError;

/// Per-cluster outcome within a run.
///
/// Empty clusters are kept apart from true passes so run statistics are
/// not skewed by activities that carried no primitives at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterStatus {
    /// Satisfies the DBSCAN definition.
    Compliant(Verdict),
    /// No primitives; vacuously compliant.
    Empty,
    /// Violates the DBSCAN definition; the verdict carries diagnostics.
    NonCompliant(Verdict),
    /// Validation could not run for this cluster.
    Failed(ValidationError),
}

/// Aggregate result of validating one run's activities.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Per-cluster outcome, index-aligned with the input activities.
    pub statuses: Vec<ClusterStatus>,
    /// Indices of clusters that violate the DBSCAN definition.
    pub non_compliant_indices: Vec<usize>,
    /// Indices of clusters with no primitives.
    pub empty_indices: Vec<usize>,
    /// Indices of clusters whose validation failed outright.
    pub failed_indices: Vec<usize>,
}

impl RunReport {
    /// Number of clusters examined.
    #[inline]
    pub fn total(&self) -> usize {
        self.statuses.len()
    }

    /// Number of non-compliant clusters.
    #[inline]
    pub fn non_compliant_count(&self) -> usize {
        self.non_compliant_indices.len()
    }

    /// True if every examined cluster passed (empty clusters included).
    pub fn all_compliant(&self) -> bool {
        self.non_compliant_indices.is_empty() && self.failed_indices.is_empty()
    }
}

/// Validate a run's activities against shared DBSCAN parameters.
///
/// Each activity is projected and checked independently; a parameter error
/// or timeout fails that cluster alone and the batch continues. When
/// `config.max_activities` is set, only the leading activities are
/// examined.
pub fn validate_run(activities: &[Activity], config: &ValidationConfig) -> RunReport {
    let examined = match config.max_activities {
        Some(limit) if limit < activities.len() => {
            info!(
                "Examining {} of {} activities (max_activities limit)",
                limit,
                activities.len()
            );
            &activities[..limit]
        }
        _ => activities,
    };

    let outcomes: Vec<ClusterStatus> = examined
        .par_iter()
        .map(|activity| {
            if activity.is_empty() {
                return ClusterStatus::Empty;
            }
            match validate_activity(activity, config) {
                Ok(verdict) if verdict.compliant => ClusterStatus::Compliant(verdict),
                Ok(verdict) => ClusterStatus::NonCompliant(verdict),
                Err(e) => ClusterStatus::Failed(e),
            }
        })
        .collect();

    let mut report = RunReport {
        statuses: Vec::new(),
        non_compliant_indices: Vec::new(),
        empty_indices: Vec::new(),
        failed_indices: Vec::new(),
    };

    for (idx, status) in outcomes.iter().enumerate() {
        match status {
            ClusterStatus::Compliant(_) => {}
            ClusterStatus::Empty => {
                debug!("Activity {} is empty", idx);
                report.empty_indices.push(idx);
            }
            ClusterStatus::NonCompliant(verdict) => {
                debug!(
                    "Activity {} not DBSCAN compliant: first violation at point {:?}, neighbor counts {:?}",
                    idx, verdict.first_violation_index, verdict.neighbor_counts
                );
                report.non_compliant_indices.push(idx);
            }
            ClusterStatus::Failed(e) => {
                warn!("Activity {} validation failed: {}", idx, e);
                report.failed_indices.push(idx);
            }
        }
    }
    report.statuses = outcomes;

    info!(
        "Validated {} activities: {} non-compliant, {} empty, {} failed",
        report.total(),
        report.non_compliant_count(),
        report.empty_indices.len(),
        report.failed_indices.len()
    );

    report
}
