//! Per-cluster DBSCAN compliance checking.
//!
//! A cluster satisfies the DBSCAN definition iff every point is either a
//! core point (at least `min_pts` neighbors within `eps`, self included)
//! or lies within `eps` of at least one core point. This module classifies
//! points from their neighbor counts and then verifies reachability of
//! every non-core point.

use std::time::Duration;

use crate::config::ValidationConfig;
use crate::core::projection::{project, Hit};
use crate::core::records::Activity;
use crate::validator::distance::{neighbor_counts, squared_distance};
use crate::validator::{Result, ValidationError};

/// Outcome of validating one cluster.
///
/// Non-compliance is a reported result, not an error: the verdict always
/// carries the full neighbor-count array so a failing cluster can be told
/// apart by its failure mode (isolated point vs. borderline threshold).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the cluster satisfies the DBSCAN definition.
    pub compliant: bool,
    /// Per-point neighbor counts (self included), index-aligned with the
    /// cluster's primitives.
    pub neighbor_counts: Vec<usize>,
    /// Index of the first non-core point with no core neighbor, when the
    /// cluster is non-compliant.
    pub first_violation_index: Option<usize>,
}

impl Verdict {
    fn pass(neighbor_counts: Vec<usize>) -> Self {
        Self {
            compliant: true,
            neighbor_counts,
            first_violation_index: None,
        }
    }

    fn fail(neighbor_counts: Vec<usize>, violation: usize) -> Self {
        Self {
            compliant: false,
            neighbor_counts,
            first_violation_index: Some(violation),
        }
    }
}

/// Classify each point as core (`true`) or non-core (`false`).
#[inline]
fn classify_core(counts: &[usize], min_pts: usize) -> Vec<bool> {
    counts.iter().map(|&c| c >= min_pts).collect()
}

fn check_parameters(eps: i64, min_pts: usize) -> Result<()> {
    if eps <= 0 {
        return Err(ValidationError::InvalidParameter {
            name: "eps",
            message: "must be positive",
        });
    }
    if min_pts == 0 {
        return Err(ValidationError::InvalidParameter {
            name: "min_pts",
            message: "must be at least 1",
        });
    }
    Ok(())
}

/// Check one cluster of projected hits against the DBSCAN definition.
///
/// Runs the two-pass verification: neighbor counting over the pair upper
/// triangle, then core classification and a reachability scan for every
/// non-core point. The scan for point `i` excludes `i` itself by index, so
/// coincident points can still vouch for each other.
///
/// An empty cluster is vacuously compliant. A singleton is compliant only
/// with `min_pts = 1`: its count is exactly 1 (self-membership) and there
/// is no other point that could make it reachable.
///
/// # Errors
///
/// Rejects `eps <= 0` and `min_pts = 0` with
/// [`ValidationError::InvalidParameter`] before any distance work, and
/// propagates [`ValidationError::ComputationTimeout`] from the counting
/// pass when `budget` is set.
pub fn check_compliance(
    hits: &[Hit],
    eps: i64,
    min_pts: usize,
    budget: Option<Duration>,
) -> Result<Verdict> {
    check_parameters(eps, min_pts)?;

    let sq_eps = (eps * eps) as f64;
    let counts = neighbor_counts(hits, sq_eps, budget)?;
    let core = classify_core(&counts, min_pts);

    for (i, hit) in hits.iter().enumerate() {
        if core[i] {
            continue;
        }

        let reachable = hits
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && core[j] && squared_distance(hit, other) <= sq_eps);

        if !reachable {
            return Ok(Verdict::fail(counts, i));
        }
    }

    Ok(Verdict::pass(counts))
}

/// Validate one activity against the run's DBSCAN parameters.
///
/// Projects the activity's primitives into (scaled time, channel) hits and
/// runs [`check_compliance`] on them.
pub fn validate_activity(activity: &Activity, config: &ValidationConfig) -> Result<Verdict> {
    check_parameters(config.eps, config.min_pts)?;

    let hits = project(activity, config.time_scale)?;
    let budget = config.compute_budget_ms.map(Duration::from_millis);
    check_compliance(&hits, config.eps, config.min_pts, budget)
}
