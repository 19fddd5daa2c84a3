//! Pairwise squared distances and eps-neighborhood counting.
//!
//! Distances are compared squared on both sides, so no square root is ever
//! taken. The counting pass walks the upper triangle of the pair matrix
//! once and exploits symmetry: one evaluation of `{i, j}` settles the pair
//! for both endpoints. No spatial index is used; clusters are small enough
//! that the O(n²) pass is the simpler and the faithful choice.

use std::time::{Duration, Instant};

use crate::core::projection::Hit;
use crate::validator::{Result, ValidationError};

/// Squared Euclidean distance between two projected hits.
#[inline]
pub fn squared_distance(a: &Hit, b: &Hit) -> f64 {
    let dt = a[0] - b[0];
    let dc = a[1] - b[1];
    dt * dt + dc * dc
}

/// Count, for every hit, the neighbors within `eps` (self included).
///
/// Each unordered pair `{i, j}` with `i <= j` is evaluated exactly once.
/// A pair within range increments both endpoint counts; the diagonal pair
/// `i = i` increments once, which is the self-membership term of the
/// DBSCAN definition. The result is index-aligned with `hits`.
///
/// # Arguments
///
/// * `hits` - Projected hits of one cluster
/// * `sq_eps` - Squared neighborhood radius
/// * `budget` - Optional wall-clock budget for the whole pass
///
/// # Errors
///
/// Returns [`ValidationError::ComputationTimeout`] if `budget` elapses
/// before the pass completes. No partial counts are ever returned.
pub fn neighbor_counts(
    hits: &[Hit],
    sq_eps: f64,
    budget: Option<Duration>,
) -> Result<Vec<usize>> {
    let n = hits.len();
    let mut counts = vec![0usize; n];

    let deadline = budget.map(|b| (Instant::now() + b, b));

    for i in 0..n {
        if let Some((at, b)) = deadline {
            if Instant::now() >= at {
                return Err(ValidationError::ComputationTimeout {
                    budget_ms: b.as_millis() as u64,
                    n_points: n,
                });
            }
        }

        // Self pair: distance 0, always within range.
        counts[i] += 1;

        for j in (i + 1)..n {
            if squared_distance(&hits[i], &hits[j]) <= sq_eps {
                counts[i] += 1;
                counts[j] += 1;
            }
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference counter: full O(n²) scan without the symmetry trick.
    fn brute_force_counts(hits: &[Hit], sq_eps: f64) -> Vec<usize> {
        hits.iter()
            .map(|a| {
                hits.iter()
                    .filter(|b| squared_distance(a, b) <= sq_eps)
                    .count()
            })
            .collect()
    }

    #[test]
    fn test_squared_distance_symmetric() {
        let a = [1.5, 10.0];
        let b = [4.0, 12.0];
        assert_eq!(squared_distance(&a, &b), squared_distance(&b, &a));
        assert_eq!(squared_distance(&a, &b), 2.5 * 2.5 + 4.0);
    }

    #[test]
    fn test_squared_distance_zero_iff_coincident() {
        let a = [3.0, 7.0];
        assert_eq!(squared_distance(&a, &a), 0.0);
        assert!(squared_distance(&a, &[3.0, 8.0]) > 0.0);
    }

    #[test]
    fn test_counts_include_self() {
        // One isolated point still counts itself.
        let hits = vec![[0.0, 0.0], [100.0, 100.0]];
        let counts = neighbor_counts(&hits, 1.0, None).unwrap();
        assert_eq!(counts, vec![1, 1]);
    }

    #[test]
    fn test_counts_match_brute_force() {
        let hits = vec![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [3.0, 3.0],
            [3.5, 3.0],
            [50.0, 2.0],
        ];
        let sq_eps = 4.0;

        let counts = neighbor_counts(&hits, sq_eps, None).unwrap();
        assert_eq!(counts, brute_force_counts(&hits, sq_eps));
    }

    #[test]
    fn test_counts_boundary_distance_included() {
        // d² == eps² is inside the neighborhood, not outside.
        let hits = vec![[0.0, 0.0], [3.0, 4.0]];
        let counts = neighbor_counts(&hits, 25.0, None).unwrap();
        assert_eq!(counts, vec![2, 2]);
    }

    #[test]
    fn test_counts_coincident_points() {
        // Coincident points are distinct entities and count each other.
        let hits = vec![[2.0, 2.0], [2.0, 2.0], [2.0, 2.0]];
        let counts = neighbor_counts(&hits, 1.0, None).unwrap();
        assert_eq!(counts, vec![3, 3, 3]);
    }

    #[test]
    fn test_counts_empty() {
        let counts = neighbor_counts(&[], 1.0, None).unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_zero_budget_times_out() {
        let hits = vec![[0.0, 0.0], [1.0, 1.0]];
        let err = neighbor_counts(&hits, 4.0, Some(Duration::ZERO)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ComputationTimeout { n_points: 2, .. }
        ));
    }
}
