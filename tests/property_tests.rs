use proptest::prelude::*;
use ta_compliance::validator::{check_compliance, distance::squared_distance, neighbor_counts};

/// Full O(n²) neighbor count without the symmetric single-pass trick.
fn brute_force_counts(hits: &[[f64; 2]], sq_eps: f64) -> Vec<usize> {
    hits.iter()
        .map(|a| {
            hits.iter()
                .filter(|b| squared_distance(a, b) <= sq_eps)
                .count()
        })
        .collect()
}

fn arb_hits() -> impl Strategy<Value = Vec<[f64; 2]>> {
    prop::collection::vec((0.0f64..200.0, 0.0f64..500.0).prop_map(|(t, c)| [t, c]), 0..40)
}

proptest! {
    #[test]
    fn prop_symmetric_accumulation_matches_brute_force(
        hits in arb_hits(),
        eps in 1i64..50
    ) {
        let sq_eps = (eps * eps) as f64;
        let counts = neighbor_counts(&hits, sq_eps, None).unwrap();

        prop_assert_eq!(counts, brute_force_counts(&hits, sq_eps));
    }

    #[test]
    fn prop_distance_symmetric_and_nonnegative(
        a in (0.0f64..200.0, 0.0f64..500.0).prop_map(|(t, c)| [t, c]),
        b in (0.0f64..200.0, 0.0f64..500.0).prop_map(|(t, c)| [t, c])
    ) {
        let d = squared_distance(&a, &b);
        prop_assert_eq!(d, squared_distance(&b, &a));
        prop_assert!(d >= 0.0);
        prop_assert_eq!(squared_distance(&a, &a), 0.0);
    }

    #[test]
    fn prop_all_core_cluster_is_compliant(
        hits in arb_hits(),
        eps in 1i64..50,
        min_pts in 1usize..10
    ) {
        let sq_eps = (eps * eps) as f64;
        let counts = neighbor_counts(&hits, sq_eps, None).unwrap();

        // Defined purely by the threshold: if every count clears min_pts,
        // the verdict must be compliant regardless of geometry.
        if counts.iter().all(|&c| c >= min_pts) {
            let verdict = check_compliance(&hits, eps, min_pts, None).unwrap();
            prop_assert!(verdict.compliant);
        }
    }

    #[test]
    fn prop_verdict_counts_are_index_aligned(
        hits in arb_hits(),
        eps in 1i64..50,
        min_pts in 1usize..10
    ) {
        let verdict = check_compliance(&hits, eps, min_pts, None).unwrap();
        prop_assert_eq!(verdict.neighbor_counts.len(), hits.len());

        if let Some(idx) = verdict.first_violation_index {
            prop_assert!(!verdict.compliant);
            // The reported violator is non-core by construction.
            prop_assert!(verdict.neighbor_counts[idx] < min_pts);
        } else {
            prop_assert!(verdict.compliant);
        }
    }
}
