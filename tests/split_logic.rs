use std::collections::BTreeMap;

use split_core::domain::{amounts_match, EPSILON};
use split_core::domain::expense::SplitPolicy;
use split_core::errors::SplitError;
use split_core::split::SplitCalculator;

fn people(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn amounts(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs
        .iter()
        .map(|(name, amount)| (name.to_string(), *amount))
        .collect()
}

#[test]
fn equal_split_sum_invariant_holds_for_awkward_head_counts() {
    for (total, count) in [(100.0, 3), (1.0, 7), (99.99, 6), (250.0, 9)] {
        let participants: Vec<String> = (0..count).map(|i| format!("P{i}")).collect();
        let shares =
            SplitCalculator::compute(total, &participants, "Me", &SplitPolicy::Equal).unwrap();
        assert_eq!(shares.len(), count);
        assert!(
            amounts_match(shares.total(), total),
            "sum drifted for total={total} count={count}"
        );
    }
}

#[test]
fn known_split_scenarios() {
    let shares =
        SplitCalculator::compute(90.0, &people(&["A", "B", "C"]), "Me", &SplitPolicy::Equal)
            .unwrap();
    assert_eq!(shares.get("A").unwrap().amount, 30.0);
    assert_eq!(shares.get("B").unwrap().amount, 30.0);
    assert_eq!(shares.get("C").unwrap().amount, 30.0);

    let shares = SplitCalculator::compute(
        100.0,
        &people(&["A", "B", "C"]),
        "Me",
        &SplitPolicy::FixedPlusEqual(amounts(&[("A", 20.0)])),
    )
    .unwrap();
    assert_eq!(shares.get("A").unwrap().amount, 20.0);
    assert_eq!(shares.get("B").unwrap().amount, 40.0);
    assert_eq!(shares.get("C").unwrap().amount, 40.0);
}

#[test]
fn exact_amounts_mismatch_reports_both_sides() {
    let err = SplitCalculator::compute(
        75.0,
        &people(&["A", "B", "C"]),
        "Me",
        &SplitPolicy::ExactAmounts(amounts(&[("A", 25.0), ("B", 25.0), ("C", 20.0)])),
    )
    .unwrap_err();
    match err {
        SplitError::AmountMismatch { assigned, total } => {
            assert!((assigned - 70.0).abs() <= EPSILON);
            assert!((total - 75.0).abs() <= EPSILON);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn fixed_plus_equal_boundary_is_exclusive() {
    // Fixed equal to the total leaves nothing to split.
    let err = SplitCalculator::compute(
        100.0,
        &people(&["A", "B"]),
        "Me",
        &SplitPolicy::FixedPlusEqual(amounts(&[("A", 100.0)])),
    )
    .unwrap_err();
    assert!(matches!(err, SplitError::FixedExceedsTotal { .. }));
}
