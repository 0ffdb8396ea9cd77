//! Pull-window extraction tests against the synthetic log

use pullview::analysis::window::{
    default_criteria, extract, extract_intersecting, extract_threshold, Criterion, Predicate,
    Strategy, Window,
};
use pullview::analysis::AnalysisError;
use pullview::schema::signal;

use crate::common::{self, table_of, PULL_END, PULL_START, TOTAL_ROWS};

#[test]
fn test_intersecting_finds_the_pull() {
    let table = common::pull_table();
    let window = extract_intersecting(&table, &default_criteria()).unwrap();
    assert_eq!(window, Window::new(PULL_START, PULL_END));
}

#[test]
fn test_threshold_without_margin_matches_wot_run() {
    let table = common::pull_table();
    let window = extract_threshold(&table, 99.0, 0).unwrap();
    assert_eq!(window, Window::new(PULL_START, PULL_END));
}

#[test]
fn test_threshold_default_margin_clamps_to_table() {
    let table = common::pull_table();
    let window = extract(&table, Strategy::ThresholdCrossing).unwrap();
    // 50 rows of margin on a 50-row log swallows it whole
    assert_eq!(window, Window::new(0, TOTAL_ROWS - 1));
}

#[test]
fn test_no_wot_rows_is_empty_window_not_default() {
    let table = table_of(
        &[signal::THROTTLE, signal::TIMING, signal::LAMBDA_BANK1],
        vec![
            vec![10.0, 5.0, 0.9],
            vec![50.0, 5.0, 0.9],
            vec![80.0, 5.0, 0.9],
        ],
    );

    let err = extract(&table, Strategy::Intersecting).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyWindow(_)));

    let err = extract(&table, Strategy::ThresholdCrossing).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyWindow(_)));
}

#[test]
fn test_criteria_order_changes_result() {
    // "a" matches rows 1..=3; "b" matches rows 0 and 2. Narrowing by "a"
    // first hides b's row-0 match.
    let table = table_of(
        &["a", "b"],
        vec![
            vec![0.0, 9.0],
            vec![1.0, 0.0],
            vec![1.0, 9.0],
            vec![1.0, 0.0],
            vec![0.0, 0.0],
        ],
    );

    let forward = extract_intersecting(
        &table,
        &[
            Criterion::new("a", Predicate::AtLeast(1.0)),
            Criterion::new("b", Predicate::AtLeast(9.0)),
        ],
    )
    .unwrap();
    let reversed = extract_intersecting(
        &table,
        &[
            Criterion::new("b", Predicate::AtLeast(9.0)),
            Criterion::new("a", Predicate::AtLeast(1.0)),
        ],
    )
    .unwrap();

    assert_ne!(forward, reversed);
}

#[test]
fn test_unknown_criterion_signal_is_schema_error() {
    let table = common::pull_table();
    let err = extract_intersecting(
        &table,
        &[Criterion::new("iga_ad_l_knk[4]", Predicate::Below(0.0))],
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::Schema(_)));
}
