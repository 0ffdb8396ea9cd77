//! Metric engine tests: extrema, correlation lookups, boost, pump duty

use pullview::analysis::metrics::{
    boost_at_row, max_of, min_of, peak_boost_psi, pump_duty, value_at, PumpDuty, PumpSample,
};
use pullview::analysis::window::{extract, Strategy};
use pullview::analysis::AnalysisError;
use pullview::schema::signal;

use crate::common::{self, expected, table_of};

fn trimmed_pull() -> pullview::parsers::Table {
    let table = common::pull_table();
    let window = extract(&table, Strategy::Intersecting).unwrap();
    window.apply(&table)
}

#[test]
fn test_max_at_least_min_across_signals() {
    let table = trimmed_pull();
    for name in [
        signal::ENGINE_RPM,
        signal::TIMING,
        signal::MANIFOLD_PRESSURE,
        signal::PUMP_DUTY,
        signal::LAMBDA_BANK1,
    ] {
        let max = max_of(&table, name).unwrap();
        let min = min_of(&table, name).unwrap();
        assert!(max >= min, "{}: max {} < min {}", name, max, min);
    }
}

#[test]
fn test_self_lookup_identity() {
    let table = trimmed_pull();
    for name in [signal::ENGINE_RPM, signal::TIMING, signal::PUMP_DUTY] {
        let max = max_of(&table, name).unwrap();
        assert_eq!(value_at(&table, name, name, max).unwrap(), max);
    }
}

#[test]
fn test_extrema_match_synthetic_ramps() {
    let table = trimmed_pull();
    assert_eq!(
        max_of(&table, signal::ENGINE_RPM).unwrap(),
        expected::PEAK_RPM
    );
    assert_eq!(max_of(&table, signal::TIMING).unwrap(), expected::PEAK_TIMING);
    assert_eq!(
        max_of(&table, signal::PUMP_DUTY).unwrap(),
        expected::PEAK_PUMP_DUTY
    );
}

#[test]
fn test_peak_boost_independent_maxima() {
    let table = trimmed_pull();
    assert_eq!(peak_boost_psi(&table).unwrap(), expected::PEAK_BOOST_PSI);
}

#[test]
fn test_boost_formulas_disagree_in_general() {
    // Manifold peaks on row 0, ambient on row 1: the independent-maxima
    // formula mixes rows, the same-row formula does not
    let table = table_of(
        &[signal::MANIFOLD_PRESSURE, signal::AMBIENT_PRESSURE],
        vec![vec![2000.0, 990.0], vec![1500.0, 1010.0]],
    );

    let peak = peak_boost_psi(&table).unwrap();
    let at_row0 = boost_at_row(&table, 0).unwrap();
    assert_eq!(peak, 14.4); // (2000 - 1010) * 0.0145
    assert_eq!(at_row0, 14.6); // (2000 - 990) * 0.0145
    assert_ne!(peak, at_row0);
}

#[test]
fn test_lookup_miss_surfaced() {
    let table = trimmed_pull();
    let err = value_at(&table, signal::GEAR, signal::ENGINE_RPM, 123.456).unwrap_err();
    match err {
        AnalysisError::LookupMiss { anchor, value } => {
            assert_eq!(anchor, signal::ENGINE_RPM);
            assert_eq!(value, 123.456);
        }
        other => panic!("expected LookupMiss, got {:?}", other),
    }
}

#[test]
fn test_pump_duty_below_saturation_is_single_peak() {
    let table = trimmed_pull();
    let result = pump_duty(&table, 100.0).unwrap();
    assert_eq!(
        result,
        PumpDuty::Peak(PumpSample {
            duty: expected::PEAK_PUMP_DUTY,
            gear: 3,
            rpm: expected::PEAK_RPM as i64,
        })
    );
}

#[test]
fn test_pump_duty_saturated_lists_each_point() {
    let table = table_of(
        &[signal::PUMP_DUTY, signal::GEAR, signal::ENGINE_RPM],
        vec![
            vec![98.0, 3.0, 3800.0],
            vec![105.0, 3.0, 4000.0],
            vec![102.0, 3.0, 4200.0],
            vec![99.0, 3.0, 4400.0],
        ],
    );
    let result = pump_duty(&table, 100.0).unwrap();
    match result {
        PumpDuty::Saturated(samples) => {
            assert_eq!(samples.len(), 2);
            assert_eq!(samples[0].rpm, 4000);
            assert_eq!(samples[1].rpm, 4200);
        }
        other => panic!("expected Saturated, got {:?}", other),
    }
}
