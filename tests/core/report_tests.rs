//! Report computation and formatting tests

use pullview::analysis::metrics::{PumpDuty, PumpSample};
use pullview::analysis::window::{extract, Strategy};
use pullview::report::PullSummary;

use crate::common::{self, expected};

fn summary() -> PullSummary {
    let table = common::pull_table();
    let window = extract(&table, Strategy::Intersecting).unwrap();
    PullSummary::compute(&window.apply(&table)).unwrap()
}

#[test]
fn test_summary_fields() {
    let s = summary();

    assert_eq!(s.peak_rpm, expected::PEAK_RPM as i64);
    assert_eq!(s.peak_rpm_gear, 3);

    assert_eq!(s.peak_timing, expected::PEAK_TIMING);
    assert_eq!(s.timing_gear, 3);
    assert_eq!(s.timing_rpm, expected::PEAK_RPM as i64);
    // Manifold pressure also peaks at the end of the ramp, so the
    // same-instant boost at peak timing equals peak boost here
    assert_eq!(s.timing_boost_psi, expected::PEAK_BOOST_PSI);

    assert_eq!(s.worst_knock, expected::WORST_KNOCK);
    assert_eq!(s.worst_knock_cylinder, expected::WORST_KNOCK_CYLINDER);
    assert_eq!(s.knock_gear, expected::KNOCK_GEAR);
    assert_eq!(s.knock_rpm, expected::KNOCK_RPM);

    assert_eq!(s.peak_boost_psi, expected::PEAK_BOOST_PSI);
    assert_eq!(s.boost_gear, 3);
    assert_eq!(s.boost_rpm, expected::PEAK_RPM as i64);
    assert_eq!(s.boost_timing, expected::PEAK_TIMING);

    assert_eq!(
        s.pump,
        PumpDuty::Peak(PumpSample {
            duty: expected::PEAK_PUMP_DUTY,
            gear: 3,
            rpm: expected::PEAK_RPM as i64,
        })
    );
}

#[test]
fn test_console_lines() {
    let lines = summary().lines();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "6640 rpm in gear 3");
    assert_eq!(
        lines[1],
        "19.5° timing advance in gear 3 at 6640 rpm, 16.8 psi"
    );
    assert_eq!(
        lines[2],
        "-3.00° worst knock in cylinder 2 in gear 2 at 4400 rpm"
    );
    assert_eq!(
        lines[3],
        "16.8 psi peak boost in gear 3 at 6640 rpm, 19.5 ° advance"
    );
    assert_eq!(lines[4], "hpfp 83.5% in gear 3 at 6640 rpm");
}
