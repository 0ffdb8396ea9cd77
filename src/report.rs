//! Per-pull summary computation and console formatting.
//!
//! All metrics are computed over the precisely-trimmed pull window (the
//! intersecting-range extraction), matching what the summary lines report.

use serde::Serialize;

use crate::analysis::knock::{worst_cylinder, worst_knock};
use crate::analysis::metrics::{
    boost_at_row, max_of, min_of, peak_boost_psi, pump_duty, row_where, value_at, PumpDuty,
};
use crate::analysis::AnalysisError;
use crate::parsers::Table;
use crate::schema::signal;
use crate::state::PUMP_SATURATION_DUTY;

/// Derived performance metrics for one pull
#[derive(Clone, Debug, Serialize)]
pub struct PullSummary {
    pub peak_rpm: i64,
    pub peak_rpm_gear: i64,

    /// Peak ignition timing advance, degrees
    pub peak_timing: f64,
    pub timing_gear: i64,
    pub timing_rpm: i64,
    /// Boost at the peak-timing row (same-instant delta)
    pub timing_boost_psi: f64,

    /// Worst knock retard, degrees (2 dp)
    pub worst_knock: f64,
    /// Cylinder index 0-5 of the worst retard
    pub worst_knock_cylinder: usize,
    pub knock_gear: i64,
    pub knock_rpm: i64,

    /// Peak boost as independent-maxima delta, psi
    pub peak_boost_psi: f64,
    pub boost_gear: i64,
    pub boost_rpm: i64,
    /// Timing advance at the peak-manifold-pressure row
    pub boost_timing: f64,

    pub pump: PumpDuty,
}

impl PullSummary {
    /// Compute every metric from a pull-trimmed table
    pub fn compute(table: &Table) -> Result<Self, AnalysisError> {
        let peak_rpm = max_of(table, signal::ENGINE_RPM)?;
        let peak_rpm_gear = value_at(table, signal::GEAR, signal::ENGINE_RPM, peak_rpm)?;

        let peak_timing = max_of(table, signal::TIMING)?;
        let timing_row = row_where(table, signal::TIMING, peak_timing)?;
        let timing_gear = table.value(timing_row, signal::GEAR)?;
        let timing_rpm = table.value(timing_row, signal::ENGINE_RPM)?;
        let timing_boost_psi = boost_at_row(table, timing_row)?;

        let knock_vector = worst_knock(table)?;
        let (worst_knock_cylinder, worst) = worst_cylinder(&knock_vector);
        // Anchor on the un-rounded channel minimum so the equality lookup
        // hits the stored value
        let knock_channel = signal::KNOCK[worst_knock_cylinder];
        let knock_min = min_of(table, knock_channel)?;
        let knock_row = row_where(table, knock_channel, knock_min)?;
        let knock_gear = table.value(knock_row, signal::GEAR)?;
        let knock_rpm = table.value(knock_row, signal::ENGINE_RPM)?;

        let boost = peak_boost_psi(table)?;
        let map_max = max_of(table, signal::MANIFOLD_PRESSURE)?;
        let boost_row = row_where(table, signal::MANIFOLD_PRESSURE, map_max)?;
        let boost_gear = table.value(boost_row, signal::GEAR)?;
        let boost_rpm = table.value(boost_row, signal::ENGINE_RPM)?;
        let boost_timing = table.value(boost_row, signal::TIMING)?;

        let pump = pump_duty(table, PUMP_SATURATION_DUTY)?;

        Ok(Self {
            peak_rpm: peak_rpm as i64,
            peak_rpm_gear: peak_rpm_gear as i64,
            peak_timing,
            timing_gear: timing_gear as i64,
            timing_rpm: timing_rpm as i64,
            timing_boost_psi,
            worst_knock: worst,
            worst_knock_cylinder,
            knock_gear: knock_gear as i64,
            knock_rpm: knock_rpm as i64,
            peak_boost_psi: boost,
            boost_gear: boost_gear as i64,
            boost_rpm: boost_rpm as i64,
            boost_timing,
            pump,
        })
    }

    /// Fixed console line templates, one entry per report line
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} rpm in gear {}", self.peak_rpm, self.peak_rpm_gear),
            format!(
                "{}° timing advance in gear {} at {} rpm, {} psi",
                self.peak_timing, self.timing_gear, self.timing_rpm, self.timing_boost_psi
            ),
            format!(
                "{:.2}° worst knock in cylinder {} in gear {} at {} rpm",
                self.worst_knock, self.worst_knock_cylinder, self.knock_gear, self.knock_rpm
            ),
            format!(
                "{} psi peak boost in gear {} at {} rpm, {} ° advance",
                self.peak_boost_psi, self.boost_gear, self.boost_rpm, self.boost_timing
            ),
        ];
        lines.push(match &self.pump {
            PumpDuty::Peak(sample) => format!(
                "hpfp {}% in gear {} at {} rpm",
                sample.duty, sample.gear, sample.rpm
            ),
            PumpDuty::Saturated(samples) => {
                let points: Vec<String> = samples
                    .iter()
                    .map(|s| format!("{}% {}@{}", s.duty, s.gear, s.rpm))
                    .collect();
                format!("hpfp saturated: {}", points.join(", "))
            }
        });
        lines
    }
}
