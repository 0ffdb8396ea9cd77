//! Scalar extrema and cross-column correlation lookups.
//!
//! The anchor-row pattern: compute an extremum over one column, find the
//! first row holding exactly that stored value, then read companion columns
//! at the same row. Equality is exact because the anchor value is the same
//! stored f64, not a recomputation.

use super::AnalysisError;
use crate::parsers::Table;
use crate::schema::signal;

/// hPa-to-psi conversion used by the boost formulas
const PSI_PER_HPA: f64 = 0.0145;

/// Maximum of a named column over the whole table
pub fn max_of(table: &Table, name: &str) -> Result<f64, AnalysisError> {
    let column = table.column(name)?;
    require_rows(&column, name)?;
    Ok(column.iter().cloned().fold(f64::NEG_INFINITY, f64::max))
}

/// Minimum of a named column over the whole table
pub fn min_of(table: &Table, name: &str) -> Result<f64, AnalysisError> {
    let column = table.column(name)?;
    require_rows(&column, name)?;
    Ok(column.iter().cloned().fold(f64::INFINITY, f64::min))
}

/// First row where `anchor` holds exactly `value`. Multiple matches resolve
/// to the first in table order; zero matches is a lookup miss, surfaced
/// rather than defaulted.
pub fn row_where(table: &Table, anchor: &str, value: f64) -> Result<usize, AnalysisError> {
    let column = table.column(anchor)?;
    column
        .iter()
        .position(|&v| v == value)
        .ok_or_else(|| AnalysisError::LookupMiss {
            anchor: anchor.to_string(),
            value,
        })
}

/// Read `lookup` at the first row where `anchor` holds exactly
/// `anchor_value`
pub fn value_at(
    table: &Table,
    lookup: &str,
    anchor: &str,
    anchor_value: f64,
) -> Result<f64, AnalysisError> {
    let row = row_where(table, anchor, anchor_value)?;
    Ok(table.value(row, lookup)?)
}

/// Peak boost in psi as the delta between the independently-maximized
/// manifold and ambient pressures, rounded to 1 decimal.
///
/// The two maxima may occur at different rows; this is the accepted
/// "peak boost" figure, not a same-instant delta. For the latter use
/// [`boost_at_row`].
pub fn peak_boost_psi(table: &Table) -> Result<f64, AnalysisError> {
    let map_max = max_of(table, signal::MANIFOLD_PRESSURE)?;
    let amp_max = max_of(table, signal::AMBIENT_PRESSURE)?;
    Ok(round_to((map_max - amp_max) * PSI_PER_HPA, 1))
}

/// Boost in psi at one specific row (same-instant delta), rounded to 1
/// decimal
pub fn boost_at_row(table: &Table, row: usize) -> Result<f64, AnalysisError> {
    let map = table.value(row, signal::MANIFOLD_PRESSURE)?;
    let amp = table.value(row, signal::AMBIENT_PRESSURE)?;
    Ok(round_to((map - amp) * PSI_PER_HPA, 1))
}

/// One fuel-pump operating point
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PumpSample {
    /// Volumetric control valve duty, percent
    pub duty: f64,
    pub gear: i64,
    pub rpm: i64,
}

/// High-pressure fuel pump duty classification
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum PumpDuty {
    /// Duty pinned at/above the saturation threshold across a range of
    /// rows; each one is reported since the pump ran out of headroom there
    Saturated(Vec<PumpSample>),
    /// Duty stayed below saturation; the single peak operating point,
    /// with duty truncated to 0.1%
    Peak(PumpSample),
}

/// Classify fuel-pump duty over the pull against a saturation threshold
pub fn pump_duty(table: &Table, saturation: f64) -> Result<PumpDuty, AnalysisError> {
    let duty = table.column(signal::PUMP_DUTY)?;
    let gear = table.column(signal::GEAR)?;
    let rpm = table.column(signal::ENGINE_RPM)?;
    require_rows(&duty, signal::PUMP_DUTY)?;

    let peak = duty.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if peak >= saturation {
        let samples = duty
            .iter()
            .enumerate()
            .filter(|(_, &d)| d >= saturation)
            .map(|(row, &d)| PumpSample {
                duty: d,
                gear: gear[row] as i64,
                rpm: rpm[row] as i64,
            })
            .collect();
        Ok(PumpDuty::Saturated(samples))
    } else {
        let row = row_where(table, signal::PUMP_DUTY, peak)?;
        Ok(PumpDuty::Peak(PumpSample {
            duty: truncate_to_tenth(peak),
            gear: gear[row] as i64,
            rpm: rpm[row] as i64,
        }))
    }
}

/// Round to `decimals` decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Truncate toward zero to one decimal place
pub fn truncate_to_tenth(value: f64) -> f64 {
    (value * 10.0).trunc() / 10.0
}

fn require_rows(column: &[f64], name: &str) -> Result<(), AnalysisError> {
    if column.is_empty() {
        return Err(AnalysisError::EmptyWindow(format!(
            "no rows to scan for {}",
            name
        )));
    }
    Ok(())
}
