//! Per-cylinder knock retard aggregation.
//!
//! Knock corrections are negative timing offsets; "worst" means the
//! algebraic minimum (most retard).

use super::metrics::{min_of, round_to};
use super::AnalysisError;
use crate::parsers::Table;
use crate::schema::signal;

/// Worst retard per cylinder, index-aligned to the knock channel numbering
pub type KnockVector = [f64; 6];

/// Worst (most negative) retard on each of the six knock channels, rounded
/// to 2 decimals
pub fn worst_knock(table: &Table) -> Result<KnockVector, AnalysisError> {
    let mut vector = [0.0; 6];
    for (cyl, name) in signal::KNOCK.iter().enumerate() {
        vector[cyl] = round_to(min_of(table, name)?, 2);
    }
    Ok(vector)
}

/// Cylinder index and value of the globally worst retard. Ties resolve to
/// the lowest channel index.
pub fn worst_cylinder(vector: &KnockVector) -> (usize, f64) {
    let mut worst = (0, vector[0]);
    for (cyl, &value) in vector.iter().enumerate().skip(1) {
        if value < worst.1 {
            worst = (cyl, value);
        }
    }
    worst
}
