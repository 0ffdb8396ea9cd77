//! Pull-window extraction.
//!
//! A full log includes idle time, staging, and cooldown around the actual
//! wide-open-throttle pull. Two strategies reduce it to one contiguous
//! sample range:
//!
//! - **Intersecting-range**: each criterion narrows the window produced by
//!   the previous one to its own first/last matching rows. Deliberately
//!   order-dependent; trims both ends tightly, which is what the metric
//!   lookups want.
//! - **Threshold-crossing**: first throttle crossing up through a threshold
//!   to the last row before it drops back below, padded by a fixed margin.
//!   Keeps context around the pull, which is what the chart wants.

use strum::{AsRefStr, EnumString};

use super::AnalysisError;
use crate::parsers::Table;
use crate::schema::signal;
use crate::state::{PULL_MARGIN_ROWS, THROTTLE_WOT_THRESHOLD};

/// Inclusive contiguous sample range `[start, end]` into a table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// `start <= end` always holds; a degenerate range is a caller bug
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "window start must not exceed end");
        Self { start, end }
    }

    /// Number of samples covered
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        false // a Window always covers at least one row
    }

    /// The sub-table covered by this window
    pub fn apply(&self, table: &Table) -> Table {
        table.trim(self.start, self.end)
    }
}

/// Row predicate for a pull criterion
#[derive(Clone, Copy, Debug)]
pub enum Predicate {
    /// value >= threshold
    AtLeast(f64),
    /// value < threshold
    Below(f64),
}

impl Predicate {
    fn matches(&self, value: f64) -> bool {
        match *self {
            Predicate::AtLeast(t) => value >= t,
            Predicate::Below(t) => value < t,
        }
    }
}

/// One (signal, predicate) pull criterion
#[derive(Clone, Debug)]
pub struct Criterion {
    pub signal: &'static str,
    pub predicate: Predicate,
}

impl Criterion {
    pub fn new(signal: &'static str, predicate: Predicate) -> Self {
        Self { signal, predicate }
    }
}

/// Extraction strategy selector
#[derive(AsRefStr, Clone, Copy, Debug, Default, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Sequentially-narrowed first/last index intersection
    #[default]
    Intersecting,
    /// Throttle threshold crossing with padding margin
    ThresholdCrossing,
}

/// Default pull criteria: wide-open throttle, spark advance present, and a
/// rich front bank confirming load. Order matters (see
/// [`extract_intersecting`]).
pub fn default_criteria() -> Vec<Criterion> {
    vec![
        Criterion::new(signal::THROTTLE, Predicate::AtLeast(THROTTLE_WOT_THRESHOLD)),
        Criterion::new(signal::TIMING, Predicate::AtLeast(0.0)),
        Criterion::new(signal::LAMBDA_BANK1, Predicate::Below(1.0)),
    ]
}

/// Extract a pull window using the configured strategy and defaults
pub fn extract(table: &Table, strategy: Strategy) -> Result<Window, AnalysisError> {
    match strategy {
        Strategy::Intersecting => extract_intersecting(table, &default_criteria()),
        Strategy::ThresholdCrossing => {
            extract_threshold(table, THROTTLE_WOT_THRESHOLD, PULL_MARGIN_ROWS)
        }
    }
}

/// Sequentially narrow the table by each criterion's first/last matching
/// row.
///
/// Each criterion is evaluated inside the window produced by the previous
/// one, not against the original table, so reordering the criteria can
/// change the result. That sequential narrowing is the intended semantics,
/// not an approximation of a true multi-predicate intersection.
pub fn extract_intersecting(
    table: &Table,
    criteria: &[Criterion],
) -> Result<Window, AnalysisError> {
    if table.is_empty() {
        return Err(AnalysisError::EmptyWindow("table has no rows".to_string()));
    }

    let mut start = 0usize;
    let mut end = table.len() - 1;

    for criterion in criteria {
        let column = table.column(criterion.signal)?;

        let mut first = None;
        let mut last = None;
        for row in start..=end {
            if criterion.predicate.matches(column[row]) {
                if first.is_none() {
                    first = Some(row);
                }
                last = Some(row);
            }
        }

        match (first, last) {
            (Some(f), Some(l)) => {
                start = f;
                end = l;
            }
            _ => {
                return Err(AnalysisError::EmptyWindow(format!(
                    "no rows satisfy criterion on {}",
                    criterion.signal
                )));
            }
        }
    }

    Ok(Window::new(start, end))
}

/// Scan for the first row where throttle reaches `threshold`, run to the
/// last row before it drops back below, then pad both ends by `margin`
/// rows clamped to the table bounds.
pub fn extract_threshold(
    table: &Table,
    threshold: f64,
    margin: usize,
) -> Result<Window, AnalysisError> {
    let throttle = table.column(signal::THROTTLE)?;

    let start = throttle
        .iter()
        .position(|&v| v >= threshold)
        .ok_or_else(|| AnalysisError::EmptyWindow("no pull detected".to_string()))?;

    // The pull holds while throttle stays at or above the threshold; the
    // window ends on the last row of that run.
    let end = match throttle[start..].iter().position(|&v| v < threshold) {
        Some(offset) => start + offset - 1,
        None => throttle.len() - 1,
    };

    let padded_start = start.saturating_sub(margin);
    let padded_end = (end + margin).min(table.len() - 1);

    Ok(Window::new(padded_start, padded_end))
}
