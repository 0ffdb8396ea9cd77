//! Pull analysis: window extraction, metric correlation, knock aggregation.
//!
//! Every operation here takes an explicit [`Table`] parameter; nothing holds
//! state across files. The summary pipeline trims the table to the pull
//! window first, then runs extrema and value-at lookups on the trimmed
//! sub-table.

pub mod knock;
pub mod metrics;
pub mod window;

use thiserror::Error;

use crate::schema::SchemaError;

/// Errors raised during pull analysis. All file-scoped: the caller reports
/// the failure for this file and moves on to the next.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Column registry mismatch; configuration, not data
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// No contiguous sample range satisfied the pull criteria
    #[error("no qualifying pull found: {0}")]
    EmptyWindow(String),

    /// A value-at correlation lookup found no anchor row
    #[error("lookup miss: no row where {anchor} == {value}")]
    LookupMiss { anchor: String, value: f64 },
}
