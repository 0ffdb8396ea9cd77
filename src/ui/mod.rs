//! UI rendering for the pull chart window.
//!
//! - `chart` - normalized multi-series plot, gear-change markers, and the
//!   series selection panel

pub mod chart;
