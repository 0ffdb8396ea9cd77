//! PullView - WOT pull analyzer for engine-controller datalog exports
//!
//! This library loads positional CSV datalogs, extracts the
//! wide-open-throttle pull window, computes peak/worst performance metrics
//! with cross-column correlation lookups, and renders an interactive
//! normalized chart of the pull.
//!
//! ## Module Structure
//!
//! - [`schema`] - Fixed positional column registry for the export layout
//! - [`parsers`] - Datalog CSV loader and the in-memory signal table
//! - [`analysis`] - Window extraction, metric engine, knock aggregation
//! - [`report`] - Per-pull summary computation and console templates
//! - [`state`] - Tunable constants and per-file state
//! - [`app`] - Chart application (one blocking window per file)
//! - [`ui`] - Chart rendering components

pub mod analysis;
pub mod app;
pub mod parsers;
pub mod report;
pub mod schema;
pub mod state;
pub mod ui;
