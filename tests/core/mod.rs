//! Core module tests for non-parser functionality
//!
//! Tests for:
//! - Column registry resolution and validation
//! - Pull-window extraction strategies
//! - Metric extrema and correlation lookups
//! - Knock aggregation
//! - Report formatting

pub mod knock_tests;
pub mod metrics_tests;
pub mod report_tests;
pub mod window_tests;
