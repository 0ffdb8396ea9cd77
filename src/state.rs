//! Core constants and per-file state types.
//!
//! Extraction thresholds and chart tunables live here as named constants;
//! there is no configuration file and no process-wide mutable state. Every
//! file's data is carried explicitly through the pipeline.

use std::path::PathBuf;

use crate::analysis::window::Window;
use crate::parsers::Table;

// ============================================================================
// Constants
// ============================================================================

/// Commanded throttle at/above this is treated as wide open
pub const THROTTLE_WOT_THRESHOLD: f64 = 99.0;

/// Rows of context kept on each side of a threshold-crossing window
pub const PULL_MARGIN_ROWS: usize = 50;

/// Pump duty at/above this means the volumetric control valve is saturated
pub const PUMP_SATURATION_DUTY: f64 = 100.0;

/// Maximum points to render per chart series (LTTB downsampling kicks in
/// above this)
pub const MAX_CHART_POINTS: usize = 2000;

/// Color palette for chart lines
pub const CHART_COLORS: &[[u8; 3]] = &[
    [113, 120, 78],  // Olive green (primary)
    [191, 78, 48],   // Rust orange (accent)
    [71, 108, 155],  // Blue (info)
    [159, 166, 119], // Sage green (success)
    [253, 193, 73],  // Amber (warning)
    [135, 30, 28],   // Dark red (error)
    [246, 247, 235], // Cream
    [100, 149, 237], // Cornflower blue
    [255, 127, 80],  // Coral
    [144, 238, 144], // Light green
];

// ============================================================================
// Core Types
// ============================================================================

/// One loaded datalog with its extracted chart window
pub struct LoadedPull {
    /// Path to the original file
    pub path: PathBuf,
    /// Display name for the file
    pub name: String,
    /// The full parsed table (not trimmed; the window indexes into it)
    pub table: Table,
    /// Threshold-crossing window with padding context, used by the chart
    pub window: Window,
}

impl LoadedPull {
    pub fn new(path: PathBuf, table: Table, window: Window) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            name,
            table,
            window,
        }
    }
}
