//! Interactive pull chart application.
//!
//! One eframe window per file, shown blocking: the user inspects the pull
//! and closes the window before the batch moves to the next file. The plot
//! overlays min-max-normalized series on a shared 0-1 axis with the x-axis
//! in seconds, zeroed at the window start.

use eframe::egui;

use crate::analysis::window::Window;
use crate::analysis::AnalysisError;
use crate::parsers::Table;
use crate::schema::signal;
use crate::state::{LoadedPull, CHART_COLORS, MAX_CHART_POINTS};
use crate::ui::chart;

/// One plottable series, pre-normalized and downsampled
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color_index: usize,
    pub visible: bool,
}

/// A gear change inside the chart window
#[derive(Clone, Debug, PartialEq)]
pub struct GearChange {
    /// Seconds from window start
    pub time: f64,
    pub from: i64,
    pub to: i64,
}

impl GearChange {
    /// Marker label, e.g. `3->4`
    pub fn label(&self) -> String {
        format!("{}->{}", self.from, self.to)
    }
}

/// Application state for one file's chart window
pub struct PullApp {
    pub name: String,
    pub series: Vec<Series>,
    pub gear_changes: Vec<GearChange>,
}

impl PullApp {
    pub fn new(pull: &LoadedPull) -> Result<Self, AnalysisError> {
        let trimmed = pull.window.apply(&pull.table);
        let times = zeroed_times(&trimmed)?;

        let mut series = Vec::new();
        for (color_index, name) in plottable_signals(&trimmed).into_iter().enumerate() {
            let values = trimmed.column(&name)?;
            let raw = chart::downsample_lttb(&times, &values, MAX_CHART_POINTS);
            let points = chart::normalize_points(&raw);
            series.push(Series {
                visible: name == signal::ENGINE_RPM,
                name,
                points,
                color_index: color_index % CHART_COLORS.len(),
            });
        }

        Ok(Self {
            name: pull.name.clone(),
            series,
            gear_changes: gear_changes(&pull.table, pull.window, &times)?,
        })
    }
}

impl eframe::App for PullApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("series_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                self.render_series_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_chart(ui);
        });
    }
}

/// Time column of the trimmed window, zeroed at its first sample
fn zeroed_times(trimmed: &Table) -> Result<Vec<f64>, AnalysisError> {
    let times = trimmed.times()?;
    let t0 = times.first().copied().unwrap_or(0.0);
    Ok(times.iter().map(|t| t - t0).collect())
}

/// Every signal worth a series: everything except the two time columns
fn plottable_signals(table: &Table) -> Vec<String> {
    table
        .schema()
        .names()
        .iter()
        .filter(|name| name.as_str() != signal::TIME && name.as_str() != "milliseconds")
        .cloned()
        .collect()
}

/// Gear transitions inside the window, excluding the initial 0->1
/// engagement (every pull starts with one; it is not a shift)
pub fn gear_changes(
    table: &Table,
    window: Window,
    zeroed_times: &[f64],
) -> Result<Vec<GearChange>, AnalysisError> {
    let gears = table.column(signal::GEAR)?;

    let mut changes = Vec::new();
    for row in (window.start + 1)..=window.end {
        let from = gears[row - 1] as i64;
        let to = gears[row] as i64;
        if from != to && !(from == 0 && to == 1) {
            changes.push(GearChange {
                time: zeroed_times[row - window.start],
                from,
                to,
            });
        }
    }
    Ok(changes)
}

/// Show one pull's chart in a blocking native window
pub fn show(pull: &LoadedPull) -> anyhow::Result<()> {
    let app = PullApp::new(pull)?;
    let title = format!("PullView - {}", pull.name);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 900.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title(&title)
            .with_app_id("PullView"),
        ..Default::default()
    };

    eframe::run_native(&title, native_options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("chart window failed: {}", e))
}
