//! Chart rendering and data processing utilities.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints, VLine};

use crate::app::PullApp;
use crate::state::CHART_COLORS;

/// Fixed Y bounds for the normalized overlay
const Y_MIN: f64 = -0.05;
const Y_MAX: f64 = 1.05;

impl PullApp {
    /// Render the series selection panel. Engine RPM starts visible; every
    /// other signal is toggled on from here or from the plot legend.
    pub fn render_series_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading(&self.name);
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("None").clicked() {
                for series in &mut self.series {
                    series.visible = false;
                }
            }
            if ui.button("All").clicked() {
                for series in &mut self.series {
                    series.visible = true;
                }
            }
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for series in &mut self.series {
                let color = CHART_COLORS[series.color_index];
                ui.horizontal(|ui| {
                    ui.checkbox(&mut series.visible, "");
                    ui.colored_label(
                        egui::Color32::from_rgb(color[0], color[1], color[2]),
                        &series.name,
                    );
                });
            }
        });
    }

    /// Render the normalized overlay plot with gear-change markers
    pub fn render_chart(&mut self, ui: &mut egui::Ui) {
        let gear_changes = self.gear_changes.clone();

        let plot = Plot::new("pull_chart")
            .legend(Legend::default())
            .x_axis_label("seconds")
            .show_axes([true, false]) // Y is a normalized 0-1 overlay
            .allow_zoom([true, false])
            .allow_drag([true, false])
            .allow_scroll([true, false]);

        plot.show(ui, |plot_ui| {
            // Keep Y pinned to the normalized range, X free
            let bounds = plot_ui.plot_bounds();
            let new_bounds = PlotBounds::from_min_max(
                [bounds.min()[0], Y_MIN],
                [bounds.max()[0], Y_MAX],
            );
            plot_ui.set_plot_bounds(new_bounds);

            for series in self.series.iter().filter(|s| s.visible) {
                let color = CHART_COLORS[series.color_index];
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.line(
                    Line::new(series.name.clone(), points)
                        .color(egui::Color32::from_rgb(color[0], color[1], color[2]))
                        .width(1.5),
                );
            }

            for change in &gear_changes {
                plot_ui.vline(
                    VLine::new(change.label(), change.time)
                        .color(egui::Color32::from_rgb(253, 193, 73))
                        .width(1.0),
                );
            }
        });
    }
}

/// Normalize values to the 0-1 range for overlay display. A flat series is
/// pinned at 0.5.
pub fn normalize_points(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for point in points {
        min_y = min_y.min(point[1]);
        max_y = max_y.max(point[1]);
    }

    let range = max_y - min_y;
    if range.abs() < f64::EPSILON {
        return points.iter().map(|p| [p[0], 0.5]).collect();
    }

    points
        .iter()
        .map(|p| [p[0], (p[1] - min_y) / range])
        .collect()
}

/// Downsample with LTTB (Largest Triangle Three Buckets): keeps the visual
/// shape of the series while capping the point count.
pub fn downsample_lttb(times: &[f64], values: &[f64], target_points: usize) -> Vec<[f64; 2]> {
    let n = times.len();

    if n <= target_points || target_points < 3 {
        return times
            .iter()
            .zip(values.iter())
            .map(|(t, v)| [*t, *v])
            .collect();
    }

    let mut result = Vec::with_capacity(target_points);
    result.push([times[0], values[0]]);

    let bucket_size = (n - 2) as f64 / (target_points - 2) as f64;
    let mut a_index = 0usize;

    for i in 0..(target_points - 2) {
        let bucket_start = ((i as f64 + 1.0) * bucket_size).floor() as usize + 1;
        let bucket_end = ((((i + 2) as f64) * bucket_size).floor() as usize + 1).min(n - 1);

        // Average of the following bucket anchors the triangle
        let next_start = bucket_end;
        let next_end = ((((i + 3) as f64) * bucket_size).floor() as usize + 1).min(n);
        let (avg_x, avg_y) = if next_start < next_end {
            let count = (next_end - next_start) as f64;
            let sum_x: f64 = times[next_start..next_end].iter().sum();
            let sum_y: f64 = values[next_start..next_end].iter().sum();
            (sum_x / count, sum_y / count)
        } else {
            (times[n - 1], values[n - 1])
        };

        let a_x = times[a_index];
        let a_y = values[a_index];

        let mut max_area = -1.0f64;
        let mut max_index = bucket_start;
        for j in bucket_start..bucket_end {
            let area =
                ((a_x - avg_x) * (values[j] - a_y) - (a_x - times[j]) * (avg_y - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_index = j;
            }
        }

        result.push([times[max_index], values[max_index]]);
        a_index = max_index;
    }

    result.push([times[n - 1], values[n - 1]]);
    result
}
