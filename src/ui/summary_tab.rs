//! # Summary Tab
//!
//! Total render time, memory extremes and the memory-over-time chart.

use eframe::egui;

use super::chart;
use crate::ui::AppState;

/// Render the summary tab into the central panel.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let overview = &state.loaded.overview;
    let elapsed = if overview.elapsed_time.is_empty() { "-" } else { overview.elapsed_time.as_str() };

    ui.label("Total Render Time:");
    value_box(ui, elapsed);
    ui.label("Maximum Memory Used:");
    value_box(ui, &format!("{}MB", overview.memory.max));
    ui.label("Minimum Memory Used:");
    value_box(ui, &format!("{}MB", overview.memory.min));
    ui.add_space(6.0);
    ui.label("Memory Over Time:");
    chart::render(ui, &state.loaded.report.summary.memory_samples, state.config.memory_axis, state.config.chart_height);
}

/// Read-only value in a sunken frame spanning the panel width.
pub fn value_box(ui: &mut egui::Ui, text: &str) {
    egui::Frame::group(ui.style()).fill(ui.visuals().extreme_bg_color).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(egui::RichText::new(text).monospace().strong());
    });
}
