//! # Top Panel - File and Tab Selection
//!
//! This module renders the fixed top panel displaying:
//! - The name of the log file currently shown
//! - An "Open log…" button that replaces the report with another file
//! - The tab bar switching between Summary, Warnings + Errors and Subsections

use eframe::egui;

use crate::ui::{AppState, ReportTab};

/// Render the top panel.
///
/// # Parameters
///
/// * `ctx` - egui context
/// * `state` - Mutable application state for the selected tab and file loading
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("report_top").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("Log Report");
            ui.separator();
            let file_name = state
                .loaded
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| state.loaded.path.display().to_string());
            ui.label(egui::RichText::new(file_name).strong())
                .on_hover_text(state.loaded.path.display().to_string());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Open log…").clicked() {
                    state.open_log_picker();
                }
            });
        });
        ui.separator();
        ui.horizontal(|ui| {
            for tab in ReportTab::ALL {
                ui.selectable_value(&mut state.tab, tab, tab.title());
            }
        });
        ui.add_space(4.0);
    });
}
