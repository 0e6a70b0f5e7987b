//! # Warnings + Errors Tab
//!
//! Counters followed by every warning/error line in file order. The list uses
//! `egui_extras::TableBuilder` so only visible rows are laid out, which keeps
//! scrolling smooth on logs with thousands of diagnostics.

use eframe::egui;
use egui::Color32;

use super::summary_tab::value_box;
use crate::report::types::is_warning;
use crate::ui::AppState;

/// Render the diagnostics tab into the central panel.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    use egui_extras::{Column, TableBuilder};

    let counts = state.loaded.overview.diagnostics;
    ui.label("Total No. of Warnings:");
    value_box(ui, &counts.warnings.to_string());
    ui.label("Total No. of Errors:");
    value_box(ui, &counts.errors.to_string());
    ui.add_space(6.0);

    let lines = &state.loaded.report.diagnostics;
    if lines.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No warnings or errors found in this log.");
        });
        return;
    }

    let row_height = ui.text_style_height(&egui::TextStyle::Body) * 1.3;
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(true)
        .auto_shrink([false, false])
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(50.0).at_least(40.0)) // Index
        .column(Column::initial(70.0).at_least(60.0)) // Kind
        .column(Column::remainder()) // Line
        .header(row_height, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Kind");
            });
            header.col(|ui| {
                ui.strong("Line");
            });
        })
        .body(|body| {
            body.rows(row_height, lines.len(), |mut row| {
                let index = row.index();
                let line = &lines[index];
                let (kind, color) = if is_warning(line) { ("Warning", Color32::YELLOW) } else { ("Error", Color32::RED) };

                row.col(|ui| {
                    ui.label((index + 1).to_string());
                });
                row.col(|ui| {
                    ui.colored_label(color, kind);
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(egui::RichText::new(line.trim_end()).monospace()).truncate());
                });
            });
        });
}
