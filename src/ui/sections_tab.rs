//! # Subsections Tab
//!
//! Every section as a title label followed by its body in a sunken frame,
//! all inside one vertical scroll area.

use eframe::egui;

use crate::ui::AppState;

/// Render the subsections tab into the central panel.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let sections = &state.loaded.report.sections;
    if sections.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No subsections found in this log.");
        });
        return;
    }

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for section in sections {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(section.title.trim_end()).strong());
                if ui.small_button("Copy").on_hover_text("Copy the section body").clicked() {
                    ui.ctx().copy_text(section.display_text());
                }
            });
            egui::Frame::group(ui.style()).fill(ui.visuals().extreme_bg_color).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                for line in &section.lines {
                    ui.label(egui::RichText::new(line).monospace());
                }
            });
            ui.add_space(8.0);
        }
    });
}
