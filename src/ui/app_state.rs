//! # Application State Management
//!
//! This module implements the central `AppState` struct which holds the
//! parsed report and the UI state. It implements the `eframe::App` trait to
//! integrate with the egui application framework.
//!
//! ## Responsibilities
//!
//! - Keeps the loaded report, the selected tab and the presentation config
//! - Reloads the report from another file picked via the native dialog
//! - Shows a modal alert when a reload fails, keeping the current report
//! - Persists user settings (last directory, last tab) across sessions

use eframe::egui;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ReportTab, diagnostics_tab, sections_tab, summary_tab, top_panel};
use crate::config::ReportConfig;
use crate::report::LoadedReport;

/// Central application state for the report window.
pub struct AppState {
    /// Optional alert message to display in a modal dialog.
    pub alert: Option<String>,
    /// Report currently on screen.
    pub loaded: LoadedReport,
    /// Currently selected tab.
    pub tab: ReportTab,
    /// Presentation settings (chart height, memory axis).
    pub config: ReportConfig,
    /// Last directory used by the log file picker.
    pub last_open_dir: Option<String>,
}

/// Settings persisted across application sessions.
#[derive(Default, Serialize, Deserialize)]
struct PersistedSettings {
    last_open_dir: Option<String>,
    tab: Option<ReportTab>,
}

const SETTINGS_KEY: &str = "app_settings";

impl AppState {
    /// Create a new AppState, loading persisted settings if available.
    ///
    /// # Parameters
    ///
    /// * `loaded` - Report parsed before the window opened
    /// * `config` - Presentation settings
    /// * `storage` - Optional persistent storage for loading saved settings
    pub fn new(loaded: LoadedReport, config: ReportConfig, storage: Option<&dyn eframe::Storage>) -> Self {
        let persisted: PersistedSettings = storage.and_then(|s| eframe::get_value(s, SETTINGS_KEY)).unwrap_or_default();
        let last_open_dir = persisted
            .last_open_dir
            .or_else(|| loaded.path.parent().map(|p| p.to_string_lossy().to_string()));

        Self {
            alert: None,
            loaded,
            tab: persisted.tab.unwrap_or_default(),
            config,
            last_open_dir,
        }
    }

    /// Open a native file picker and load the chosen log.
    ///
    /// Cancelling the picker leaves everything unchanged.
    pub fn open_log_picker(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("Log files", &["log", "txt"]).add_filter("All files", &["*"]);
        if let Some(dir) = &self.last_open_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(file) = dialog.pick_file() {
            if let Some(parent) = file.parent() {
                self.last_open_dir = Some(parent.to_string_lossy().to_string());
            }
            self.load(&file);
        }
    }

    /// Replace the report with the one parsed from `path`.
    ///
    /// On failure the current report stays on screen and an alert is raised.
    pub fn load(&mut self, path: &Path) {
        match LoadedReport::load(path) {
            Ok(loaded) => {
                log::info!("Loaded {}", path.display());
                self.loaded = loaded;
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                self.alert = Some(format!("Could not open {}:\n{}", path.display(), e));
            }
        }
    }
}

impl eframe::App for AppState {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            last_open_dir: self.last_open_dir.clone(),
            tab: Some(self.tab),
        };
        eframe::set_value(storage, SETTINGS_KEY, &settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(alert) = self.alert.clone() {
            egui::Window::new("Alert")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.label(alert);
                        ui.add_space(20.0);

                        if ui.button("OK").clicked() {
                            self.alert = None;
                        }
                        ui.add_space(10.0);
                    });
                });
        }

        top_panel::render(ctx, self);
        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            ReportTab::Summary => summary_tab::render(ui, self),
            ReportTab::Diagnostics => diagnostics_tab::render(ui, self),
            ReportTab::Sections => sections_tab::render(ui, self),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_log(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_new_defaults() {
        let file = write_log("peak 128MB\n");
        let state = AppState::new(LoadedReport::load(file.path()).unwrap(), ReportConfig::default(), None);
        assert_eq!(state.tab, ReportTab::Summary);
        assert!(state.alert.is_none());
        assert_eq!(state.last_open_dir, file.path().parent().map(|p| p.to_string_lossy().to_string()));
    }

    #[test]
    fn test_load_replaces_report() {
        let first = write_log("peak 128MB\n");
        let second = write_log("peak 256MB\nerror: out of samples\n");
        let mut state = AppState::new(LoadedReport::load(first.path()).unwrap(), ReportConfig::default(), None);
        state.load(second.path());
        assert!(state.alert.is_none());
        assert_eq!(state.loaded.overview.memory.max, 256);
        assert_eq!(state.loaded.overview.diagnostics.errors, 1);
    }

    #[test]
    fn test_failed_load_keeps_report_and_alerts() {
        let first = write_log("peak 128MB\n");
        let empty = write_log("Elapsed: 0:00:01.0\n");
        let mut state = AppState::new(LoadedReport::load(first.path()).unwrap(), ReportConfig::default(), None);
        state.load(empty.path());
        assert_eq!(state.loaded.path, first.path());
        assert!(state.alert.as_deref().unwrap().contains("no memory data found in log"));
    }
}
