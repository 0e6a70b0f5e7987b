// UI module for the render log report window
//
// This module organizes the UI into separate components:
// - `top_panel`: File name, open button and tab selector
// - `summary_tab`: Elapsed time, memory range and memory-over-time chart
// - `diagnostics_tab`: Warning/error counters and the list of lines
// - `sections_tab`: Scrollable subsection blocks
// - `chart`: Painter-drawn line chart used by the summary tab
// - `app_state`: Application state management and main update loop

pub mod app_state;
pub mod chart;
pub mod diagnostics_tab;
pub mod sections_tab;
pub mod summary_tab;
pub mod top_panel;

use anyhow::anyhow;
use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::report::LoadedReport;

pub use app_state::AppState;

/// Window title, also used as the eframe app id for persisted settings.
pub const WINDOW_TITLE: &str = "Log Report";

/// Smallest window the three tabs are laid out for.
pub const MIN_WINDOW_SIZE: [f32; 2] = [800.0, 480.0];

/// Tabs of the report window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportTab {
    #[default]
    Summary,
    Diagnostics,
    Sections,
}

impl ReportTab {
    pub const ALL: [ReportTab; 3] = [ReportTab::Summary, ReportTab::Diagnostics, ReportTab::Sections];

    pub fn title(self) -> &'static str {
        match self {
            ReportTab::Summary => "Summary",
            ReportTab::Diagnostics => "Warnings + Errors",
            ReportTab::Sections => "Subsections",
        }
    }
}

/// Build every platform windowing option in one place, before eframe starts.
pub fn native_options(config: &ReportConfig) -> eframe::NativeOptions {
    let size = [config.window_width.max(MIN_WINDOW_SIZE[0]), config.window_height.max(MIN_WINDOW_SIZE[1])];
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(size)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    }
}

/// Open the report window and block until it is closed.
pub fn run(loaded: LoadedReport, config: ReportConfig) -> anyhow::Result<()> {
    let options = native_options(&config);
    eframe::run_native(WINDOW_TITLE, options, Box::new(move |cc| Ok(Box::new(AppState::new(loaded, config, cc.storage)))))
        .map_err(|e| anyhow!("failed to open the report window: {e}"))
}
