//! Configuration loading for the report window.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "log-report.toml";

/// Scale used for the memory axis of the summary chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryAxis {
    #[default]
    Log,
    Linear,
}

/// Presentation settings for the report window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Initial window width in points
    pub window_width: f32,
    /// Initial window height in points
    pub window_height: f32,
    /// Height of the memory-over-time chart in points
    pub chart_height: f32,
    pub memory_axis: MemoryAxis,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            window_width: 900.0,
            window_height: 640.0,
            chart_height: 300.0,
            memory_axis: MemoryAxis::Log,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the TOML file
    ///
    /// # Returns
    /// * `Ok(ReportConfig)` if the file was successfully loaded and parsed
    /// * `Err(String)` with a descriptive error message otherwise
    pub fn load(config_path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(config_path).map_err(|e| format!("Failed to read config file {}: {}", config_path.display(), e))?;

        Self::from_toml(&content).map_err(|e| format!("Failed to parse config file {}: {}", config_path.display(), e))
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve the configuration for this run.
    ///
    /// An explicit path must load. Otherwise `log-report.toml` in `working_dir`
    /// is used when present, and defaults when it is not.
    pub fn resolve(explicit: Option<&Path>, working_dir: &Path) -> Result<Self, String> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = working_dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            log::info!("Using config file {}", candidate.display());
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = ReportConfig::from_toml("chart-height = 420.0\nmemory-axis = \"linear\"\n").unwrap();
        assert_eq!(config.chart_height, 420.0);
        assert_eq!(config.memory_axis, MemoryAxis::Linear);
        assert_eq!(config.window_width, ReportConfig::default().window_width);
    }

    #[test]
    fn test_unknown_axis_rejected() {
        assert!(ReportConfig::from_toml("memory-axis = \"cubic\"\n").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(ReportConfig::from_toml("window-depth = 3.0\n").is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ReportConfig::resolve(None, dir.path()).unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_resolve_picks_up_working_dir_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "window-width = 1200.0\n").unwrap();
        let config = ReportConfig::resolve(None, dir.path()).unwrap();
        assert_eq!(config.window_width, 1200.0);
    }

    #[test]
    fn test_resolve_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("custom.toml");
        let err = ReportConfig::resolve(Some(&missing), dir.path()).unwrap_err();
        assert!(err.starts_with("Failed to read config file"));
    }
}
