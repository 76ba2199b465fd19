// Keydyn Settings Module
// User-configurable report toggles for the replay CLI

use std::path::{Path, PathBuf};

/// Settings controlling what the replay CLI reports.
///
/// Loaded from a TOML file (default: ~/.config/keydyn/settings.toml):
///
///   [report]
///   flight_times = true
///   dwell_times = true
///   pretty_json = false
#[derive(Debug, Clone)]
pub struct Settings {
    report_flight: bool,
    report_dwell: bool,
    pretty_json: bool,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    report: Option<ReportSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct ReportSettings {
    #[serde(default)]
    flight_times: Option<bool>,

    #[serde(default)]
    dwell_times: Option<bool>,

    #[serde(default)]
    pretty_json: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report_flight: true,
            report_dwell: true,
            pretty_json: false,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Load settings from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::default();
        if let Some(report) = toml_settings.report {
            if let Some(flight) = report.flight_times {
                settings.report_flight = flight;
            }
            if let Some(dwell) = report.dwell_times {
                settings.report_dwell = dwell;
            }
            if let Some(pretty) = report.pretty_json {
                settings.pretty_json = pretty;
            }
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keydyn").join("settings.toml"))
    }

    /// Load from the default location, falling back to defaults if the
    /// file does not exist
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::default())
    }

    /// Whether the CLI should report flight times
    pub fn report_flight(&self) -> bool {
        self.report_flight
    }

    /// Whether the CLI should report dwell times
    pub fn report_dwell(&self) -> bool {
        self.report_dwell
    }

    /// Whether JSON output should be pretty-printed
    pub fn pretty_json(&self) -> bool {
        self.pretty_json
    }
}
