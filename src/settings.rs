//! Application settings and configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default location of the settings file
pub const DEFAULT_SETTINGS_PATH: &str = "./app_data/settings.json";

/// Application settings
///
/// Settings are stored in JSON format. Every field is optional in the file;
/// anything missing takes its default value.
///
/// # Example
/// ```rust,no_run
/// use roster::settings::Settings;
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = Settings::load("settings.json").expect("Failed to load");
///
/// settings.confirm_delete = false;
/// settings.save("settings.json").expect("Failed to save");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start with the five seed records
    pub seed_records: bool,
    /// Ask for confirmation before deleting a record
    pub confirm_delete: bool,
    /// Treat whitespace-only input as empty and trim stored values
    pub trim_input: bool,
    /// Log file path
    pub log_file: String,
    /// Default log filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist
    /// or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("Failed to read settings: {}", e)))?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&data)
            .map_err(|e| Error::Settings(format!("Failed to parse settings: {}", e)))
    }

    /// Save settings to a JSON file, creating the parent directory if needed
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Settings(format!("Failed to create settings directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(self)?;

        std::fs::write(path, json)
            .map_err(|e| Error::Settings(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_records: true,
            confirm_delete: true,
            trim_input: false,
            log_file: "./app_data/roster.log".to_string(),
            log_filter: "info".to_string(),
        }
    }
}
