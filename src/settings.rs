//! Application settings and configuration

use crate::form::ValidationRules;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming the settings file
pub const SETTINGS_PATH_ENV: &str = "CONTACT_FORM_SETTINGS";

/// Settings file used when the environment variable is unset
pub const DEFAULT_SETTINGS_PATH: &str = "contact_form_settings.json";

/// Application settings
///
/// Settings are stored in JSON format and can be loaded/saved from disk.
/// Missing fields fall back to their defaults.
///
/// # Example
/// ```rust,no_run
/// use contact_form::settings::Settings;
///
/// let settings = Settings::load("contact_form_settings.json").expect("Failed to load");
/// println!("Header: {}", settings.title);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum number of characters for the first name
    pub first_name_min_len: usize,
    /// Header shown above the form
    pub title: String,
    /// Optional log file; logging is disabled when unset
    pub log_path: Option<String>,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
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

        let settings: Self = serde_json::from_str(&data)
            .map_err(|e| Error::Settings(format!("Failed to parse settings: {}", e)))?;

        Ok(settings)
    }

    /// Load settings from the path named by `CONTACT_FORM_SETTINGS`
    pub fn load_from_env() -> Result<Self> {
        let path = std::env::var(SETTINGS_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
        Self::load(path)
    }

    /// Save settings to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::Settings(format!("Failed to create settings directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Settings(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, json)
            .map_err(|e| Error::Settings(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Validation rules derived from these settings
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            first_name_min_len: self.first_name_min_len,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_name_min_len: ValidationRules::default().first_name_min_len,
            title: "Contact Form".to_string(),
            log_path: None,
        }
    }
}
