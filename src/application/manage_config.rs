//! Config management use case

use crate::domain::JournalColor;
use crate::error::{DaybookError, Result};
use crate::infrastructure::{Config, DaybookHome};

const KEYS: &str = "editor, default_color, database, created";

/// Service for reading and changing daybook configuration
pub struct ConfigService {
    home: DaybookHome,
}

impl ConfigService {
    pub fn new(home: DaybookHome) -> Self {
        ConfigService { home }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.home.load_config()?;

        match key {
            "editor" => Ok(config.editor),
            "default_color" => Ok(config.default_color()?.to_string()),
            "database" => Ok(config.database),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DaybookError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.home.load_config()?;

        match key {
            "editor" => config.editor = value.to_string(),
            "default_color" => {
                // Validate before storing
                value.parse::<JournalColor>()?;
                config.default_color = Some(value.trim().to_string());
            }
            "database" | "created" => {
                return Err(DaybookError::Config(format!(
                    "Cannot modify '{}' field (read-only)",
                    key
                )));
            }
            _ => {
                return Err(DaybookError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor, default_color",
                    key
                )));
            }
        }

        self.home.save_config(&config)
    }

    /// All config values
    pub fn list(&self) -> Result<Config> {
        self.home.load_config()
    }
}
