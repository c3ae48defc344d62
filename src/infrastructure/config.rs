//! Configuration management

use crate::domain::JournalColor;
use crate::error::{DaybookError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding the config and database, relative to the daybook root
pub const DAYBOOK_DIR: &str = ".daybook";

const CONFIG_FILE: &str = "config.toml";

fn default_database() -> String {
    "daybook.db".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    /// Color for journals created without one; palette name or hex
    #[serde(default)]
    pub default_color: Option<String>,
    /// Database file name inside the .daybook directory
    #[serde(default = "default_database")]
    pub database: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            default_color: None,
            database: default_database(),
            created: Utc::now(),
        }
    }

    /// Load config from .daybook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DAYBOOK_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::NotDaybookDirectory(path.to_path_buf())
            } else {
                DaybookError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DaybookError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .daybook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let daybook_dir = path.join(DAYBOOK_DIR);
        if !daybook_dir.exists() {
            fs::create_dir(&daybook_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(daybook_dir.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Color for new journals when none is given
    pub fn default_color(&self) -> Result<JournalColor> {
        match &self.default_color {
            Some(value) => value.parse(),
            None => Ok(JournalColor::default()),
        }
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
