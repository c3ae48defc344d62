//! Daybook directory discovery and store lifecycle

use crate::error::{DaybookError, Result};
use crate::infrastructure::config::{Config, DAYBOOK_DIR};
use crate::infrastructure::database::Database;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// A directory containing a `.daybook` folder with config and database
#[derive(Debug, Clone)]
pub struct DaybookHome {
    pub root: PathBuf,
}

impl DaybookHome {
    pub fn new(root: PathBuf) -> Self {
        DaybookHome { root }
    }

    /// Locate the daybook: DAYBOOK_ROOT first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_daybook_dir(&path) {
                return Ok(DaybookHome::new(path));
            }
            return Err(DaybookError::Config(format!(
                "DAYBOOK_ROOT is set to '{}' but no .daybook directory found. \
                Run 'daybook init' in that directory or unset DAYBOOK_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory with `.daybook` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_daybook_dir(dir))
            .map(|dir| DaybookHome::new(dir.to_path_buf()))
            .ok_or_else(|| DaybookError::NotDaybookDirectory(start.to_path_buf()))
    }

    fn has_daybook_dir(path: &Path) -> bool {
        path.join(DAYBOOK_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.daybook` directory itself
    pub fn daybook_dir(&self) -> PathBuf {
        self.root.join(DAYBOOK_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_daybook_dir(&self.root)
    }

    /// Create the `.daybook` directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        let daybook_dir = self.daybook_dir();
        if daybook_dir.exists() {
            return Err(DaybookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }
        fs::create_dir(&daybook_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    pub fn database_path(&self, config: &Config) -> PathBuf {
        self.daybook_dir().join(&config.database)
    }

    /// Open the store named by the config
    pub fn open_database(&self, config: &Config) -> Result<Arc<Database>> {
        let path = self.database_path(config);
        debug!(path = %path.display(), "opening daybook store");
        Ok(Arc::new(Database::open(path)?))
    }
}

/// Close a shared store once every other handle has been dropped
pub fn close_database(db: Arc<Database>) -> Result<()> {
    match Arc::try_unwrap(db) {
        Ok(db) => db.close(),
        Err(_) => Err(DaybookError::Store(
            "store still in use at shutdown".to_string(),
        )),
    }
}
