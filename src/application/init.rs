//! Initialize daybook use case

use crate::error::Result;
use crate::infrastructure::{close_database, Config, DaybookHome};
use std::fs;
use std::path::Path;
use tracing::info;

/// Create a daybook at `path`: the `.daybook` directory, its config and an empty store
pub fn init(path: &Path) -> Result<DaybookHome> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let home = DaybookHome::new(path.to_path_buf());
    home.initialize()?;

    let config = Config::new();
    home.save_config(&config)?;

    close_database(home.open_database(&config)?)?;
    info!(root = %path.display(), "daybook initialized");

    Ok(home)
}
