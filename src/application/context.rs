//! Everything a command needs: the daybook, its config and an open store

use crate::application::view_model::SelectionViewModel;
use crate::error::Result;
use crate::infrastructure::{close_database, Config, Database, DaybookHome};
use std::sync::Arc;

pub struct AppContext {
    pub home: DaybookHome,
    pub config: Config,
    pub view_model: SelectionViewModel,
    db: Arc<Database>,
}

impl AppContext {
    /// Load config and open the store of an initialized daybook
    pub fn open(home: DaybookHome) -> Result<Self> {
        let config = home.load_config()?;
        let db = home.open_database(&config)?;
        Ok(AppContext {
            view_model: SelectionViewModel::new(db.clone()),
            home,
            config,
            db,
        })
    }

    /// Release the view-model and close the store
    pub fn close(self) -> Result<()> {
        let AppContext { view_model, db, .. } = self;
        drop(view_model);
        close_database(db)
    }
}
