//! Infrastructure layer - Storage, configuration and external I/O

pub mod config;
pub mod database;
pub mod editor;
pub mod entry_dao;
pub mod home;
pub mod journal_dao;
pub mod live;
pub mod logging;

pub use config::Config;
pub use database::{Database, Table};
pub use editor::EditorSession;
pub use entry_dao::EntryDao;
pub use home::{close_database, DaybookHome};
pub use journal_dao::JournalDao;
pub use live::LiveQuery;
