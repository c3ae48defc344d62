//! Application layer - Use cases and orchestration

pub mod context;
pub mod edit_entry;
pub mod entries;
pub mod entry_session;
pub mod init;
pub mod journals;
pub mod manage_config;
pub mod overview;
pub mod view_model;

pub use context::AppContext;
pub use entries::{EntryService, WriteMode};
pub use entry_session::{EntrySession, SessionStep};
pub use journals::JournalService;
pub use manage_config::ConfigService;
pub use overview::OverviewCard;
pub use view_model::{CurrentEntry, Selection, SelectionViewModel};
