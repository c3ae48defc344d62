//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, JournalAction};
pub use output::{format_dates, format_entry, format_journal_list, format_overview};
