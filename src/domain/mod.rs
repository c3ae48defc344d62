//! Domain layer - Journals, entries and the values they carry

pub mod color;
pub mod entry;
pub mod image_list;
pub mod journal;
pub mod time_ref;

pub use color::JournalColor;
pub use entry::Entry;
pub use journal::Journal;
pub use time_ref::TimeReference;
