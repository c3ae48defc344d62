//! daybook - color-tagged journals with one entry per day
//!
//! Journals and their daily entries live in a local SQLite store. The
//! [`application::SelectionViewModel`] tracks the selected journal and day and
//! keeps the entry for that selection observable; the CLI drives it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaybookError;
