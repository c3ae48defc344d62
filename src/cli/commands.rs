//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "Color-tagged journals with one entry per day", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new daybook
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Manage journals
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Write text (and images) into a day's entry
    Write {
        /// Journal title or id
        journal: String,

        /// Text to save; words are joined with spaces
        #[arg(required = true)]
        content: Vec<String>,

        /// Day to write (e.g. today, yesterday, 2025-01-17)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Attach an image reference (repeatable)
        #[arg(short, long = "image", value_name = "URI")]
        images: Vec<String>,

        /// Add to the existing text instead of replacing it
        #[arg(short, long)]
        append: bool,
    },

    /// Print a day's entry
    Show {
        /// Journal title or id
        journal: String,

        /// Day to show
        #[arg(default_value = "today")]
        date: String,
    },

    /// Edit a day's entry in the external editor
    Edit {
        /// Journal title or id
        journal: String,

        /// Day to edit
        #[arg(default_value = "today")]
        date: String,
    },

    /// Write day by day, reading lines from standard input
    Browse {
        /// Journal title or id
        journal: String,

        /// Day to start on
        #[arg(default_value = "today")]
        date: String,
    },

    /// Delete a day's entry
    Remove {
        /// Journal title or id
        journal: String,

        /// Day to delete
        #[arg(default_value = "today")]
        date: String,
    },

    /// Show a journal's entries as cards, newest first
    Overview {
        /// Journal title or id
        journal: String,
    },

    /// List the days that have entries
    Dates {
        /// Journal title or id
        journal: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum JournalAction {
    /// Create a journal
    Add {
        title: String,

        /// Palette name or #RRGGBB / #AARRGGBB
        #[arg(short, long)]
        color: Option<String>,
    },

    /// List journals
    List,

    /// Rename or recolor a journal
    Edit {
        /// Journal title or id
        journal: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete a journal and all its entries
    Delete {
        /// Journal title or id
        journal: String,
    },
}
