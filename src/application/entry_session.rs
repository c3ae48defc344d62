//! Line-driven, day-by-day entry editing
//!
//! Plain lines are appended to the day's text. Lines starting with `:` are
//! commands; `::` escapes a literal leading colon. Moving to another day saves
//! the pending text for the day being left first.

use crate::application::view_model::SelectionViewModel;
use crate::domain::time_ref::resolve_date;
use crate::domain::Journal;
use crate::error::{DaybookError, Result};
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  :next            save and go to the next day
  :prev            save and go to the previous day
  :date <ref>      save and jump to a day (e.g. 2024-01-01, yesterday, -3)
  :image <uri>     attach an image reference
  :show            print the pending text
  :clear           discard the pending text and images
  :save            save the pending text
  :delete          delete this day's entry
  :quit            save and leave
Any other line is added to the day's text.";

/// What the caller should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    Continue(Option<String>),
    Quit,
}

/// Editing state for one journal, moving between days
pub struct EntrySession<'a> {
    view_model: &'a SelectionViewModel,
    journal: Journal,
    content: String,
    image_uris: Vec<String>,
}

impl<'a> EntrySession<'a> {
    /// Start editing `journal` at `date`, loading what is stored for that day
    pub fn open(view_model: &'a SelectionViewModel, journal: Journal, date: NaiveDate) -> Result<Self> {
        view_model.select_journal_and_date(&journal.id, date);
        let mut session = EntrySession {
            view_model,
            journal,
            content: String::new(),
            image_uris: Vec::new(),
        };
        session.load()?;
        Ok(session)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn image_uris(&self) -> &[String] {
        &self.image_uris
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.view_model.selected_date()
    }

    /// Header shown when a day is entered, e.g. "== Travel · 01.01.2024 =="
    pub fn heading(&self) -> String {
        let date = self
            .date()
            .map(|d| d.format("%d.%m.%Y").to_string())
            .unwrap_or_default();
        format!("== {} · {} ==", self.journal.title, date)
    }

    /// Handle one input line
    pub fn handle(&mut self, line: &str) -> Result<SessionStep> {
        if let Some(literal) = line.strip_prefix("::") {
            self.push_line(&format!(":{}", literal));
            return Ok(SessionStep::Continue(None));
        }
        let Some(command) = line.strip_prefix(':') else {
            self.push_line(line);
            return Ok(SessionStep::Continue(None));
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command.trim(), ""),
        };

        let message = match name {
            "next" | "n" => {
                let moved = self.view_model.next_day(&self.content, &self.image_uris);
                self.after_move(moved)?
            }
            "prev" | "p" => {
                let moved = self
                    .view_model
                    .previous_day(&self.content, &self.image_uris);
                self.after_move(moved)?
            }
            "date" | "d" => {
                let base = self.date().unwrap_or_else(|| Local::now().date_naive());
                match resolve_date(arg, base) {
                    Ok(date) => {
                        self.view_model
                            .change_date(date, &self.content, &self.image_uris)?;
                        self.load()?;
                        self.day_view()
                    }
                    Err(DaybookError::InvalidTimeReference(r)) => {
                        format!("Invalid time reference: '{}'", r)
                    }
                    Err(e) => return Err(e),
                }
            }
            "image" | "i" if !arg.is_empty() => {
                self.image_uris.push(arg.to_string());
                format!("attached ({} images)", self.image_uris.len())
            }
            "show" => self.day_view(),
            "clear" => {
                self.content.clear();
                self.image_uris.clear();
                "cleared".to_string()
            }
            "save" | "w" => {
                self.view_model
                    .save_entry(&self.content, &self.image_uris)?;
                "saved".to_string()
            }
            "delete" => {
                self.view_model.delete_entry()?;
                self.content.clear();
                self.image_uris.clear();
                "deleted".to_string()
            }
            "quit" | "q" => {
                self.view_model
                    .save_entry(&self.content, &self.image_uris)?;
                return Ok(SessionStep::Quit);
            }
            "help" | "h" => HELP.to_string(),
            _ => format!("Unknown command ':{}' (try :help)", name),
        };
        Ok(SessionStep::Continue(Some(message)))
    }

    /// Feed lines from `input` until `:quit` or end of input, which also saves
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", self.day_view())?;
        for line in input.lines() {
            match self.handle(&line?)? {
                SessionStep::Continue(Some(message)) => writeln!(output, "{}", message)?,
                SessionStep::Continue(None) => {}
                SessionStep::Quit => return Ok(()),
            }
        }
        self.view_model
            .save_entry(&self.content, &self.image_uris)
    }

    /// Show the new day, or report a move past the calendar without leaving this day
    fn after_move(&mut self, moved: Result<()>) -> Result<String> {
        match moved {
            Ok(()) => {
                self.load()?;
                Ok(self.day_view())
            }
            Err(DaybookError::InvalidInput(msg)) => Ok(msg),
            Err(e) => Err(e),
        }
    }

    /// Replace the pending state with what is stored for the selected day
    fn load(&mut self) -> Result<()> {
        match self.view_model.current_entry_value()? {
            Some(entry) => {
                self.content = entry.content;
                self.image_uris = entry.image_uris;
            }
            None => {
                self.content.clear();
                self.image_uris.clear();
            }
        }
        Ok(())
    }

    fn push_line(&mut self, line: &str) {
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(line);
    }

    fn day_view(&self) -> String {
        let mut view = self.heading();
        if !self.content.is_empty() {
            view.push('\n');
            view.push_str(&self.content);
        }
        for uri in &self.image_uris {
            view.push_str(&format!("\n[image] {}", uri));
        }
        view
    }
}
