//! Write a day's entry in the external editor

use crate::application::context::AppContext;
use crate::application::journals::JournalService;
use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::EditorSession;
use chrono::NaiveDate;
use std::fs;
use tracing::warn;

const DRAFT_FILE: &str = "DRAFT.md";

/// Open the entry for a journal's day in the editor and save what comes back.
///
/// Images stay attached. Returns the stored entry, or `None` if the day is still empty.
pub fn edit_entry(ctx: &AppContext, journal_ref: &str, date: NaiveDate) -> Result<Option<Entry>> {
    let journal = JournalService::new(&ctx.view_model, &ctx.config).resolve(journal_ref)?;
    ctx.view_model.select_journal_and_date(&journal.id, date);

    let current = ctx
        .view_model
        .current_entry_value()?
        .map(|entry| entry.content)
        .unwrap_or_default();

    let draft = ctx.home.daybook_dir().join(DRAFT_FILE);
    fs::write(&draft, &current)?;

    let editor = EditorSession::new(ctx.config.get_editor());
    let edited = editor.edit(&draft).and_then(|_| Ok(fs::read_to_string(&draft)?));
    if let Err(e) = fs::remove_file(&draft) {
        warn!(path = %draft.display(), error = %e, "removing draft failed");
    }

    if let Some(content) = changed_content(&current, &edited?) {
        ctx.view_model.save_content(content)?;
    }
    ctx.view_model.current_entry_value()
}

/// The edited text without trailing whitespace, or `None` if only trailing whitespace changed
fn changed_content<'a>(current: &str, edited: &'a str) -> Option<&'a str> {
    let edited = edited.trim_end();
    (edited != current.trim_end()).then_some(edited)
}
