//! Grid overview of a journal's entries

use crate::application::journals::JournalService;
use crate::application::view_model::SelectionViewModel;
use crate::domain::{Entry, Journal};
use crate::error::Result;
use crate::infrastructure::Config;
use chrono::NaiveDate;

/// Lines of content shown on a card
pub const CARD_LINES: usize = 5;
/// Characters per card line before it is cut
pub const CARD_WIDTH: usize = 32;

/// One tile of the overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewCard {
    pub date: NaiveDate,
    pub excerpt: Vec<String>,
    pub image_count: usize,
}

impl OverviewCard {
    pub fn from_entry(entry: &Entry) -> Self {
        let mut lines = entry.content.lines();
        let mut excerpt: Vec<String> = lines
            .by_ref()
            .take(CARD_LINES)
            .map(|line| truncate(line, CARD_WIDTH))
            .collect();

        if lines.next().is_some() {
            if let Some(last) = excerpt.last_mut() {
                if !last.ends_with('…') {
                    last.push('…');
                }
            }
        }

        OverviewCard {
            date: entry.date,
            excerpt,
            image_count: entry.image_uris.len(),
        }
    }

    /// Short card date, e.g. "5. Mar"
    pub fn label(&self) -> String {
        self.date.format("%-d. %b").to_string()
    }
}

fn truncate(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Cards for a journal's entries, newest first
pub fn overview(
    view_model: &SelectionViewModel,
    config: &Config,
    journal_ref: &str,
) -> Result<(Journal, Vec<OverviewCard>)> {
    let journal = JournalService::new(view_model, config).resolve(journal_ref)?;
    let cards = view_model
        .entries_for_journal(&journal.id)
        .get()?
        .iter()
        .map(OverviewCard::from_entry)
        .collect();
    Ok((journal, cards))
}
