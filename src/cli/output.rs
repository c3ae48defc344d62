//! Output formatting utilities

use crate::application::OverviewCard;
use crate::domain::{Entry, Journal};
use chrono::NaiveDate;

/// Format journals one per line: color, title, id
pub fn format_journal_list(journals: &[Journal]) -> String {
    if journals.is_empty() {
        return "No journals found".to_string();
    }

    let mut output = String::new();
    for journal in journals {
        let color = match journal.color.palette_name() {
            Some(name) => format!("{} ({})", journal.color, name),
            None => journal.color.to_string(),
        };
        output.push_str(&format!("{}  {}  [{}]\n", color, journal.title, journal.id));
    }
    output
}

/// Format a single entry with its date heading and images
pub fn format_entry(journal: &Journal, entry: &Entry) -> String {
    let mut output = format!(
        "# {} · {}\n\n{}\n",
        journal.title,
        entry.date.format("%A, %d.%m.%Y"),
        entry.content
    );
    if !entry.image_uris.is_empty() {
        output.push('\n');
        for uri in &entry.image_uris {
            output.push_str(&format!("[image] {}\n", uri));
        }
    }
    output
}

/// Format overview cards as blocks separated by blank lines
pub fn format_overview(cards: &[OverviewCard]) -> String {
    if cards.is_empty() {
        return "No entries found".to_string();
    }

    cards
        .iter()
        .map(|card| {
            let mut block = format!("┌ {}", card.label());
            if card.image_count > 0 {
                block.push_str(&format!("  ({} images)", card.image_count));
            }
            for line in &card.excerpt {
                block.push_str(&format!("\n│ {}", line));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
        + "\n"
}

/// Format entry dates, newest first
pub fn format_dates(dates: &[NaiveDate]) -> String {
    if dates.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for date in dates.iter().rev() {
        output.push_str(&format!("{}\n", date.format("%Y-%m-%d")));
    }
    output
}
