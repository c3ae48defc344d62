//! Journal management use cases

use crate::application::view_model::SelectionViewModel;
use crate::domain::{Journal, JournalColor};
use crate::error::{DaybookError, Result};
use crate::infrastructure::Config;

/// Create, find, edit and delete journals
pub struct JournalService<'a> {
    view_model: &'a SelectionViewModel,
    config: &'a Config,
}

impl<'a> JournalService<'a> {
    pub fn new(view_model: &'a SelectionViewModel, config: &'a Config) -> Self {
        JournalService { view_model, config }
    }

    /// Add a journal; without a color the configured default is used
    pub fn add(&self, title: &str, color: Option<&str>) -> Result<Journal> {
        let title = validate_title(title)?;
        let color = match color {
            Some(value) => value.parse()?,
            None => self.config.default_color()?,
        };
        self.view_model.add_journal(title, color)
    }

    pub fn list(&self) -> Result<Vec<Journal>> {
        Ok(self.view_model.journals().get()?.clone())
    }

    /// Find a journal by exact id, falling back to a case-insensitive title match
    pub fn resolve(&self, reference: &str) -> Result<Journal> {
        let journals = self.list()?;

        if let Some(journal) = journals.iter().find(|j| j.id == reference) {
            return Ok(journal.clone());
        }

        let mut matches: Vec<Journal> = journals
            .into_iter()
            .filter(|j| j.matches_title(reference))
            .collect();
        match matches.len() {
            0 => Err(DaybookError::JournalNotFound(reference.to_string())),
            1 => Ok(matches.remove(0)),
            n => Err(DaybookError::AmbiguousJournal(reference.to_string(), n)),
        }
    }

    /// Rename and/or recolor a journal
    pub fn edit(&self, reference: &str, title: Option<&str>, color: Option<&str>) -> Result<Journal> {
        let mut journal = self.resolve(reference)?;
        if let Some(title) = title {
            journal.title = validate_title(title)?.to_string();
        }
        if let Some(color) = color {
            journal.color = color.parse::<JournalColor>()?;
        }
        self.view_model.update_journal(&journal)?;
        Ok(journal)
    }

    /// Delete a journal with its entries; returns it with the number of entries removed
    pub fn delete(&self, reference: &str) -> Result<(Journal, usize)> {
        let journal = self.resolve(reference)?;
        let removed = self.view_model.delete_journal(&journal)?;
        Ok((journal, removed))
    }
}

fn validate_title(title: &str) -> Result<&str> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DaybookError::InvalidInput(
            "Journal title cannot be empty".to_string(),
        ));
    }
    Ok(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Database;
    use std::sync::Arc;

    fn fixture() -> (SelectionViewModel, Config) {
        let vm = SelectionViewModel::new(Arc::new(Database::in_memory().unwrap()));
        (vm, Config::new())
    }

    #[test]
    fn test_add_uses_default_color() {
        let (vm, config) = fixture();
        let service = JournalService::new(&vm, &config);
        let journal = service.add("  Travel ", None).unwrap();
        assert_eq!(journal.title, "Travel");
        assert_eq!(journal.color, JournalColor::default());
    }

    #[test]
    fn test_add_with_configured_default_color() {
        let (vm, mut config) = fixture();
        config.default_color = Some("rose".to_string());
        let service = JournalService::new(&vm, &config);
        let journal = service.add("Travel", None).unwrap();
        assert_eq!(journal.color.palette_name(), Some("rose"));
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let (vm, config) = fixture();
        let service = JournalService::new(&vm, &config);
        assert!(matches!(
            service.add("   ", None),
            Err(DaybookError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resolve_by_id_and_title() {
        let (vm, config) = fixture();
        let service = JournalService::new(&vm, &config);
        let journal = service.add("Dream Log", Some("sky")).unwrap();

        assert_eq!(service.resolve(&journal.id).unwrap(), journal);
        assert_eq!(service.resolve("dream log").unwrap(), journal);
        assert!(matches!(
            service.resolve("dreams"),
            Err(DaybookError::JournalNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_ambiguous_title() {
        let (vm, config) = fixture();
        let service = JournalService::new(&vm, &config);
        service.add("Work", None).unwrap();
        service.add("work", None).unwrap();
        assert!(matches!(
            service.resolve("WORK"),
            Err(DaybookError::AmbiguousJournal(_, 2))
        ));
    }

    #[test]
    fn test_edit_title_and_color() {
        let (vm, config) = fixture();
        let service = JournalService::new(&vm, &config);
        service.add("Work", None).unwrap();

        let edited = service.edit("work", Some("Office"), Some("#000000")).unwrap();
        assert_eq!(edited.title, "Office");
        assert_eq!(edited.color, JournalColor(0xFF000000));
        assert_eq!(service.list().unwrap(), vec![edited]);
    }
}
