//! Selection view-model behavior against an in-memory store

use chrono::{Local, NaiveDate};
use daybook::application::{Selection, SelectionViewModel};
use daybook::domain::{Entry, JournalColor};
use daybook::DaybookError;
use daybook::infrastructure::{Database, EntryDao, JournalDao};
use std::sync::Arc;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_year() -> NaiveDate {
    day(2024, 1, 1)
}

struct Fixture {
    vm: SelectionViewModel,
    entries: EntryDao,
    journals: JournalDao,
}

fn fixture() -> Fixture {
    let db = Arc::new(Database::in_memory().unwrap());
    Fixture {
        vm: SelectionViewModel::with_clock(db.clone(), new_year),
        entries: EntryDao::new(db.clone()),
        journals: JournalDao::new(db),
    }
}

#[test]
fn test_select_journal_uses_local_today_by_default() {
    let vm = SelectionViewModel::new(Arc::new(Database::in_memory().unwrap()));
    let before = Local::now().date_naive();
    vm.select_journal("journal_1");
    let after = Local::now().date_naive();

    let date = vm.selected_date().unwrap();
    assert!(date == before || date == after);
}

#[test]
fn test_save_inserts_new_entry() {
    let f = fixture();
    f.vm.select_journal("journal_1");
    f.vm.save_entry("New Content", &[]).unwrap();

    let all = f.entries.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].content, "New Content");
    assert_eq!(all[0].journal_id, "journal_1");
    assert_eq!(all[0].date, new_year());
    assert_eq!(all[0].title, "");
}

#[test]
fn test_save_updates_existing_entry_in_place() {
    let f = fixture();
    let existing = Entry::new("journal_1", new_year(), "Old", vec![]);
    f.entries.insert(&existing).unwrap();

    f.vm.select_journal("journal_1");
    f.vm.save_entry("Updated Content", &[]).unwrap();

    let all = f.entries.all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, existing.id);
    assert_eq!(all[0].content, "Updated Content");
}

#[test]
fn test_blank_save_writes_nothing() {
    let f = fixture();
    f.vm.select_journal("journal_1");
    f.vm.save_entry("   \n", &[]).unwrap();
    assert!(f.entries.all().unwrap().is_empty());
}

#[test]
fn test_blank_save_keeps_existing_content() {
    let f = fixture();
    f.vm.select_journal("journal_1");
    f.vm.save_entry("Keep me", &[]).unwrap();
    f.vm.save_entry("", &[]).unwrap();

    assert_eq!(
        f.vm.current_entry_value().unwrap().unwrap().content,
        "Keep me"
    );
}

#[test]
fn test_images_alone_are_saved() {
    let f = fixture();
    f.vm.select_journal("journal_1");
    let images = vec!["content://media/1".to_string()];
    f.vm.save_entry("", &images).unwrap();

    let entry = f.vm.current_entry_value().unwrap().unwrap();
    assert_eq!(entry.content, "");
    assert_eq!(entry.image_uris, images);
}

#[test]
fn test_next_day_saves_day_being_left() {
    let f = fixture();
    f.vm.select_journal("journal_1");
    f.vm.next_day("Today's Content", &[]).unwrap();

    assert_eq!(f.vm.selected_date(), Some(day(2024, 1, 2)));
    let saved = f
        .entries
        .get_by_date("journal_1", new_year())
        .unwrap()
        .unwrap();
    assert_eq!(saved.content, "Today's Content");
    assert_eq!(f.entries.get_by_date("journal_1", day(2024, 1, 2)).unwrap(), None);
}

#[test]
fn test_previous_day_saves_day_being_left() {
    let f = fixture();
    f.vm.select_journal_and_date("journal_1", day(2024, 3, 1));
    f.vm.previous_day("March", &[]).unwrap();

    assert_eq!(f.vm.selected_date(), Some(day(2024, 2, 29)));
    assert!(f
        .entries
        .get_by_date("journal_1", day(2024, 3, 1))
        .unwrap()
        .is_some());
}

#[test]
fn test_next_then_previous_restores_day() {
    let f = fixture();
    f.vm.select_journal_and_date("j1", new_year());
    f.vm.next_day("Hello", &[]).unwrap();
    f.vm.previous_day("", &[]).unwrap();

    assert_eq!(f.vm.selected_date(), Some(new_year()));
    let entry = f.vm.current_entry_value().unwrap().unwrap();
    assert_eq!(entry.content, "Hello");
    assert_eq!(entry.date, new_year());
    assert_eq!(f.entries.all().unwrap().len(), 1);
}

#[test]
fn test_next_day_at_end_of_calendar_keeps_date() {
    let f = fixture();
    f.vm.select_journal_and_date("j1", NaiveDate::MAX);

    let result = f.vm.next_day("", &[]);
    assert!(matches!(result, Err(DaybookError::InvalidInput(_))));
    assert_eq!(f.vm.selected_date(), Some(NaiveDate::MAX));
}

#[test]
fn test_previous_day_at_start_of_calendar_keeps_date() {
    let f = fixture();
    f.vm.select_journal_and_date("j1", NaiveDate::MIN);

    assert!(f.vm.previous_day("", &[]).is_err());
    assert_eq!(f.vm.selected_date(), Some(NaiveDate::MIN));
}

#[test]
fn test_change_date_saves_previous_date() {
    let f = fixture();
    f.vm.select_journal("j1");
    f.vm
        .change_date(day(2024, 2, 14), "Before jump", &["img".to_string()])
        .unwrap();

    assert_eq!(f.vm.selected_date(), Some(day(2024, 2, 14)));
    let saved = f.entries.get_by_date("j1", new_year()).unwrap().unwrap();
    assert_eq!(saved.content, "Before jump");
    assert_eq!(saved.image_uris, vec!["img"]);
}

#[test]
fn test_delete_entry_when_present_and_absent() {
    let f = fixture();
    f.vm.select_journal("j1");
    f.vm.delete_entry().unwrap();

    f.vm.save_entry("X", &[]).unwrap();
    f.vm.delete_entry().unwrap();
    assert!(f.entries.all().unwrap().is_empty());
}

#[test]
fn test_journal_pass_through_writes() {
    let f = fixture();
    let mut journal = f.vm.add_journal("New", JournalColor(123)).unwrap();
    assert_eq!(f.journals.get_by_id(&journal.id).unwrap(), Some(journal.clone()));

    journal.title = "Renamed".to_string();
    f.vm.update_journal(&journal).unwrap();
    assert_eq!(
        f.journals.get_by_id(&journal.id).unwrap().unwrap().title,
        "Renamed"
    );
}

#[test]
fn test_delete_journal_with_entries_succeeds_and_cascades() {
    let f = fixture();
    let journal = f.vm.add_journal("Travel", JournalColor::default()).unwrap();
    let other = f.vm.add_journal("Work", JournalColor::default()).unwrap();

    f.vm.select_journal(&journal.id);
    f.vm.save_entry("Lisbon", &[]).unwrap();
    f.vm.select_journal(&other.id);
    f.vm.save_entry("Meeting", &[]).unwrap();

    assert_eq!(f.vm.delete_journal(&journal).unwrap(), 1);
    assert_eq!(f.journals.get_by_id(&journal.id).unwrap(), None);

    let remaining = f.entries.all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].journal_id, other.id);
}

#[test]
fn test_live_journals_follow_writes() {
    let f = fixture();
    let mut journals = f.vm.journals();
    assert!(journals.get().unwrap().is_empty());

    let journal = f.vm.add_journal("Travel", JournalColor::default()).unwrap();
    assert_eq!(*journals.get().unwrap(), vec![journal.clone()]);

    f.vm.delete_journal(&journal).unwrap();
    assert!(journals.get().unwrap().is_empty());
}

#[test]
fn test_live_entries_for_journal() {
    let f = fixture();
    let mut entries = f.vm.entries_for_journal("j1");
    assert!(entries.get().unwrap().is_empty());

    f.vm.select_journal_and_date("j1", day(2024, 1, 1));
    f.vm.save_entry("a", &[]).unwrap();
    f.vm.select_journal_and_date("j1", day(2024, 1, 2));
    f.vm.save_entry("b", &[]).unwrap();

    let contents: Vec<&str> = entries
        .get()
        .unwrap()
        .iter()
        .map(|e| e.content.as_str())
        .collect();
    assert_eq!(contents, vec!["b", "a"]);
}

#[test]
fn test_current_entry_follows_selection() {
    let f = fixture();
    let entry = Entry::new("journal_1", new_year(), "Hello", vec![]);
    f.entries.insert(&entry).unwrap();

    let mut current = f.vm.current_entry();
    assert_eq!(*current.get().unwrap(), None);

    f.vm.select_journal("journal_1");
    assert_eq!(*current.get().unwrap(), Some(entry));

    f.vm.select_journal_and_date("journal_1", day(2024, 1, 2));
    assert_eq!(*current.get().unwrap(), None);
}

#[test]
fn test_current_entry_follows_table_changes() {
    let f = fixture();
    f.vm.select_journal("j1");
    let mut current = f.vm.current_entry();
    assert_eq!(*current.get().unwrap(), None);

    f.vm.save_entry("Draft", &[]).unwrap();
    let id = current.get().unwrap().as_ref().unwrap().id.clone();

    f.vm.save_entry("Final", &[]).unwrap();
    let latest = current.get().unwrap().as_ref().unwrap();
    assert_eq!(latest.id, id);
    assert_eq!(latest.content, "Final");
}

#[test]
fn test_selection_updates_are_observable() {
    let f = fixture();
    let mut selection = f.vm.subscribe_selection();
    f.vm.select_journal("j1");

    assert!(selection.has_changed().unwrap());
    assert_eq!(
        *selection.borrow_and_update(),
        Selection {
            journal_id: Some("j1".to_string()),
            date: Some(new_year()),
        }
    );
}

#[tokio::test]
async fn test_current_entry_changed_on_selection() {
    let f = fixture();
    let entry = Entry::new("journal_1", new_year(), "Hello", vec![]);
    f.entries.insert(&entry).unwrap();

    let mut current = f.vm.current_entry();
    assert_eq!(*current.get().unwrap(), None);

    f.vm.select_journal("journal_1");
    assert_eq!(*current.changed().await.unwrap(), Some(entry));
}

#[tokio::test]
async fn test_current_entry_changed_on_write() {
    let f = fixture();
    f.vm.select_journal("journal_1");
    let mut current = f.vm.current_entry();
    assert_eq!(*current.get().unwrap(), None);

    f.vm.save_entry("Hello", &[]).unwrap();
    let entry = current.changed().await.unwrap().clone().unwrap();
    assert_eq!(entry.content, "Hello");

    f.vm.delete_entry().unwrap();
    assert_eq!(*current.changed().await.unwrap(), None);
}
