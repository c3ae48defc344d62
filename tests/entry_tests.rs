//! Integration tests for entry commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{add_journal, daybook_in, init_daybook};

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_daybook(temp.path());
    add_journal(temp.path(), "Travel");
    temp
}

#[test]
fn test_write_and_show() {
    let temp = setup();

    daybook_in(temp.path())
        .args(["write", "Travel", "--date", "2024-01-01", "Arrived", "in", "Lisbon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry for 2024-01-01"));

    daybook_in(temp.path())
        .args(["show", "travel", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Travel · Monday, 01.01.2024"))
        .stdout(predicate::str::contains("Arrived in Lisbon"));
}

#[test]
fn test_write_replaces_and_appends() {
    let temp = setup();
    let write = |args: &[&str]| {
        daybook_in(temp.path())
            .args(["write", "Travel", "-d", "2024-01-01"])
            .args(args)
            .assert()
            .success();
    };

    write(&["First"]);
    write(&["Second"]);
    write(&["--append", "Third"]);

    daybook_in(temp.path())
        .args(["show", "Travel", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second\nThird"))
        .stdout(predicate::str::contains("First").not());
}

#[test]
fn test_write_images_are_kept() {
    let temp = setup();

    daybook_in(temp.path())
        .args(["write", "Travel", "-d", "2024-01-01", "-i", "content://media/7", "Beach"])
        .assert()
        .success();
    daybook_in(temp.path())
        .args(["write", "Travel", "-d", "2024-01-01", "Beach at dusk"])
        .assert()
        .success();

    daybook_in(temp.path())
        .args(["show", "Travel", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beach at dusk"))
        .stdout(predicate::str::contains("[image] content://media/7"));
}

#[test]
fn test_write_blank_saves_nothing() {
    let temp = setup();

    daybook_in(temp.path())
        .args(["write", "Travel", "  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to save"));

    daybook_in(temp.path())
        .args(["dates", "Travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_show_missing_entry_exit_code() {
    let temp = setup();

    daybook_in(temp.path())
        .args(["show", "Travel", "2024-01-01"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("No entry for 'Travel' on 2024-01-01"));
}

#[test]
fn test_invalid_date_exit_code() {
    let temp = setup();

    daybook_in(temp.path())
        .args(["show", "Travel", "someday"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid time reference: 'someday'"));
}

#[test]
fn test_out_of_range_offset_exit_code() {
    let temp = setup();

    daybook_in(temp.path())
        .args(["write", "Travel", "--date", "+100000000", "Far away"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid time reference: '+100000000'"));
}

#[test]
fn test_browse_out_of_range_jump_keeps_text() {
    let temp = setup();

    daybook_in(temp.path())
        .args(["browse", "Travel", "2024-01-01"])
        .write_stdin("Stay here\n:date +100000000\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid time reference: '+100000000'"));

    daybook_in(temp.path())
        .args(["show", "Travel", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stay here"));
}

#[test]
fn test_remove_entry() {
    let temp = setup();
    daybook_in(temp.path())
        .args(["write", "Travel", "-d", "2024-01-01", "Gone soon"])
        .assert()
        .success();

    daybook_in(temp.path())
        .args(["remove", "Travel", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry for 2024-01-01"));

    daybook_in(temp.path())
        .args(["remove", "Travel", "2024-01-01"])
        .assert()
        .code(5);
}

#[test]
fn test_dates_newest_first() {
    let temp = setup();
    for (date, text) in [("2024-01-03", "c"), ("2024-01-01", "a"), ("2024-01-02", "b")] {
        daybook_in(temp.path())
            .args(["write", "Travel", "-d", date, text])
            .assert()
            .success();
    }

    daybook_in(temp.path())
        .args(["dates", "Travel"])
        .assert()
        .success()
        .stdout("2024-01-03\n2024-01-02\n2024-01-01\n");
}

#[test]
fn test_overview_cards() {
    let temp = setup();
    daybook_in(temp.path())
        .args(["write", "Travel", "-d", "2024-03-05", "-i", "p1", "-i", "p2", "Sunny"])
        .assert()
        .success();
    daybook_in(temp.path())
        .args(["write", "Travel", "-d", "2024-03-06", "Rain"])
        .assert()
        .success();

    daybook_in(temp.path())
        .args(["overview", "Travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("┌ 6. Mar\n│ Rain"))
        .stdout(predicate::str::contains("┌ 5. Mar  (2 images)\n│ Sunny"));
}

#[test]
fn test_browse_next_then_prev_keeps_first_day() {
    let temp = setup();

    daybook_in(temp.path())
        .args(["browse", "Travel", "2024-01-01"])
        .write_stdin("Hello\n:next\n:prev\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Travel · 02.01.2024 =="))
        .stdout(predicate::str::contains("== Travel · 01.01.2024 ==\nHello"));

    daybook_in(temp.path())
        .args(["dates", "Travel"])
        .assert()
        .success()
        .stdout("2024-01-01\n");
}

#[test]
fn test_browse_saves_at_end_of_input() {
    let temp = setup();

    daybook_in(temp.path())
        .args(["browse", "Travel", "2024-02-10"])
        .write_stdin("Line one\n::colon line\n:image pic://1\n")
        .assert()
        .success();

    daybook_in(temp.path())
        .args(["show", "Travel", "2024-02-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line one\n:colon line"))
        .stdout(predicate::str::contains("[image] pic://1"));
}

#[cfg(unix)]
#[test]
fn test_edit_uses_configured_editor() {
    use std::os::unix::fs::PermissionsExt;

    let temp = setup();
    let script = temp.path().join("fake-editor.sh");
    std::fs::write(&script, "#!/bin/sh\necho 'Written in editor' > \"$1\"\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    daybook_in(temp.path())
        .env("EDITOR", &script)
        .args(["edit", "Travel", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry for 2024-01-01"));

    daybook_in(temp.path())
        .args(["show", "Travel", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Written in editor"));
    assert!(!temp.path().join(".daybook/DRAFT.md").exists());
}
