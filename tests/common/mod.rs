#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn daybook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_remove("DAYBOOK_ROOT");
    cmd.env_remove("DAYBOOK_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Command running inside an initialized daybook
pub fn daybook_in(root: &Path) -> Command {
    let mut cmd = daybook_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_daybook(root: &Path) {
    daybook_cmd().arg("init").arg(root).assert().success();
}

pub fn add_journal(root: &Path, title: &str) {
    daybook_in(root)
        .args(["journal", "add", title])
        .assert()
        .success();
}
