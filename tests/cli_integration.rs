use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn notz(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("notz").unwrap();
    cmd.arg("--file").arg(file);
    cmd
}

#[test]
fn add_then_list_shows_the_note_at_index_zero() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    notz(&file)
        .args(["add", "Buy milk", "-p", "1", "-c", "Home"])
        .assert()
        .success();

    notz(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0: Buy milk [priority: 1, category: Home] (active)",
        ));
}

#[test]
fn listing_without_any_notes_prints_the_sentinel() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    notz(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes stored"));
}

#[test]
fn archived_notes_drop_out_of_the_active_listing() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    notz(&file).args(["add", "First"]).assert().success();
    notz(&file).args(["add", "Second"]).assert().success();
    notz(&file).args(["archive", "0"]).assert().success();

    notz(&file)
        .args(["list", "--active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1: Second").and(predicate::str::contains("First").not()));

    notz(&file)
        .args(["list", "--archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0: First"));
}

#[test]
fn re_archiving_reports_a_warning_not_a_failure() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    notz(&file).args(["add", "Once"]).assert().success();
    notz(&file).args(["archive", "0"]).assert().success();

    notz(&file)
        .args(["archive", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already archived"));
}

#[test]
fn deleting_an_invalid_index_leaves_the_collection_alone() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    notz(&file).args(["add", "Keeper"]).assert().success();

    notz(&file)
        .args(["delete", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No note at index 7"));

    notz(&file)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 notes"));
}

#[test]
fn update_rewrites_the_note_in_place() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    notz(&file).args(["add", "Old title"]).assert().success();
    notz(&file)
        .args(["update", "0", "New title", "-p", "9", "-c", "Work"])
        .assert()
        .success();

    notz(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0: New title [priority: 9, category: Work] (active)",
        ));
}

#[test]
fn search_matches_titles_case_insensitively() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    notz(&file).args(["add", "Buy milk"]).assert().success();
    notz(&file).args(["add", "MILK run"]).assert().success();
    notz(&file).args(["add", "Groceries"]).assert().success();

    notz(&file)
        .args(["search", "milk"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("0: Buy milk")
                .and(predicate::str::contains("1: MILK run"))
                .and(predicate::str::contains("Groceries").not()),
        );
}

#[test]
fn priority_filter_reports_matches_with_a_count_header() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    notz(&file)
        .args(["add", "Urgent", "-p", "5"])
        .assert()
        .success();
    notz(&file)
        .args(["add", "Later", "-p", "1"])
        .assert()
        .success();

    notz(&file)
        .args(["list", "-p", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 notes with priority 5:"));

    notz(&file)
        .args(["list", "-p", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes with priority: 3"));
}

#[test]
fn collection_survives_across_invocations() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    notz(&file)
        .args(["add", "Persistent", "-p", "2", "-c", "Admin"])
        .assert()
        .success();

    notz(&file)
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 notes (1 active, 0 archived)"));
}

#[test]
fn corrupt_data_file_fails_with_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");
    std::fs::write(&file, "not json at all").unwrap();

    notz(&file)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
