#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs::{self, File};
use std::path::Path;
use std::process::{self, Stdio};
use tempfile::TempDir;

fn bookshelf_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("bookshelf"));
    cmd.env("BOOKSHELF_HOME", home.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn seed(home: &Path) {
    let books = json!({
        "books": [
            {"id": 0, "title": "Solaris", "author": "Stanisław Lem", "year": 1961, "status": 0},
            {"id": 3, "title": "Roadside Picnic", "author": "Arkady Strugatsky", "year": 1972, "status": 1}
        ]
    });
    fs::write(home.join("books.json"), books.to_string()).unwrap();
}

#[test]
fn add_book_then_exit_writes_the_catalog() {
    let temp = TempDir::new().unwrap();

    bookshelf_cmd(temp.path())
        .write_stdin("1\nDune\nFrank Herbert\n1965\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added (id 0): Dune"));

    assert_eq!(
        read_json(&temp.path().join("books.json")),
        json!({
            "books": [
                {"id": 0, "title": "Dune", "author": "Frank Herbert", "year": 1965, "status": 0}
            ]
        })
    );
}

#[test]
fn new_ids_continue_after_the_highest_stored_id() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    bookshelf_cmd(temp.path())
        .write_stdin("1\nDune\nFrank Herbert\n1965\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added (id 4): Dune"));
}

#[test]
fn end_of_input_is_a_normal_shutdown() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    bookshelf_cmd(temp.path())
        .write_stdin("3\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book removed (id 0): Solaris"));

    let stored = read_json(&temp.path().join("books.json"));
    assert_eq!(stored["books"].as_array().unwrap().len(), 1);
    assert_eq!(stored["books"][0]["id"], 3);
}

#[test]
fn garbled_input_is_rejected_and_asked_again() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("books.json");

    let mut stdin = b"1\nDune\nFrank Herbert\n\xff\n1965\n".to_vec();
    stdin.extend_from_slice(b"\xff\xfe\n7\n");
    bookshelf_cmd(temp.path())
        .arg("--save-on-exit")
        .write_stdin(stdin)
        .assert()
        .success()
        .stdout(predicate::str::contains("The year must be a whole number!"))
        .stdout(predicate::str::contains("not a valid option."))
        .stdout(predicate::str::contains("Saved 1 book(s)"));

    assert_eq!(read_json(&file)["books"][0]["year"], 1965);
}

#[test]
fn failing_input_still_saves_before_exiting() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data");
    let unreadable = temp.path().join("stdin-is-a-directory");
    fs::create_dir_all(&unreadable).unwrap();

    process::Command::new(cargo_bin("bookshelf"))
        .env("BOOKSHELF_HOME", data_dir.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--save-on-exit")
        .stdin(Stdio::from(File::open(&unreadable).unwrap()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));

    assert_eq!(read_json(&data_dir.join("books.json")), json!({"books": []}));
}

#[test]
fn corrupt_catalog_starts_empty_with_a_warning() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("books.json"), "{\"books\": [{\"id\": 1}]}").unwrap();

    bookshelf_cmd(temp.path())
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting with an empty catalog."));

    assert_eq!(
        read_json(&temp.path().join("books.json")),
        json!({"books": []})
    );
}

#[test]
fn search_by_author_lists_matches() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    // search, author "Lem", run, back from results, back, exit
    bookshelf_cmd(temp.path())
        .write_stdin("5\n1\nLem\n5\n3\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 book."))
        .stdout(predicate::str::contains("Solaris"))
        .stdout(predicate::str::contains("Search results"));
}

#[test]
fn configured_page_size_paginates_the_list() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());
    fs::write(temp.path().join("config.json"), r#"{"page_size": 1}"#).unwrap();

    // list, next page, back (entry 4 on the last page: prev, open, size, back), exit
    bookshelf_cmd(temp.path())
        .write_stdin("4\n1\n4\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1/2 (2 book(s))"))
        .stdout(predicate::str::contains("Page 2/2"))
        .stdout(predicate::str::contains("Loaned"));
}

#[test]
fn file_flag_with_save_on_exit() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("elsewhere").join("mine.json");

    bookshelf_cmd(temp.path())
        .args(["--file", file.to_str().unwrap(), "--save-on-exit"])
        .write_stdin("1\nDune\nFrank Herbert\n1965\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 book(s)"));

    assert_eq!(read_json(&file)["books"][0]["title"], "Dune");
    assert!(!temp.path().join("books.json").exists());
}

#[test]
fn invalid_config_fails_to_start() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), r#"{"page_size": 0}"#).unwrap();

    bookshelf_cmd(temp.path())
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size must be at least 1"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    bookshelf_cmd(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "bookshelf ",
            env!("CARGO_PKG_VERSION")
        )));
}
