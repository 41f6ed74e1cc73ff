mod common;

use common::TestDb;
use predicates::prelude::*;

#[test]
fn add_contact() {
    let db = TestDb::new();

    // Spoken email and phone are normalized before storing
    db.cmd()
        .args([
            "add",
            "--name",
            "Alice",
            "--email",
            "alice at example dot com",
            "--phone",
            "080-312 345 67",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added Alice with email alice@example.com and phone 08031234567",
        ));

    // Confirm newly added contact exist
    db.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "  1. {:<20} {:<30} {:<15}",
            "Alice", "alice@example.com", "08031234567"
        )));
}

#[test]
fn duplicate_email_or_phone_fails() {
    let db = TestDb::new();
    db.add("Alice", "alice@example.com", "08031234567");

    // Same email
    db.cmd()
        .args([
            "add",
            "--name",
            "Alicia",
            "--email",
            "alice@example.com",
            "--phone",
            "08039999999",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "A contact with that email or phone number already exists",
        ))
        .stderr(predicate::str::contains(
            "Error: A contact with this email or phone already exists",
        ));

    // Same phone
    db.cmd()
        .args([
            "add",
            "--name",
            "Bob",
            "--email",
            "bob@example.com",
            "--phone",
            "08031234567",
        ])
        .assert()
        .failure();

    db.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alicia").not())
        .stdout(predicate::str::contains("Bob").not());
}

#[test]
fn missing_fields_are_asked_for() {
    let db = TestDb::new();

    db.cmd()
        .args(["add", "--name", "Diane"])
        .write_stdin("grahammatthew at gmail dot com\n08064879199\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What is the email address?"))
        .stdout(predicate::str::contains("What is the phone number?"))
        .stdout(predicate::str::contains(
            "Added Diane with email grahammatthew@gmail.com and phone 08064879199",
        ));
}

#[test]
fn no_answer_adds_nothing() {
    let db = TestDb::new();

    db.cmd()
        .args(["add", "--name", "Diane"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: No contact added"));

    db.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));
}

#[test]
fn blank_field_is_rejected() {
    let db = TestDb::new();

    db.cmd()
        .args(["add", "--name", "  ", "--email", "x@y.se", "--phone", "0701"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Could not add the contact, every field is required",
        ));
}

#[test]
fn invalid_inputs() {
    let db = TestDb::new();

    // INVALID COMMAND
    db.cmd()
        .args(["and", "--name", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'and'"));

    // INVALID STORAGE
    db.cmd()
        .args(["--storage", "json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a recognized storage medium"));

    // HTTP SINK WITHOUT URL
    db.cmd()
        .args(["--sink", "http", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sink url Not found"));
}
