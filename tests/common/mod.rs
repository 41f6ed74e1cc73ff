#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestDb {
    pub dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> String {
        self.dir
            .path()
            .join("contacts.db")
            .to_str()
            .unwrap()
            .to_string()
    }

    /// The binary pointed at this database, with no sink and no inherited stdin.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("contacts-skill").unwrap();
        cmd.env_remove("CONTACTS_SINK")
            .env_remove("CONTACTS_STORAGE")
            .env_remove("CONTACTS_RECEIVER")
            .env_remove("CONTACTS_SINK_URL")
            .env("RUST_LOG", "warn")
            .args(["--db-path", &self.path()])
            .write_stdin("");
        cmd
    }

    pub fn add(&self, name: &str, email: &str, phone: &str) {
        self.cmd()
            .args(["add", "--name", name, "--email", email, "--phone", phone])
            .assert()
            .success();
    }
}
