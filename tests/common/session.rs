//! Helpers for driving a [`Session`] line by line

#![allow(dead_code)]

use chrono::Utc;
use git_simulator::{initial_repository, CommandOutput, SequentialIds, Session};

/// A session on the seed project with ids `c0000001`, `c0000002`, ...
pub fn new_session() -> Session {
    Session::with_id_source(initial_repository(Utc::now()), SequentialIds::new())
}

pub fn run(session: &mut Session, line: &str) -> CommandOutput {
    session
        .run(line)
        .unwrap_or_else(|| panic!("no output for '{line}'"))
}

/// Run a line that must succeed and return its text
pub fn run_ok(session: &mut Session, line: &str) -> String {
    let output = run(session, line);
    assert!(!output.is_error, "'{line}' failed: {}", output.text);
    output.text
}

/// Run a line that must fail and return its text
pub fn run_err(session: &mut Session, line: &str) -> String {
    let output = run(session, line);
    assert!(output.is_error, "'{line}' unexpectedly succeeded: {}", output.text);
    output.text
}

pub fn run_all(session: &mut Session, lines: &[&str]) {
    for line in lines {
        run_ok(session, line);
    }
}
