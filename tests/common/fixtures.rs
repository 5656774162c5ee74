//! Predefined session scenarios
//!
//! Each fixture reaches its state through commands only, the same way a learner would.

#![allow(dead_code)]

use super::session::{new_session, run_all};
use git_simulator::Session;

pub const ORIGIN_URL: &str = "https://github.com/username/repo.git";

/// Scenario: seed project with `origin` configured
pub fn session_with_origin() -> Session {
    let mut session = new_session();
    run_all(&mut session, &[&format!("git remote add origin {ORIGIN_URL}")]);
    session
}

/// Scenario: seed project with the given files edited
pub fn session_with_edits(paths: &[&str]) -> Session {
    let mut session = new_session();
    for path in paths {
        run_all(&mut session, &[&format!("touch {path}")]);
    }
    session
}

/// Scenario: `feature` branch with one extra commit, `main` checked out
pub fn session_with_feature_work() -> Session {
    let mut session = new_session();
    run_all(
        &mut session,
        &[
            "git checkout -b feature",
            "touch src/app.js",
            "git add src/app.js",
            "git commit -m \"Feature work\"",
            "git checkout main",
        ],
    );
    session
}

/// A spread of reachable states for properties that must hold everywhere
pub fn reachable_sessions() -> Vec<(&'static str, Session)> {
    let mut staged = session_with_edits(&["README.md", "styles.css"]);
    run_all(&mut staged, &["git add README.md"]);

    let mut merged = session_with_feature_work();
    run_all(&mut merged, &["git merge feature"]);

    let mut cloned = new_session();
    run_all(&mut cloned, &["git clone https://example.com/foo.git"]);

    let mut pulled = session_with_origin();
    run_all(&mut pulled, &["git pull", "git reset --hard origin/main"]);

    vec![
        ("seed", new_session()),
        ("with origin", session_with_origin()),
        ("edited and staged", staged),
        ("feature branch", session_with_feature_work()),
        ("merged", merged),
        ("cloned", cloned),
        ("pulled and reset", pulled),
    ]
}
