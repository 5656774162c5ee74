//! Assertion helpers for simulator output and repository invariants

#![allow(dead_code)]

use git_simulator::Repository;
use predicates::prelude::*;

/// Predicate for the clean working tree message
pub fn clean_tree() -> impl Predicate<str> {
    predicates::str::contains("nothing to commit, working tree clean")
}

/// Predicate for a commit summary line on `branch`
pub fn commit_summary(branch: &str) -> impl Predicate<str> {
    let prefix = format!("[{branch} ");
    predicate::function(move |text: &str| {
        text.lines().any(|line| {
            line.strip_prefix(prefix.as_str())
                .and_then(|rest| rest.split_once("] "))
                .is_some_and(|(id, _)| id.len() == 7)
        })
    })
}

/// Predicate for the missing push destination error
pub fn no_push_destination() -> impl Predicate<str> {
    predicates::str::contains("No configured push destination")
}

/// Every branch's head is the id of its last commit
pub fn assert_heads_consistent(repo: &Repository) {
    for branch in repo.branches() {
        let last = branch
            .last_commit()
            .unwrap_or_else(|| panic!("branch {} has no commits", branch.name()));
        assert_eq!(branch.head(), last.id, "head of {} is stale", branch.name());
    }
}

/// The current branch names an existing branch
pub fn assert_current_branch_exists(repo: &Repository) {
    assert!(
        repo.has_branch(repo.current_branch_name()),
        "current branch {} is missing",
        repo.current_branch_name()
    );
}
