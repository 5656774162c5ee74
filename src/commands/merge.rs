use crate::commands::{new_commit, HandlerResult, Outcome};
use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::Repository;
use crate::core::parser::ArgsParser;

/// `git merge <branch>`: records a merge commit with no file changes
pub fn execute_merge(args: &[String], repo: &Repository, ids: &mut dyn IdSource) -> HandlerResult {
    let source = ArgsParser::positionals(args)
        .first()
        .copied()
        .ok_or(CommandError::MissingMergeBranch)?;

    if !repo.has_branch(source) {
        return Err(CommandError::branch_not_found(source));
    }
    if source == repo.current_branch_name() {
        return Ok(Outcome::message("Already up to date."));
    }

    let mut updated = repo.clone();
    let message = format!(
        "Merge branch '{}' into {}",
        source,
        repo.current_branch_name()
    );
    updated
        .current_branch_mut()
        .push_commit(new_commit(ids, message, Vec::new()));

    Ok(Outcome::replaced(
        "Merge made by the 'recursive' strategy.",
        updated,
    ))
}
