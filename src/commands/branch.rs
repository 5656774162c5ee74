use crate::commands::{HandlerResult, Outcome};
use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::{short_id, Repository};
use crate::core::parser::ArgsParser;
use crate::core::seed::REMOTE_BRANCHES;

/// `git branch`, `git branch -r`, `git branch <name>`, `git branch -d <name>`
pub fn execute_branch(args: &[String], repo: &Repository, _ids: &mut dyn IdSource) -> HandlerResult {
    let names = ArgsParser::positionals(args);

    match ArgsParser::switches(args).first().copied() {
        None => match names.first() {
            None => Ok(Outcome::message(list_branches(repo))),
            Some(name) => create_branch(repo, name),
        },
        Some("-r") | Some("--remotes") => Ok(Outcome::message(list_remote_branches(repo))),
        Some("-d") | Some("-D") | Some("--delete") => {
            let name = names.first().ok_or(CommandError::MissingBranchName)?;
            delete_branch(repo, name)
        }
        Some(other) => Err(CommandError::unknown_switch(other)),
    }
}

/// Branch names in creation order, current one prefixed with `* `
pub fn list_branches(repo: &Repository) -> String {
    repo.branches()
        .iter()
        .map(|branch| {
            let marker = if branch.name() == repo.current_branch_name() {
                "* "
            } else {
                "  "
            };
            format!("{marker}{}", branch.name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_remote_branches(repo: &Repository) -> String {
    if repo.remotes().is_empty() {
        return "No remote branches found".to_string();
    }
    REMOTE_BRANCHES
        .iter()
        .map(|name| format!("  {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn create_branch(repo: &Repository, name: &str) -> HandlerResult {
    if repo.has_branch(name) {
        return Err(CommandError::branch_exists(name));
    }
    let mut updated = repo.clone();
    let fork = repo.current_branch().fork(name);
    updated.add_branch(fork);
    Ok(Outcome::replaced("", updated))
}

fn delete_branch(repo: &Repository, name: &str) -> HandlerResult {
    if name == repo.current_branch_name() {
        return Err(CommandError::CannotDeleteCurrentBranch {
            name: name.to_string(),
        });
    }
    let mut updated = repo.clone();
    let removed = updated
        .remove_branch(name)
        .ok_or_else(|| CommandError::branch_not_found(name))?;
    Ok(Outcome::replaced(
        format!("Deleted branch {} (was {}).", name, short_id(removed.head())),
        updated,
    ))
}
