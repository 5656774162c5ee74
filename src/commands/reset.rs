use crate::commands::{new_commit, HandlerResult, Outcome};
use crate::core::ids::IdSource;
use crate::core::model::{short_id, Repository};
use crate::core::parser::ArgsParser;

const DEFAULT_REMOTE: &str = "origin";

/// `git reset [--hard] [<remote>/<branch>]`
///
/// Mixed reset unstages everything and keeps working-tree edits. Hard reset clears
/// both flags; pointed at a remote branch it also records a reset commit.
pub fn execute_reset(args: &[String], repo: &Repository, ids: &mut dyn IdSource) -> HandlerResult {
    let hard = ArgsParser::has_flag(args, &["--hard"]);
    let target = ArgsParser::positionals(args)
        .into_iter()
        .filter_map(|arg| arg.split_once('/'))
        .find(|(remote, _)| *remote == DEFAULT_REMOTE || repo.remote(remote).is_some());

    let mut updated = repo.clone();

    if !hard {
        updated.update_files("", |_, file| file.staged = false);
        let modified = updated.modified_paths();
        let text = if modified.is_empty() {
            String::new()
        } else {
            let mut lines = vec!["Unstaged changes after reset:".to_string()];
            lines.extend(modified.iter().map(|path| format!("M\t{path}")));
            lines.join("\n")
        };
        return Ok(Outcome::replaced(text, updated));
    }

    updated.update_files("", |_, file| {
        file.staged = false;
        file.modified = false;
    });

    if let Some((remote, branch)) = target {
        let commit = new_commit(ids, format!("Reset to {remote}/{branch}"), Vec::new());
        updated.current_branch_mut().push_commit(commit);
    }

    let text = match updated.current_branch().last_commit() {
        Some(head) => format!("HEAD is now at {} {}", short_id(&head.id), head.message),
        None => "HEAD is now at 0000000".to_string(),
    };
    Ok(Outcome::replaced(text, updated))
}
