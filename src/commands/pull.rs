use crate::commands::{new_commit, HandlerResult, Outcome};
use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::{short_id, ChangeKind, FileChange, Repository};
use crate::core::parser::ArgsParser;

const DEFAULT_REMOTE: &str = "origin";
const README: &str = "README.md";
const REMOTE_NOTE: &str = "\n\nUpdated from remote repository.";

/// `git pull [remote] [branch] [--force]`
///
/// Refuses while any file is modified or staged unless forced, then appends a
/// synthetic update commit. A top-level README picks up a line from "upstream".
pub fn execute_pull(args: &[String], repo: &Repository, ids: &mut dyn IdSource) -> HandlerResult {
    let force = ArgsParser::has_flag(args, &["--force", "-f"]);
    let positionals = ArgsParser::positionals(args);

    if repo.remotes().is_empty() {
        return Err(CommandError::NoPullDestination);
    }

    let remote_name = positionals.first().copied().unwrap_or(DEFAULT_REMOTE);
    let remote = repo
        .remote(remote_name)
        .ok_or_else(|| CommandError::not_a_repository(remote_name))?;

    let at_risk = repo.changed_paths();
    if !at_risk.is_empty() && !force {
        return Err(CommandError::LocalChangesWouldBeOverwritten { paths: at_risk });
    }

    let branch_name = positionals
        .get(1)
        .copied()
        .unwrap_or(repo.current_branch_name());
    let previous = short_id(repo.current_branch().head()).to_string();

    let mut updated = repo.clone();
    let mut changes = Vec::new();
    if let Some(readme) = updated.file_mut(README) {
        readme.content.push_str(REMOTE_NOTE);
        changes.push(FileChange::new(
            README,
            ChangeKind::Modify,
            Some(readme.content.clone()),
        ));
    }
    let readme_updated = !changes.is_empty();

    let commit = new_commit(ids, "Update from remote repository", changes);
    let next = short_id(&commit.id).to_string();
    updated.current_branch_mut().push_commit(commit);

    let mut lines = vec![
        "remote: Enumerating objects: 5, done.".to_string(),
        "remote: Counting objects: 100% (5/5), done.".to_string(),
        "remote: Compressing objects: 100% (2/2), done.".to_string(),
        "remote: Total 3 (delta 1), reused 0 (delta 0), pack-reused 0".to_string(),
        "Unpacking objects: 100% (3/3), 285 bytes | 285.00 KiB/s, done.".to_string(),
        format!("From {}", remote.url),
        format!(
            "   {}..{}  {}     -> {}/{}",
            previous, next, branch_name, remote.name, branch_name
        ),
        format!("Updating {previous}..{next}"),
        "Fast-forward".to_string(),
    ];
    if readme_updated {
        lines.push(format!(" {README} | 2 ++"));
        lines.push(" 1 file changed, 2 insertions(+)".to_string());
    }

    Ok(Outcome::replaced(lines.join("\n"), updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{run, run_replaced, seed, seed_with_modified};
    use crate::core::model::Remote;

    const URL: &str = "https://github.com/stackblitz-labs/bolt.diy";

    #[test]
    fn test_pull_without_remotes() {
        let err = run(execute_pull, &[], &seed()).unwrap_err();
        assert_eq!(err, CommandError::NoPullDestination);
    }

    #[test]
    fn test_pull_unknown_remote() {
        let repo = seed().with_remote(Remote::new("origin", URL));
        let err = run(execute_pull, &["upstream"], &repo).unwrap_err();
        assert_eq!(err, CommandError::not_a_repository("upstream"));
    }

    #[test]
    fn test_local_changes_block_pull() {
        let mut repo = seed_with_modified(&["README.md"]).with_remote(Remote::new("origin", URL));
        repo.file_mut("src/app.js").unwrap().staged = true;
        let err = run(execute_pull, &[], &repo).unwrap_err();
        assert_eq!(
            err,
            CommandError::LocalChangesWouldBeOverwritten {
                paths: vec!["README.md".to_string(), "src/app.js".to_string()]
            }
        );
    }

    #[test]
    fn test_pull_appends_update_commit() {
        let repo = seed().with_remote(Remote::new("origin", URL));
        let (text, updated) = run_replaced(execute_pull, &[], &repo);

        let branch = updated.current_branch();
        let last = branch.last_commit().unwrap();
        assert_eq!(last.message, "Update from remote repository");
        assert_eq!(branch.head(), last.id);
        assert_eq!(last.changes.len(), 1);
        assert!(updated
            .file("README.md")
            .unwrap()
            .content
            .ends_with("Updated from remote repository."));
        assert!(text.contains(&format!("From {URL}")));
        assert!(text.contains("Updating a1b2c3d..c000000"));
    }

    #[test]
    fn test_forced_pull_keeps_flags() {
        let repo = seed_with_modified(&["index.html"]).with_remote(Remote::new("origin", URL));
        let (_, updated) = run_replaced(execute_pull, &["--force"], &repo);
        assert_eq!(updated.modified_paths(), vec!["index.html"]);
        assert_eq!(updated.current_branch().commits().len(), 2);
    }
}
