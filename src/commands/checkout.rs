use crate::commands::{HandlerResult, Outcome};
use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::Repository;
use crate::core::seed::seed_branch;
use chrono::Utc;

/// `git checkout <branch>`, `git checkout -b <branch>`, `git checkout -- <path>`
///
/// Unknown names fall back to the seed-branch table before failing, so the
/// illustrative tutorial branches appear on first checkout.
pub fn execute_checkout(args: &[String], repo: &Repository, _ids: &mut dyn IdSource) -> HandlerResult {
    let first = args.first().ok_or(CommandError::MissingCheckoutTarget)?;

    match first.as_str() {
        "-b" => {
            let name = args
                .get(1)
                .ok_or(CommandError::MissingSwitchValue { switch: 'b' })?;
            create_and_switch(repo, name)
        }
        "--" => {
            let path = args.get(1).ok_or(CommandError::MissingCheckoutTarget)?;
            discard_changes(repo, path)
        }
        switch if switch.starts_with('-') && switch.len() > 1 => {
            Err(CommandError::unknown_switch(switch))
        }
        name => switch_branch(repo, name),
    }
}

fn create_and_switch(repo: &Repository, name: &str) -> HandlerResult {
    if repo.has_branch(name) {
        return Err(CommandError::branch_exists(name));
    }
    let mut updated = repo.clone();
    updated.add_branch(repo.current_branch().fork(name));
    updated.switch_to(name);
    Ok(Outcome::replaced(
        format!("Switched to a new branch '{name}'"),
        updated,
    ))
}

fn switch_branch(repo: &Repository, name: &str) -> HandlerResult {
    if name == repo.current_branch_name() {
        return Ok(Outcome::message(format!("Already on '{name}'")));
    }

    let mut updated = repo.clone();
    if !repo.has_branch(name) {
        let seeded = seed_branch(name)
            .and_then(|seed| seed.materialize(repo, Utc::now()))
            .ok_or_else(|| CommandError::UnknownCheckoutTarget {
                name: name.to_string(),
            })?;
        log::debug!("materialized seed branch '{name}'");
        updated.add_branch(seeded);
    }
    updated.switch_to(name);
    Ok(Outcome::replaced(
        format!("Switched to branch '{name}'"),
        updated,
    ))
}

/// Drop working-tree edits to a file, or to every file below a directory
fn discard_changes(repo: &Repository, path: &str) -> HandlerResult {
    if !repo.has_path(path) {
        return Err(CommandError::UnknownCheckoutTarget {
            name: path.to_string(),
        });
    }
    let mut updated = repo.clone();
    let mut restored = 0;
    updated.update_files(path, |_, file| {
        if file.modified && !file.staged {
            file.modified = false;
            restored += 1;
        }
    });
    let noun = if restored == 1 { "path" } else { "paths" };
    Ok(Outcome::replaced(
        format!("Updated {restored} {noun} from the index"),
        updated,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{run, run_replaced, seed, seed_with_modified};

    #[test]
    fn test_checkout_requires_target() {
        assert_eq!(
            run(execute_checkout, &[], &seed()).unwrap_err(),
            CommandError::MissingCheckoutTarget
        );
        assert_eq!(
            run(execute_checkout, &["-b"], &seed()).unwrap_err().to_string(),
            "error: switch `b' requires a value"
        );
    }

    #[test]
    fn test_create_and_switch() {
        let (text, updated) = run_replaced(execute_checkout, &["-b", "feature"], &seed());
        assert_eq!(text, "Switched to a new branch 'feature'");
        assert_eq!(updated.current_branch_name(), "feature");
        assert_eq!(updated.branches().len(), 2);

        let err = run(execute_checkout, &["-b", "main"], &updated).unwrap_err();
        assert_eq!(err, CommandError::branch_exists("main"));
    }

    #[test]
    fn test_switch_existing_branch() {
        let (_, repo) = run_replaced(execute_checkout, &["-b", "feature"], &seed());
        let (text, updated) = run_replaced(execute_checkout, &["main"], &repo);
        assert_eq!(text, "Switched to branch 'main'");
        assert_eq!(updated.current_branch_name(), "main");
    }

    #[test]
    fn test_already_on_branch() {
        let outcome = run(execute_checkout, &["main"], &seed()).unwrap();
        assert_eq!(outcome.message, "Already on 'main'");
        assert!(outcome.repository.is_none());
    }

    #[test]
    fn test_unknown_branch() {
        let err = run(execute_checkout, &["develop"], &seed()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "error: pathspec 'develop' did not match any file(s) known to git"
        );
    }

    #[test]
    fn test_seed_branches_materialize() {
        let (text, updated) = run_replaced(execute_checkout, &["stable"], &seed());
        assert_eq!(text, "Switched to branch 'stable'");
        assert_eq!(updated.branch("stable").unwrap().commits().len(), 1);

        let (_, updated) = run_replaced(execute_checkout, &["feature/new-component"], &seed());
        let feature = updated.current_branch();
        assert_eq!(feature.name(), "feature/new-component");
        assert_eq!(feature.head(), "f1e2a3t4");
        assert_eq!(feature.last_commit().unwrap().message, "Add new component");
    }

    #[test]
    fn test_discard_file_changes() {
        let repo = seed_with_modified(&["README.md", "src/app.js"]);
        let (text, updated) = run_replaced(execute_checkout, &["--", "src"], &repo);
        assert_eq!(text, "Updated 1 path from the index");
        assert_eq!(updated.modified_paths(), vec!["README.md"]);

        let err = run(execute_checkout, &["--", "ghost.txt"], &repo).unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::Reference);
    }

    #[test]
    fn test_discard_changes_from_root() {
        let repo = seed_with_modified(&["README.md", "src/app.js"]);
        let (text, updated) = run_replaced(execute_checkout, &["--", "."], &repo);
        assert_eq!(text, "Updated 2 paths from the index");
        assert!(updated.modified_paths().is_empty());
    }
}
