use crate::commands::{HandlerResult, Outcome};
use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::{Remote, Repository};
use crate::core::parser::ArgsParser;
use crate::core::seed::cloned_project;
use chrono::Utc;

const CLONE_REMOTE: &str = "origin";

/// `git clone <url> [directory]`: replaces the whole repository with a fresh project
pub fn execute_clone(args: &[String], repo: &Repository, ids: &mut dyn IdSource) -> HandlerResult {
    let positionals = ArgsParser::positionals(args);
    let url = positionals
        .first()
        .copied()
        .ok_or(CommandError::MissingCloneUrl)?;
    let name = match positionals.get(1).map(|dir| dir.trim_end_matches('/')) {
        Some(directory) if !directory.is_empty() => directory.to_string(),
        _ => project_name(url),
    };

    let (files, main) = cloned_project(&name, ids.next_id(), Utc::now());
    let mut updated = repo.clone();
    updated.replace_contents(
        name.clone(),
        format!("Cloned from {url}"),
        files,
        main,
        vec![Remote::new(CLONE_REMOTE, url)],
    );
    log::info!("cloned {url} as '{name}'");

    let transcript = [
        format!("Cloning into '{name}'..."),
        "remote: Enumerating objects: 73, done.".to_string(),
        "remote: Counting objects: 100% (73/73), done.".to_string(),
        "remote: Compressing objects: 100% (49/49), done.".to_string(),
        "remote: Total 73 (delta 27), reused 62 (delta 16), pack-reused 0".to_string(),
        "Receiving objects: 100% (73/73), 14.52 KiB | 2.90 MiB/s, done.".to_string(),
        "Resolving deltas: 100% (27/27), done.".to_string(),
    ];
    Ok(Outcome::replaced(transcript.join("\n"), updated))
}

/// Last path segment of `url` without a trailing `/` or `.git`, `repo` when empty
pub fn project_name(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let segment = segment.strip_suffix(".git").unwrap_or(segment);
    if segment.is_empty() {
        "repo".to_string()
    } else {
        segment.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{run, run_replaced, seed};

    #[test]
    fn test_project_name() {
        assert_eq!(project_name("https://example.com/foo.git"), "foo");
        assert_eq!(project_name("https://github.com/stackblitz-labs/bolt.diy"), "bolt.diy");
        assert_eq!(project_name("https://example.com/bar/"), "bar");
        assert_eq!(project_name(".git"), "repo");
        assert_eq!(project_name(""), "repo");
    }

    #[test]
    fn test_clone_requires_url() {
        let err = run(execute_clone, &[], &seed()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "fatal: You must specify a repository to clone."
        );
    }

    #[test]
    fn test_clone_replaces_repository() {
        let url = "https://example.com/foo.git";
        let (text, updated) = run_replaced(execute_clone, &[url], &seed());

        assert!(text.starts_with("Cloning into 'foo'..."));
        assert_eq!(updated.name(), "foo");
        assert_eq!(updated.description(), format!("Cloned from {url}"));
        assert_eq!(updated.branches().len(), 1);
        assert_eq!(updated.current_branch_name(), "main");
        assert_eq!(updated.current_branch().commits().len(), 1);
        assert_eq!(updated.remotes(), &[Remote::new("origin", url)]);
        assert!(updated.file("package.json").is_some());
        assert!(updated.file("styles.css").is_none());
    }

    #[test]
    fn test_clone_into_directory() {
        let (text, updated) =
            run_replaced(execute_clone, &["https://example.com/foo.git", "my-copy"], &seed());
        assert!(text.starts_with("Cloning into 'my-copy'..."));
        assert_eq!(updated.name(), "my-copy");
    }

    #[test]
    fn test_clone_into_root_keeps_project_name() {
        let (text, updated) =
            run_replaced(execute_clone, &["https://example.com/foo.git", "/"], &seed());
        assert!(text.starts_with("Cloning into 'foo'..."));
        assert_eq!(updated.name(), "foo");
    }
}
