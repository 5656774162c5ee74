use crate::commands::{HandlerResult, Outcome};
use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::{FileSystemEntry, Repository};
use crate::core::parser::ArgsParser;

const ADD_ALL: &[&str] = &["-A", "--all"];

/// `git add <path>... | .`
///
/// `.` stages every modified file. A file path stages that file, a directory path
/// stages every modified file below it. All paths are checked before anything is
/// staged.
pub fn execute_add(args: &[String], repo: &Repository, _ids: &mut dyn IdSource) -> HandlerResult {
    let paths = ArgsParser::positionals(args);
    let stage_all = ArgsParser::has_flag(args, ADD_ALL) || paths.contains(&".");

    if paths.is_empty() && !stage_all {
        return Err(CommandError::NothingSpecified);
    }

    if let Some(missing) = paths
        .iter()
        .find(|path| !repo.has_path(path))
    {
        return Err(CommandError::pathspec_no_match(*missing));
    }

    let mut updated = repo.clone();
    if stage_all {
        updated.update_files("", |_, file| {
            if file.modified {
                file.staged = true;
            }
        });
    }

    for path in paths.into_iter().filter(|path| *path != ".") {
        match repo.entry(path) {
            Some(FileSystemEntry::File(_)) => {
                if let Some(file) = updated.file_mut(path) {
                    file.staged = true;
                }
            }
            _ => updated.update_files(path, |_, file| {
                if file.modified {
                    file.staged = true;
                }
            }),
        }
    }

    log::debug!("staged paths: {:?}", updated.staged_paths());
    Ok(Outcome::replaced("", updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{run, run_replaced, seed, seed_with_modified};

    #[test]
    fn test_add_without_arguments() {
        let err = run(execute_add, &[], &seed()).unwrap_err();
        assert_eq!(err, CommandError::NothingSpecified);
    }

    #[test]
    fn test_add_unknown_path() {
        let err = run(execute_add, &["nope.txt"], &seed()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "fatal: pathspec 'nope.txt' did not match any files"
        );
    }

    #[test]
    fn test_add_single_file_keeps_modified() {
        let repo = seed_with_modified(&["README.md"]);
        let (text, updated) = run_replaced(execute_add, &["README.md"], &repo);
        assert!(text.is_empty());
        let readme = updated.file("README.md").unwrap();
        assert!(readme.staged);
        assert!(readme.modified);
        assert_eq!(updated.staged_paths(), vec!["README.md"]);
    }

    #[test]
    fn test_add_dot_stages_only_modified_files() {
        let repo = seed_with_modified(&["index.html", "src/app.js"]);
        let (_, updated) = run_replaced(execute_add, &["."], &repo);
        assert_eq!(updated.staged_paths(), vec!["index.html", "src/app.js"]);
    }

    #[test]
    fn test_add_directory_and_nested_file() {
        let repo = seed_with_modified(&["README.md", "src/app.js"]);
        let (_, updated) = run_replaced(execute_add, &["src"], &repo);
        assert_eq!(updated.staged_paths(), vec!["src/app.js"]);

        let (_, updated) = run_replaced(execute_add, &["src/app.js"], &seed());
        assert!(updated.file("src/app.js").unwrap().staged);
    }

    #[test]
    fn test_one_bad_path_stages_nothing() {
        let repo = seed_with_modified(&["README.md"]);
        let err = run(execute_add, &["README.md", "missing.md"], &repo).unwrap_err();
        assert_eq!(err, CommandError::pathspec_no_match("missing.md"));
        assert!(repo.staged_paths().is_empty());
    }

    #[test]
    fn test_add_dot_relative_directory() {
        let repo = seed_with_modified(&["README.md", "src/app.js"]);
        let (_, updated) = run_replaced(execute_add, &["./src"], &repo);
        assert_eq!(updated.staged_paths(), vec!["src/app.js"]);

        let (_, updated) = run_replaced(execute_add, &["./"], &repo);
        assert_eq!(updated.staged_paths(), vec!["README.md", "src/app.js"]);
    }
}
