use crate::commands::{HandlerResult, Outcome};
use crate::core::ids::IdSource;
use crate::core::model::{Commit, Repository};
use crate::core::parser::ArgsParser;
use chrono::SecondsFormat;

/// `git log [--oneline]`: commits of the current branch, newest first
pub fn execute_log(args: &[String], repo: &Repository, _ids: &mut dyn IdSource) -> HandlerResult {
    let commits = repo.current_branch().commits();
    if commits.is_empty() {
        return Ok(Outcome::message("No commits yet"));
    }

    let oneline = ArgsParser::has_flag(args, &["--oneline"]);
    let entries: Vec<String> = commits
        .iter()
        .rev()
        .map(|commit| {
            if oneline {
                format!("{} {}", commit.short_id(), commit.message)
            } else {
                format_entry(commit)
            }
        })
        .collect();

    let separator = if oneline { "\n" } else { "\n\n" };
    Ok(Outcome::message(entries.join(separator)))
}

fn format_entry(commit: &Commit) -> String {
    format!(
        "commit {}\nDate: {}\n\n    {}",
        commit.id,
        commit.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        commit.message
    )
}
