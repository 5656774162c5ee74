use crate::commands::{HandlerResult, Outcome};
use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::{short_id, Repository};
use crate::core::parser::ArgsParser;

const DEFAULT_REMOTE: &str = "origin";
const SET_UPSTREAM: &[&str] = &["-u", "--set-upstream"];
const NULL_ID: &str = "0000000";

/// `git push [remote] [branch] [-u]`: validates and prints a transport log
pub fn execute_push(args: &[String], repo: &Repository, _ids: &mut dyn IdSource) -> HandlerResult {
    let set_upstream = ArgsParser::has_flag(args, SET_UPSTREAM);
    let positionals = ArgsParser::positionals(args);

    if repo.remotes().is_empty() {
        return Err(CommandError::NoPushDestination {
            branch: repo.current_branch_name().to_string(),
        });
    }

    let remote_name = positionals.first().copied().unwrap_or(DEFAULT_REMOTE);
    let remote = repo
        .remote(remote_name)
        .ok_or_else(|| CommandError::not_a_repository(remote_name))?;

    let branch_name = positionals
        .get(1)
        .copied()
        .unwrap_or(repo.current_branch_name());
    let branch = repo
        .branch(branch_name)
        .filter(|branch| !branch.commits().is_empty())
        .ok_or_else(|| CommandError::RefspecNoMatch {
            branch: branch_name.to_string(),
        })?;

    let commits = branch.commits();
    let previous = match commits.len() {
        0 | 1 => NULL_ID,
        n => short_id(&commits[n - 2].id),
    };

    let mut lines = vec![
        "Enumerating objects: 5, done.".to_string(),
        "Counting objects: 100% (5/5), done.".to_string(),
        "Delta compression using up to 8 threads".to_string(),
        "Compressing objects: 100% (3/3), done.".to_string(),
        "Writing objects: 100% (3/3), 294 bytes | 294.00 KiB/s, done.".to_string(),
        "Total 3 (delta 2), reused 0 (delta 0), pack-reused 0".to_string(),
        "remote: Resolving deltas: 100% (2/2), completed with 2 local objects.".to_string(),
        format!("To {}", remote.url),
        format!(
            "   {}..{} {} -> {}",
            previous,
            short_id(branch.head()),
            branch_name,
            branch_name
        ),
    ];
    if set_upstream {
        lines.push(format!(
            "branch '{}' set up to track '{}/{}'.",
            branch_name, remote.name, branch_name
        ));
    }

    Ok(Outcome::message(lines.join("\n")))
}
