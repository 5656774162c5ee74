use crate::commands::{HandlerResult, Outcome};
use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::{Remote, Repository};

/// `git remote [-v]`, `git remote add <name> <url>`, `git remote remove <name>`
pub fn execute_remote(args: &[String], repo: &Repository, _ids: &mut dyn IdSource) -> HandlerResult {
    let Some(action) = args.first() else {
        let names: Vec<&str> = repo.remotes().iter().map(|r| r.name.as_str()).collect();
        return Ok(Outcome::message(names.join("\n")));
    };

    match action.as_str() {
        "-v" | "--verbose" => Ok(Outcome::message(list_verbose(repo))),
        "add" => match (args.get(1), args.get(2)) {
            (Some(name), Some(url)) => add_remote(repo, name, url),
            _ => Err(CommandError::RemoteAddUsage),
        },
        "remove" | "rm" => {
            let name = args.get(1).ok_or(CommandError::RemoteRemoveUsage)?;
            remove_remote(repo, name)
        }
        other => Err(CommandError::UnknownRemoteSubcommand {
            name: other.to_string(),
        }),
    }
}

fn list_verbose(repo: &Repository) -> String {
    repo.remotes()
        .iter()
        .flat_map(|remote| {
            [
                format!("{}\t{} (fetch)", remote.name, remote.url),
                format!("{}\t{} (push)", remote.name, remote.url),
            ]
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_remote(repo: &Repository, name: &str, url: &str) -> HandlerResult {
    if repo.remote(name).is_some() {
        return Err(CommandError::remote_exists(name));
    }
    let mut updated = repo.clone();
    updated.add_remote(Remote::new(name, url));
    Ok(Outcome::replaced("", updated))
}

fn remove_remote(repo: &Repository, name: &str) -> HandlerResult {
    let mut updated = repo.clone();
    updated
        .remove_remote(name)
        .ok_or_else(|| CommandError::NoSuchRemote {
            name: name.to_string(),
        })?;
    Ok(Outcome::replaced("", updated))
}
