//! Pseudo-shell commands available next to `git` in the simulated terminal.
//!
//! These never touch history. `touch` is the only one that changes the working
//! tree, which gives `status`, `add` and `pull` something to work with.

use crate::commands::{HandlerResult, Outcome};
use crate::core::error::CommandError;
use crate::core::model::{FileEntry, FileSystemEntry, Repository};
use std::str::FromStr;

const PROJECT_DIRECTORY: &str = "bolt.diy";

const PNPM_INSTALL: &str = "Packages: +1500\nDependencies: 250 (prod), 1250 (dev)\nDone in 5.2s";
const PNPM_RUN_DEV: &str = "> bolt.diy@0.1.0 dev\n> vite\n\n  VITE v4.3.9  ready in 300 ms\n\n  ➜  Local:   http://localhost:5173/\n  ➜  Network: use --host to expose\n  ➜  press h to show help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Clear,
    Ls,
    Cd,
    Pnpm,
    Touch,
    Cat,
}

impl FromStr for ShellCommand {
    type Err = CommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "clear" => Ok(Self::Clear),
            "ls" => Ok(Self::Ls),
            "cd" => Ok(Self::Cd),
            "pnpm" => Ok(Self::Pnpm),
            "touch" => Ok(Self::Touch),
            "cat" => Ok(Self::Cat),
            other => Err(CommandError::CommandNotFound {
                name: other.to_string(),
            }),
        }
    }
}

pub fn execute_shell(command: ShellCommand, args: &[String], repo: &Repository) -> HandlerResult {
    match command {
        ShellCommand::Clear => Ok(Outcome::message("")),
        ShellCommand::Ls => list(args, repo),
        ShellCommand::Cd => Ok(Outcome::message(change_directory(args))),
        ShellCommand::Pnpm => pnpm(args),
        ShellCommand::Touch => touch(args, repo),
        ShellCommand::Cat => cat(args, repo),
    }
}

fn list(args: &[String], repo: &Repository) -> HandlerResult {
    let entries = match args.first() {
        None => repo.file_system(),
        Some(path) => match repo.entry(path) {
            Some(FileSystemEntry::Directory(dir)) => dir.children.as_slice(),
            Some(FileSystemEntry::File(file)) => return Ok(Outcome::message(file.name.clone())),
            None => {
                return Err(CommandError::CannotAccess {
                    path: path.to_string(),
                })
            }
        },
    };
    let names: Vec<&str> = entries.iter().map(FileSystemEntry::name).collect();
    Ok(Outcome::message(names.join("  ")))
}

fn change_directory(args: &[String]) -> String {
    match args.first().map(String::as_str) {
        Some(PROJECT_DIRECTORY) => format!("Changed directory to {PROJECT_DIRECTORY}"),
        _ => "Directory navigation is simplified in this simulator.".to_string(),
    }
}

fn pnpm(args: &[String]) -> HandlerResult {
    let words: Vec<&str> = args.iter().map(String::as_str).collect();
    match words.as_slice() {
        ["install", ..] => Ok(Outcome::message(PNPM_INSTALL)),
        ["run", "dev", ..] => Ok(Outcome::message(PNPM_RUN_DEV)),
        _ => Err(CommandError::UnknownPackageCommand {
            args: words.join(" "),
        }),
    }
}

/// Marks a file modified, creating it empty when missing
fn touch(args: &[String], repo: &Repository) -> HandlerResult {
    let path = args.first().ok_or_else(|| CommandError::ShellUsage {
        usage: "touch <file>".to_string(),
    })?;
    let trimmed = path.trim_end_matches('/');

    match repo.entry(trimmed) {
        Some(FileSystemEntry::Directory(_)) => return Ok(Outcome::message("")),
        Some(FileSystemEntry::File(_)) => {
            let mut updated = repo.clone();
            if let Some(file) = updated.file_mut(trimmed) {
                file.modified = true;
            }
            return Ok(Outcome::replaced("", updated));
        }
        None => {}
    }

    let (parent, name) = trimmed.rsplit_once('/').unwrap_or(("", trimmed));
    let mut updated = repo.clone();
    let children = updated
        .directory_mut(parent)
        .filter(|_| !name.is_empty())
        .ok_or_else(|| CommandError::CannotTouch {
            path: path.to_string(),
        })?;
    children.push(FileSystemEntry::File(FileEntry {
        modified: true,
        ..FileEntry::clean(name, "")
    }));
    Ok(Outcome::replaced("", updated))
}

fn cat(args: &[String], repo: &Repository) -> HandlerResult {
    let path = args.first().ok_or_else(|| CommandError::ShellUsage {
        usage: "cat <file>".to_string(),
    })?;
    match repo.entry(path) {
        Some(FileSystemEntry::File(file)) => Ok(Outcome::message(file.content.clone())),
        Some(FileSystemEntry::Directory(_)) => Err(CommandError::IsADirectory {
            path: path.to_string(),
        }),
        None => Err(CommandError::NoSuchFile {
            path: path.to_string(),
        }),
    }
}
