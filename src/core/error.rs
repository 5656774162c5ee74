//! Domain-specific error types and error handling utilities.
//!
//! This module defines two error families:
//! - [`CommandError`]: every failure a simulated git or shell command can report.
//!   Its `Display` text is exactly what the learner sees in the terminal, worded like
//!   the real tool.
//! - [`SimulatorError`]: process-level failures (configuration files, JSON data,
//!   terminal I/O) that never reach the interpreter.
//!
//! # Error Categories
//! [`CommandError::kind`] groups command failures into the taxonomy the
//! terminal renders and the tests assert on:
//! - **Usage**: malformed or incomplete arguments
//! - **Reference**: a named branch, remote or path does not exist (or already does)
//! - **Precondition**: the operation needs state that is not there
//! - **Conflict**: local changes would be overwritten
//! - **Unknown command**: unrecognized subcommand or shell command

use std::path::PathBuf;
use thiserror::Error;

/// Category of a [`CommandError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Usage,
    Reference,
    Precondition,
    Conflict,
    UnknownCommand,
}

/// Failures reported by the interpreter and the command handlers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    // Usage errors
    #[error("Usage: git <command> [<args>]")]
    MissingSubcommand,

    #[error("Nothing specified, nothing added.\nMaybe you wanted to say 'git add .'?")]
    NothingSpecified,

    #[error("Error: Missing commit message. Use -m \"your message\"")]
    MissingCommitMessage,

    #[error("Error: Unclosed quote in commit message")]
    UnclosedQuote,

    #[error("Error: Unexpected quote inside commit message")]
    EmbeddedQuote,

    #[error("error: switch `{switch}' requires a value")]
    MissingSwitchValue { switch: char },

    #[error("error: unknown switch `{switch}'")]
    UnknownSwitch { switch: String },

    #[error("Error: You must specify which branch to checkout")]
    MissingCheckoutTarget,

    #[error("Error: You must specify which branch to merge")]
    MissingMergeBranch,

    #[error("fatal: branch name required")]
    MissingBranchName,

    #[error("usage: git remote add <name> <url>")]
    RemoteAddUsage,

    #[error("usage: git remote remove <name>")]
    RemoteRemoveUsage,

    #[error("error: Unknown subcommand: {name}")]
    UnknownRemoteSubcommand { name: String },

    #[error("fatal: You must specify a repository to clone.")]
    MissingCloneUrl,

    #[error("usage: {usage}")]
    ShellUsage { usage: String },

    // Reference errors
    #[error("fatal: pathspec '{path}' did not match any files")]
    PathspecNoMatch { path: String },

    #[error("error: pathspec '{name}' did not match any file(s) known to git")]
    UnknownCheckoutTarget { name: String },

    #[error("fatal: A branch named '{name}' already exists.")]
    BranchExists { name: String },

    #[error("error: branch '{name}' not found.")]
    BranchNotFound { name: String },

    #[error("error: Cannot delete branch '{name}' checked out")]
    CannotDeleteCurrentBranch { name: String },

    #[error("error: remote {name} already exists.")]
    RemoteExists { name: String },

    #[error("error: No such remote: '{name}'")]
    NoSuchRemote { name: String },

    #[error(
        "fatal: '{name}' does not appear to be a git repository\n\
         fatal: Could not read from remote repository.\n\n\
         Please make sure you have the correct access rights\n\
         and the repository exists."
    )]
    NotARepository { name: String },

    #[error("error: src refspec {branch} does not match any")]
    RefspecNoMatch { branch: String },

    #[error("cat: {path}: No such file or directory")]
    NoSuchFile { path: String },

    #[error("touch: cannot touch '{path}': No such file or directory")]
    CannotTouch { path: String },

    #[error("cat: {path}: Is a directory")]
    IsADirectory { path: String },

    #[error("ls: cannot access '{path}': No such file or directory")]
    CannotAccess { path: String },

    // Precondition errors
    #[error(
        "fatal: No configured push destination.\n\
         fatal: The current branch has no upstream branch.\n\
         To push the current branch and set the remote as upstream, use\n\n    \
         git push --set-upstream origin {branch}"
    )]
    NoPushDestination { branch: String },

    #[error("fatal: No configured pull destination.")]
    NoPullDestination,

    // Conflict errors
    #[error(
        "error: Your local changes to the following files would be overwritten by merge:\n\
         {}\n\
         Please commit your changes or stash them before you merge.\n\
         Aborting",
        indent_paths(.paths)
    )]
    LocalChangesWouldBeOverwritten { paths: Vec<String> },

    // Unknown commands
    #[error("git: '{name}' is not a git command. See 'git --help'.")]
    UnknownSubcommand { name: String },

    #[error("Unknown pnpm command: {args}")]
    UnknownPackageCommand { args: String },

    #[error("Command not found: {name}")]
    CommandNotFound { name: String },
}

fn indent_paths(paths: &[String]) -> String {
    paths
        .iter()
        .map(|path| format!("\t{path}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl CommandError {
    /// Taxonomy bucket of this error
    pub fn kind(&self) -> ErrorKind {
        use CommandError::*;
        match self {
            MissingSubcommand
            | NothingSpecified
            | MissingCommitMessage
            | UnclosedQuote
            | EmbeddedQuote
            | MissingSwitchValue { .. }
            | UnknownSwitch { .. }
            | MissingCheckoutTarget
            | MissingMergeBranch
            | MissingBranchName
            | RemoteAddUsage
            | RemoteRemoveUsage
            | UnknownRemoteSubcommand { .. }
            | MissingCloneUrl
            | ShellUsage { .. } => ErrorKind::Usage,

            PathspecNoMatch { .. }
            | UnknownCheckoutTarget { .. }
            | BranchExists { .. }
            | BranchNotFound { .. }
            | CannotDeleteCurrentBranch { .. }
            | RemoteExists { .. }
            | NoSuchRemote { .. }
            | NotARepository { .. }
            | RefspecNoMatch { .. }
            | NoSuchFile { .. }
            | CannotTouch { .. }
            | IsADirectory { .. }
            | CannotAccess { .. } => ErrorKind::Reference,

            NoPushDestination { .. } | NoPullDestination => ErrorKind::Precondition,

            LocalChangesWouldBeOverwritten { .. } => ErrorKind::Conflict,

            UnknownSubcommand { .. } | UnknownPackageCommand { .. } | CommandNotFound { .. } => {
                ErrorKind::UnknownCommand
            }
        }
    }

    pub fn pathspec_no_match(path: impl Into<String>) -> Self {
        Self::PathspecNoMatch { path: path.into() }
    }

    pub fn branch_exists(name: impl Into<String>) -> Self {
        Self::BranchExists { name: name.into() }
    }

    pub fn branch_not_found(name: impl Into<String>) -> Self {
        Self::BranchNotFound { name: name.into() }
    }

    pub fn remote_exists(name: impl Into<String>) -> Self {
        Self::RemoteExists { name: name.into() }
    }

    pub fn not_a_repository(name: impl Into<String>) -> Self {
        Self::NotARepository { name: name.into() }
    }

    pub fn unknown_switch(switch: impl Into<String>) -> Self {
        Self::UnknownSwitch {
            switch: switch.into(),
        }
    }
}

/// Process-level errors for the simulator binary
#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Could not find configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unknown tutorial: {id}")]
    UnknownTutorial { id: String },

    #[error("No reference entry for '{name}'")]
    UnknownReference { name: String },

    #[error("Invalid embedded data '{name}': {source}")]
    InvalidData {
        name: &'static str,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using SimulatorError
pub type Result<T> = std::result::Result<T, SimulatorError>;

impl SimulatorError {
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_tutorial(id: impl Into<String>) -> Self {
        Self::UnknownTutorial { id: id.into() }
    }

    pub fn unknown_reference(name: impl Into<String>) -> Self {
        Self::UnknownReference { name: name.into() }
    }
}
