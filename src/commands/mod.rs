//! Command handlers, one module per simulated git subcommand plus the pseudo-shell.
//!
//! Every handler shares the same shape: it reads the current [`Repository`], validates
//! its arguments against it, and either fails with a [`CommandError`] or returns an
//! [`Outcome`] carrying the console text and, when something changed, a complete
//! replacement repository. Handlers never mutate the repository they are given and
//! never call one another.

pub mod add;
pub mod branch;
pub mod checkout;
pub mod clone;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod pull;
pub mod push;
pub mod remote;
pub mod reset;
pub mod shell;
pub mod status;

pub use add::execute_add;
pub use branch::execute_branch;
pub use checkout::execute_checkout;
pub use clone::execute_clone;
pub use commit::execute_commit;
pub use init::execute_init;
pub use log::execute_log;
pub use merge::execute_merge;
pub use pull::execute_pull;
pub use push::execute_push;
pub use remote::execute_remote;
pub use reset::execute_reset;
pub use shell::{execute_shell, ShellCommand};
pub use status::execute_status;

use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::{Commit, FileChange, Repository};
use chrono::Utc;

/// Result of a successful handler run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    /// Replacement for the current repository, `None` when nothing changed
    pub repository: Option<Repository>,
}

impl Outcome {
    /// Output only, repository unchanged
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            repository: None,
        }
    }

    /// Output together with the repository that replaces the current one
    pub fn replaced(message: impl Into<String>, repository: Repository) -> Self {
        Self {
            message: message.into(),
            repository: Some(repository),
        }
    }
}

pub type HandlerResult = std::result::Result<Outcome, CommandError>;

/// Signature shared by every git subcommand handler
pub type Handler = fn(&[String], &Repository, &mut dyn IdSource) -> HandlerResult;

/// A commit stamped with a fresh id and the current time
pub(crate) fn new_commit(
    ids: &mut dyn IdSource,
    message: impl Into<String>,
    changes: Vec<FileChange>,
) -> Commit {
    Commit::new(ids.next_id(), message, Utc::now(), changes)
}
