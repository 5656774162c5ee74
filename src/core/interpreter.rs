//! Command interpreter: routes one input line to its handler.
//!
//! [`execute`] is a pure function of the line and the current repository. It
//! tokenizes the line, resolves `git <subcommand>` through the closed
//! [`GitSubcommand`] set (anything else through [`ShellCommand`]), runs the handler
//! and packages the result into the uniform [`CommandOutput`] contract. Handler
//! errors become error output and leave the repository as it was.

use crate::commands::{self, execute_shell, Handler, HandlerResult, ShellCommand};
use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::Repository;
use crate::core::output::CommandOutput;
use crate::core::parser::ArgsParser;
use std::fmt;
use std::str::FromStr;

/// The git subcommands the simulator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitSubcommand {
    Init,
    Status,
    Add,
    Commit,
    Branch,
    Checkout,
    Merge,
    Remote,
    Push,
    Pull,
    Clone,
    Log,
    Reset,
}

impl GitSubcommand {
    pub const ALL: [GitSubcommand; 13] = [
        Self::Init,
        Self::Status,
        Self::Add,
        Self::Commit,
        Self::Branch,
        Self::Checkout,
        Self::Merge,
        Self::Remote,
        Self::Push,
        Self::Pull,
        Self::Clone,
        Self::Log,
        Self::Reset,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Status => "status",
            Self::Add => "add",
            Self::Commit => "commit",
            Self::Branch => "branch",
            Self::Checkout => "checkout",
            Self::Merge => "merge",
            Self::Remote => "remote",
            Self::Push => "push",
            Self::Pull => "pull",
            Self::Clone => "clone",
            Self::Log => "log",
            Self::Reset => "reset",
        }
    }

    pub fn handler(self) -> Handler {
        match self {
            Self::Init => commands::execute_init,
            Self::Status => commands::execute_status,
            Self::Add => commands::execute_add,
            Self::Commit => commands::execute_commit,
            Self::Branch => commands::execute_branch,
            Self::Checkout => commands::execute_checkout,
            Self::Merge => commands::execute_merge,
            Self::Remote => commands::execute_remote,
            Self::Push => commands::execute_push,
            Self::Pull => commands::execute_pull,
            Self::Clone => commands::execute_clone,
            Self::Log => commands::execute_log,
            Self::Reset => commands::execute_reset,
        }
    }
}

impl FromStr for GitSubcommand {
    type Err = CommandError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|subcommand| subcommand.name() == name)
            .ok_or_else(|| CommandError::UnknownSubcommand {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for GitSubcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.name())
    }
}

/// Side effect the presentation layer should apply after rendering output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    ClearScreen,
}

/// Everything one interpreted line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub output: CommandOutput,
    /// The repository after the command, a copy of the input when nothing changed
    pub repository: Repository,
    pub changed: bool,
    pub effect: Effect,
}

/// Interpret `line` against `repo`
pub fn execute(line: &str, repo: &Repository, ids: &mut dyn IdSource) -> Execution {
    let tokens = ArgsParser::tokenize(line);
    let Some((program, args)) = tokens.split_first() else {
        return unchanged(repo, CommandOutput::default(), Effect::None);
    };

    if program != "git" {
        let shell = match program.parse::<ShellCommand>() {
            Ok(shell) => shell,
            Err(err) => return failed(repo, err),
        };
        let effect = match shell {
            ShellCommand::Clear => Effect::ClearScreen,
            _ => Effect::None,
        };
        log::debug!("shell command {shell:?} with args {args:?}");
        return settle(repo, execute_shell(shell, args, repo), effect);
    }

    let Some((name, args)) = args.split_first() else {
        return failed(repo, CommandError::MissingSubcommand);
    };
    let subcommand = match name.parse::<GitSubcommand>() {
        Ok(subcommand) => subcommand,
        Err(err) => return failed(repo, err),
    };

    log::debug!("dispatching {subcommand} with args {args:?}");
    let result = subcommand.handler()(args, repo, ids);
    settle(repo, result, Effect::None)
}

fn settle(repo: &Repository, result: HandlerResult, effect: Effect) -> Execution {
    match result {
        Ok(outcome) => match outcome.repository {
            Some(replacement) => Execution {
                output: CommandOutput::success(outcome.message),
                repository: replacement,
                changed: true,
                effect,
            },
            None => unchanged(repo, CommandOutput::success(outcome.message), effect),
        },
        Err(err) => failed(repo, err),
    }
}

fn failed(repo: &Repository, err: CommandError) -> Execution {
    log::debug!("command failed ({:?}): {}", err.kind(), err);
    unchanged(repo, CommandOutput::error(err.to_string()), Effect::None)
}

fn unchanged(repo: &Repository, output: CommandOutput, effect: Effect) -> Execution {
    Execution {
        output,
        repository: repo.clone(),
        changed: false,
        effect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::SequentialIds;
    use crate::core::seed::initial_repository;
    use chrono::Utc;

    fn run(line: &str, repo: &Repository) -> Execution {
        execute(line, repo, &mut SequentialIds::new())
    }

    #[test]
    fn test_subcommand_names_round_trip() {
        for subcommand in GitSubcommand::ALL {
            assert_eq!(subcommand.name().parse::<GitSubcommand>().unwrap(), subcommand);
        }
        assert_eq!(GitSubcommand::Push.to_string(), "git push");
    }

    #[test]
    fn test_bare_git_is_usage_error() {
        let repo = initial_repository(Utc::now());
        let execution = run("git", &repo);
        assert!(execution.output.is_error);
        assert_eq!(execution.output.text, "Usage: git <command> [<args>]");
        assert!(!execution.changed);
    }

    #[test]
    fn test_unknown_subcommand() {
        let repo = initial_repository(Utc::now());
        let execution = run("git frobnicate", &repo);
        assert!(execution.output.is_error);
        assert_eq!(
            execution.output.text,
            "git: 'frobnicate' is not a git command. See 'git --help'."
        );
    }

    #[test]
    fn test_errors_leave_repository_untouched() {
        let repo = initial_repository(Utc::now());
        let execution = run("git branch main", &repo);
        assert!(execution.output.is_error);
        assert_eq!(execution.repository, repo);
    }

    #[test]
    fn test_clear_requests_screen_clear() {
        let repo = initial_repository(Utc::now());
        let execution = run("clear", &repo);
        assert_eq!(execution.effect, Effect::ClearScreen);
        assert!(execution.output.is_empty());
        assert!(!execution.output.is_error);
    }

    #[test]
    fn test_blank_line_produces_nothing() {
        let repo = initial_repository(Utc::now());
        let execution = run("   ", &repo);
        assert!(execution.output.is_empty());
        assert!(!execution.changed);
    }

    #[test]
    fn test_replacement_is_returned() {
        let repo = initial_repository(Utc::now());
        let execution = run("git checkout -b feature", &repo);
        assert!(execution.changed);
        assert_eq!(execution.repository.current_branch_name(), "feature");
        assert_eq!(repo.current_branch_name(), "main");
    }
}
