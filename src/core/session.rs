//! Interactive session state.
//!
//! A [`Session`] owns the single current [`Repository`]. Each executed line is
//! interpreted against it and the resulting repository is installed with one
//! assignment, so readers only ever see the state before or after a command.
//! Observers (the tutorial tracker) are told about each executed command
//! afterwards and cannot influence it.

use crate::core::ids::{IdSource, RandomIds};
use crate::core::interpreter::{self, Effect};
use crate::core::model::Repository;
use crate::core::output::CommandOutput;
use crate::core::seed::initial_repository;
use chrono::Utc;

/// Receives the trimmed text of every executed command
pub trait CommandObserver {
    fn on_command(&mut self, command: &str);
}

/// No-op observer
impl CommandObserver for () {
    fn on_command(&mut self, _command: &str) {}
}

/// What the terminal needs to show after one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub output: CommandOutput,
    pub effect: Effect,
}

pub struct Session {
    repository: Repository,
    ids: Box<dyn IdSource>,
}

impl Default for Session {
    /// A session on the seed project with random commit ids
    fn default() -> Self {
        Self::new(initial_repository(Utc::now()))
    }
}

impl Session {
    pub fn new(repository: Repository) -> Self {
        Self::with_id_source(repository, RandomIds)
    }

    pub fn with_id_source(repository: Repository, ids: impl IdSource + 'static) -> Self {
        Self {
            repository,
            ids: Box::new(ids),
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Interpret `line`, install the resulting repository, then notify `observer`.
    ///
    /// Blank input returns `None` and notifies nobody.
    pub fn execute(
        &mut self,
        line: &str,
        observer: &mut impl CommandObserver,
    ) -> Option<Response> {
        let command = line.trim();
        if command.is_empty() {
            return None;
        }

        let execution = interpreter::execute(command, &self.repository, self.ids.as_mut());
        if execution.changed {
            log::info!("repository replaced after '{command}'");
            self.repository = execution.repository;
        }
        observer.on_command(command);

        Some(Response {
            output: execution.output,
            effect: execution.effect,
        })
    }

    /// [`Session::execute`] without an observer, returning only the output
    pub fn run(&mut self, line: &str) -> Option<CommandOutput> {
        self.execute(line, &mut ()).map(|response| response.output)
    }
}
