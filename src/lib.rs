//! Git Simulator - an educational, in-memory simulation of the git command line.
//!
//! Learners type git commands into a terminal; the simulator interprets them
//! against a modeled repository (working files with modified/staged flags,
//! branches, commits, remotes) and answers with the console text the real tool
//! would print. Nothing touches the disk or the network.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`Session`]: owns the current repository and runs command lines
//! - [`execute`]: the pure interpreter entry point
//! - [`Repository`] and its read accessors
//! - Error types and the output contract
//!
//! Tutorials and progress tracking live in [`tutorial`]; the interactive loop
//! lives in [`terminal`].
//!
//! # Example
//! ```
//! use git_simulator::{SequentialIds, Session, initial_repository};
//! use chrono::Utc;
//!
//! let mut session = Session::with_id_source(initial_repository(Utc::now()), SequentialIds::new());
//! session.run("git add README.md");
//! let output = session.run("git commit -m \"Update readme\"").unwrap();
//! assert_eq!(output.text, "[main c000000] Update readme\n 1 file changed");
//! ```

pub mod commands;
pub mod core;
pub mod terminal;
pub mod tutorial;

// Re-export the core public API for external users
pub use crate::core::{
    // Interpreter and session
    execute,
    initial_repository,
    ArgsParser,
    Branch,
    ChangeKind,
    // Error handling
    CommandError,
    CommandObserver,
    CommandOutput,
    Commit,
    Effect,
    ErrorKind,
    Execution,
    FileChange,
    FileEntry,
    FileSystemEntry,
    GitSubcommand,
    IdSource,
    RandomIds,
    Remote,
    // Repository model
    Repository,
    Response,
    Result,
    SequentialIds,
    Session,
    SimulatorConfig,
    SimulatorError,
};
pub use tutorial::{Progress, Tutorial, TutorialTracker};
