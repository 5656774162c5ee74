//! Core functionality for the git simulator.
//!
//! This module provides the repository model, the command interpreter and the
//! session that owns the current repository, together with the supporting
//! pieces: seed data, id generation, error types, configuration and terminal
//! formatting.

pub mod catalog;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod ids;
pub mod interpreter;
pub mod model;
pub mod output;
pub mod parser;
pub mod seed;
pub mod session;
pub mod view;

// === Error handling ===
pub use error::{CommandError, ErrorKind, Result, SimulatorError};

// === Repository model ===
pub use model::{
    Branch, ChangeKind, Commit, DirectoryEntry, FileChange, FileEntry, FileSystemEntry, Remote,
    Repository,
};

// === Interpreter and session ===
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use interpreter::{execute, Effect, Execution, GitSubcommand};
pub use session::{CommandObserver, Response, Session};

// === Argument parsing ===
pub use parser::ArgsParser;

// === Static data ===
pub use catalog::{find_reference, load_catalog, CommandReference};
pub use seed::initial_repository;

// === Configuration ===
pub use config::SimulatorConfig;

// === Output formatting ===
pub use colors::{get_colored_branch, get_colored_path, get_state_color_style, FileState};
pub use output::{
    print_error, print_info, print_output, print_section_header, print_success, render_output,
    render_prompt, CommandOutput,
};
pub use view::render_repository;
