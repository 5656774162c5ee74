//! Guided tutorials and progress tracking.
//!
//! Tutorials are static scripts of steps, each naming the command the learner is
//! expected to type. The [`TutorialTracker`] watches executed commands from the
//! outside and never influences what the interpreter does.
//!
//! # Public API
//! - [`load_tutorials`]: the embedded tutorial scripts
//! - [`TutorialTracker`]: step completion by command prefix
//! - [`Progress`]: completed/total counts with a rounded percentage

pub mod progress;
pub mod tracker;

pub use progress::Progress;
pub use tracker::{CompletedStep, TutorialTracker};

use crate::core::error::{Result, SimulatorError};
use serde::Deserialize;

const TUTORIALS_JSON: &str = include_str!("../../data/tutorials.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Feedback {
    pub success: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TutorialStep {
    pub id: String,
    pub instruction: String,
    pub expected_command: String,
    pub feedback: Feedback,
}

impl TutorialStep {
    /// A command completes the step when it starts with the expected command
    pub fn is_satisfied_by(&self, command: &str) -> bool {
        command.starts_with(&self.expected_command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Commands the tutorial introduces
    pub commands: Vec<String>,
    pub steps: Vec<TutorialStep>,
}

pub fn load_tutorials() -> Result<Vec<Tutorial>> {
    serde_json::from_str(TUTORIALS_JSON).map_err(|source| SimulatorError::InvalidData {
        name: "tutorials.json",
        source,
    })
}
