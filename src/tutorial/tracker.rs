use crate::core::error::{Result, SimulatorError};
use crate::core::session::CommandObserver;
use crate::tutorial::{Progress, Tutorial, TutorialStep};

/// A step that the most recent command completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedStep {
    pub tutorial_id: String,
    pub step_id: String,
    pub feedback: String,
}

/// Tracks step completion for every tutorial, one of which is active
#[derive(Debug, Clone)]
pub struct TutorialTracker {
    tutorials: Vec<Tutorial>,
    /// Completion flags, parallel to each tutorial's steps
    completed: Vec<Vec<bool>>,
    active: Option<usize>,
    recent: Vec<CompletedStep>,
}

impl TutorialTracker {
    pub fn new(tutorials: Vec<Tutorial>) -> Self {
        let completed = tutorials
            .iter()
            .map(|tutorial| vec![false; tutorial.steps.len()])
            .collect();
        Self {
            tutorials,
            completed,
            active: None,
            recent: Vec::new(),
        }
    }

    pub fn tutorials(&self) -> &[Tutorial] {
        &self.tutorials
    }

    pub fn select(&mut self, id: &str) -> Result<&Tutorial> {
        let index = self
            .tutorials
            .iter()
            .position(|tutorial| tutorial.id == id)
            .ok_or_else(|| SimulatorError::unknown_tutorial(id))?;
        self.active = Some(index);
        log::debug!("active tutorial: {id}");
        Ok(&self.tutorials[index])
    }

    pub fn active(&self) -> Option<&Tutorial> {
        self.active.map(|index| &self.tutorials[index])
    }

    /// First incomplete step of the active tutorial
    pub fn next_step(&self) -> Option<&TutorialStep> {
        let index = self.active?;
        self.tutorials[index]
            .steps
            .iter()
            .zip(&self.completed[index])
            .find(|(_, done)| !**done)
            .map(|(step, _)| step)
    }

    pub fn is_step_complete(&self, tutorial_id: &str, step_id: &str) -> bool {
        self.position(tutorial_id)
            .and_then(|index| {
                let steps = &self.tutorials[index].steps;
                let step = steps.iter().position(|step| step.id == step_id)?;
                Some(self.completed[index][step])
            })
            .unwrap_or(false)
    }

    pub fn progress(&self, tutorial_id: &str) -> Option<Progress> {
        self.position(tutorial_id)
            .map(|index| self.progress_at(index))
    }

    /// Progress over every step of every tutorial
    pub fn overall(&self) -> Progress {
        (0..self.tutorials.len())
            .map(|index| self.progress_at(index))
            .sum()
    }

    pub fn is_tutorial_complete(&self, tutorial_id: &str) -> bool {
        self.progress(tutorial_id)
            .is_some_and(|progress| progress.is_complete())
    }

    /// Steps completed since the last call
    pub fn take_completed(&mut self) -> Vec<CompletedStep> {
        std::mem::take(&mut self.recent)
    }

    fn position(&self, tutorial_id: &str) -> Option<usize> {
        self.tutorials
            .iter()
            .position(|tutorial| tutorial.id == tutorial_id)
    }

    fn progress_at(&self, index: usize) -> Progress {
        let flags = &self.completed[index];
        Progress::new(flags.iter().filter(|done| **done).count(), flags.len())
    }
}

impl CommandObserver for TutorialTracker {
    fn on_command(&mut self, command: &str) {
        let Some(index) = self.active else {
            return;
        };
        let tutorial = &self.tutorials[index];
        for (step, done) in tutorial.steps.iter().zip(self.completed[index].iter_mut()) {
            if !*done && step.is_satisfied_by(command) {
                *done = true;
                log::debug!("tutorial step '{}' completed by '{command}'", step.id);
                self.recent.push(CompletedStep {
                    tutorial_id: tutorial.id.clone(),
                    step_id: step.id.clone(),
                    feedback: step.feedback.success.clone(),
                });
            }
        }
    }
}
