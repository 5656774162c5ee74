//! Interactive shell: prompt, read a line, run it, render the result.
//!
//! Generic over the input and output streams so the loop can be driven by tests.
//! Lines starting with `:` are shell meta commands and never reach the
//! interpreter or the tutorial tracker.

use crate::core::config::SimulatorConfig;
use crate::core::error::Result;
use crate::core::interpreter::Effect;
use crate::core::output::{render_output, render_prompt};
use crate::core::session::Session;
use crate::core::view::render_repository;
use crate::tutorial::TutorialTracker;
use colored::*;
use std::io::{BufRead, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";
const META_HELP: &str = ":repo      show files, branches, commits and remotes\n\
                         :progress  show tutorial progress\n\
                         :help      show this help\n\
                         exit       leave the simulator";

pub struct Terminal {
    session: Session,
    tracker: TutorialTracker,
    config: SimulatorConfig,
}

impl Terminal {
    pub fn new(session: Session, tracker: TutorialTracker, config: SimulatorConfig) -> Self {
        Self {
            session,
            tracker,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tracker(&self) -> &TutorialTracker {
        &self.tracker
    }

    /// Read and execute lines until `exit`, `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "Git simulator: {} ({})",
            self.session.repository().name(),
            self.session.repository().description()
        )?;
        writeln!(out, "Type git commands, ':help' for shell commands, 'exit' to leave.")?;
        self.write_next_step(out)?;

        let mut line = String::new();
        loop {
            write!(out, "{}", render_prompt(&self.config.prompt))?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            match line.trim() {
                "exit" | "quit" => break,
                ":help" => writeln!(out, "{META_HELP}")?,
                ":repo" => writeln!(out, "{}", render_repository(self.session.repository()))?,
                ":progress" => self.write_progress(out)?,
                command => self.execute(command, out)?,
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: &str, out: &mut W) -> Result<()> {
        let Some(response) = self.session.execute(command, &mut self.tracker) else {
            return Ok(());
        };

        if response.effect == Effect::ClearScreen {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        if !response.output.is_empty() {
            writeln!(out, "{}", render_output(&response.output))?;
        }

        let completed = self.tracker.take_completed();
        if completed.is_empty() {
            return Ok(());
        }
        if self.config.tutorial_feedback {
            for step in &completed {
                writeln!(out, "{} {}", "✓".green(), step.feedback)?;
            }
        }
        if let Some(tutorial) = self.tracker.active() {
            if self.tracker.is_tutorial_complete(&tutorial.id) {
                writeln!(out, "{} {}", "Tutorial complete:".green().bold(), tutorial.title)?;
                return Ok(());
            }
        }
        self.write_next_step(out)
    }

    fn write_next_step<W: Write>(&self, out: &mut W) -> Result<()> {
        if let (Some(tutorial), Some(step)) = (self.tracker.active(), self.tracker.next_step()) {
            writeln!(out, "{} {}", format!("[{}]", tutorial.title).cyan(), step.instruction)?;
        }
        Ok(())
    }

    fn write_progress<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Overall: {}", self.tracker.overall())?;
        for tutorial in self.tracker.tutorials() {
            if let Some(progress) = self.tracker.progress(&tutorial.id) {
                let marker = if progress.is_complete() { "✓" } else { " " };
                writeln!(out, "  {marker} {:<45} {progress}", tutorial.title)?;
            }
        }
        Ok(())
    }
}
