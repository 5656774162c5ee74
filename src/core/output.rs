//! Command output contract and terminal formatting.
//!
//! Every interpreted line produces a [`CommandOutput`]: the text the real tool
//! would print plus an error flag. The helpers below render that output, and
//! the simulator's own messages, with a consistent color scheme.
//!
//! # Design Principles
//! - **Errors inline**: errored output stays in the same scrollback, styled red
//! - **Plain text in, styling out**: handlers never emit color codes themselves
//! - **Process messages are distinct**: simulator failures use the `✕ Error:` prefix

use colored::*;

/// Text produced by one command, paired with its error flag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub text: String,
    pub is_error: bool,
}

impl CommandOutput {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Render command output for the terminal, red when it is an error
pub fn render_output(output: &CommandOutput) -> String {
    let text = output.text.trim_end_matches('\n');
    if output.is_error {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

/// Print command output unless it is empty
pub fn print_output(output: &CommandOutput) {
    if !output.is_empty() {
        println!("{}", render_output(output));
    }
}

/// Render the shell prompt
pub fn render_prompt(prompt: &str) -> String {
    format!("{} ", prompt.blue())
}

/// Formats and prints a simulator error
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with a green checkmark
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("{}", message.white());
}

/// Formats and prints a section header
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_error_constructors() {
        let ok = CommandOutput::success("done");
        assert!(!ok.is_error);
        let err = CommandOutput::error("failed");
        assert!(err.is_error);
        assert!(CommandOutput::default().is_empty());
    }

    #[test]
    fn test_render_output_trims_trailing_newlines() {
        colored::control::set_override(false);
        let output = CommandOutput::success("* main\n  feature\n");
        assert_eq!(render_output(&output), "* main\n  feature");
        let output = CommandOutput::error("fatal: nope\n");
        assert_eq!(render_output(&output), "fatal: nope");
    }

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_error("Test error message");
        print_success("Operation completed");
        print_info("Information message");
        print_section_header("Branches");
        print_output(&CommandOutput::default());
    }

    #[test]
    fn test_prompt_contains_text() {
        assert!(render_prompt("user@sim:~$").contains("user@sim:~$"));
    }
}
