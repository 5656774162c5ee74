//! Command line tokenizing and argument inspection.
//!
//! This module provides [`ArgsParser`], which turns a raw input line into
//! whitespace-separated tokens and offers the small helpers every command
//! handler uses to inspect its arguments.
//!
//! # Public API
//! - [`ArgsParser::tokenize`]: split a line into tokens
//! - [`ArgsParser::has_flag`]: check for any of a set of switches
//! - [`ArgsParser::positionals`]: arguments that are not switches
//!
//! There is no shell quoting: `"two words"` yields two tokens. Handlers that
//! accept quoted text (commit messages) reassemble it themselves.

/// Centralized tokenizing and argument helpers for command handlers
pub struct ArgsParser;

impl ArgsParser {
    /// Split a raw input line into tokens
    ///
    /// # Examples
    /// ```
    /// use git_simulator::core::parser::ArgsParser;
    ///
    /// let tokens = ArgsParser::tokenize("  git  commit -m \"fix bug\" ");
    /// assert_eq!(tokens, vec!["git", "commit", "-m", "\"fix", "bug\""]);
    /// assert!(ArgsParser::tokenize("   ").is_empty());
    /// ```
    pub fn tokenize(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    /// True when any of `flags` appears among `args`
    pub fn has_flag(args: &[String], flags: &[&str]) -> bool {
        args.iter().any(|arg| flags.contains(&arg.as_str()))
    }

    /// Arguments that do not start with `-`, in order
    pub fn positionals(args: &[String]) -> Vec<&str> {
        args.iter()
            .map(String::as_str)
            .filter(|arg| !Self::is_switch(arg))
            .collect()
    }

    /// Arguments starting with `-`, in order
    pub fn switches(args: &[String]) -> Vec<&str> {
        args.iter()
            .map(String::as_str)
            .filter(|arg| Self::is_switch(arg))
            .collect()
    }

    pub fn is_switch(arg: &str) -> bool {
        arg.starts_with('-') && arg.len() > 1
    }
}
