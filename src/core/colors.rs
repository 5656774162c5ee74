//! Color scheme for working-tree state and branch names.
//!
//! # Public API
//! - [`FileState`]: display state derived from a file's flags
//! - [`get_state_color_style`]: color function for a state
//! - [`get_colored_path`]: apply the state color to a path
//! - [`get_colored_branch`]: branch name styling, current branch emphasized
//!
//! # Color Scheme
//! - **Staged**: green
//! - **Modified**: yellow
//! - **Clean**: default terminal color
//! - **Branches**: blue, bold when checked out

use crate::core::model::FileEntry;
use colored::*;

/// How a file is presented. A staged file counts as staged even when it is also modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Clean,
    Modified,
    Staged,
}

impl FileState {
    pub fn of(file: &FileEntry) -> Self {
        if file.staged {
            Self::Staged
        } else if file.modified {
            Self::Modified
        } else {
            Self::Clean
        }
    }

    /// Fixed-width marker shown before a path
    pub fn marker(self) -> &'static str {
        match self {
            Self::Clean => "  ",
            Self::Modified => "M ",
            Self::Staged => "A ",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Modified => "modified",
            Self::Staged => "staged",
        }
    }
}

/// Returns a closure applying the color for `state` to any text
pub fn get_state_color_style(state: FileState) -> Box<dyn Fn(&str) -> ColoredString> {
    match state {
        FileState::Clean => Box::new(|text: &str| text.normal()),
        FileState::Modified => Box::new(|text: &str| text.yellow()),
        FileState::Staged => Box::new(|text: &str| text.green()),
    }
}

pub fn get_colored_path(state: FileState, path: &str) -> ColoredString {
    get_state_color_style(state)(path)
}

/// Colored marker for legend display
pub fn get_legend_state(state: FileState) -> ColoredString {
    get_state_color_style(state)(state.marker())
}

pub fn get_colored_branch(name: &str, current: bool) -> ColoredString {
    if current {
        name.blue().bold()
    } else {
        name.blue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(modified: bool, staged: bool) -> FileEntry {
        FileEntry {
            modified,
            staged,
            ..FileEntry::clean("a.txt", "")
        }
    }

    #[test]
    fn test_state_from_flags() {
        assert_eq!(FileState::of(&file(false, false)), FileState::Clean);
        assert_eq!(FileState::of(&file(true, false)), FileState::Modified);
        assert_eq!(FileState::of(&file(true, true)), FileState::Staged);
        assert_eq!(FileState::of(&file(false, true)), FileState::Staged);
    }

    #[test]
    fn test_markers_are_aligned() {
        for state in [FileState::Clean, FileState::Modified, FileState::Staged] {
            assert_eq!(state.marker().len(), 2);
        }
    }

    #[test]
    fn test_colored_text_keeps_content() {
        colored::control::set_override(false);
        assert_eq!(get_colored_path(FileState::Staged, "README.md").to_string(), "README.md");
        assert_eq!(get_colored_branch("main", true).to_string(), "main");
        assert_eq!(get_legend_state(FileState::Modified).to_string(), "M ");
    }
}
