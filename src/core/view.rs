//! Text rendering of the repository for the shell's `:repo` view.
//!
//! Reads the model only through its public accessors: file tree with state
//! markers, branch list with the current marker, commits of the current branch
//! and configured remotes.

use crate::core::colors::{get_colored_branch, get_colored_path, get_legend_state, FileState};
use crate::core::model::{FileSystemEntry, Repository};

pub fn render_repository(repo: &Repository) -> String {
    let mut lines = vec![format!("{} - {}", repo.name(), repo.description())];

    lines.push(String::new());
    lines.push("Files:".to_string());
    render_tree(repo.file_system(), 1, &mut lines);

    lines.push(String::new());
    lines.push("Branches:".to_string());
    for branch in repo.branches() {
        let current = branch.name() == repo.current_branch_name();
        let marker = if current { "* " } else { "  " };
        lines.push(format!(
            "  {marker}{} ({} commits)",
            get_colored_branch(branch.name(), current),
            branch.commits().len()
        ));
    }

    lines.push(String::new());
    lines.push(format!("Commits on {}:", repo.current_branch_name()));
    for commit in repo.current_branch().commits().iter().rev() {
        lines.push(format!(
            "  {} {} ({})",
            commit.short_id(),
            commit.message,
            commit.timestamp.format("%Y-%m-%d %H:%M")
        ));
    }

    lines.push(String::new());
    lines.push("Remotes:".to_string());
    if repo.remotes().is_empty() {
        lines.push("  (none)".to_string());
    }
    for remote in repo.remotes() {
        lines.push(format!("  {} {}", remote.name, remote.url));
    }

    lines.push(String::new());
    lines.push(format!(
        "Legend: {}{}  {}{}",
        get_legend_state(FileState::Modified),
        FileState::Modified.label(),
        get_legend_state(FileState::Staged),
        FileState::Staged.label()
    ));

    lines.join("\n")
}

fn render_tree(entries: &[FileSystemEntry], depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for entry in entries {
        match entry {
            FileSystemEntry::Directory(dir) => {
                lines.push(format!("{indent}  {}/", dir.name));
                render_tree(&dir.children, depth + 1, lines);
            }
            FileSystemEntry::File(file) => {
                let state = FileState::of(file);
                lines.push(format!(
                    "{indent}{}{}",
                    get_legend_state(state),
                    get_colored_path(state, &file.name)
                ));
            }
        }
    }
}
