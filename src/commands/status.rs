use crate::commands::{HandlerResult, Outcome};
use crate::core::ids::IdSource;
use crate::core::model::Repository;

/// `git status`: staged files first, then modified files that are not staged
pub fn execute_status(_args: &[String], repo: &Repository, _ids: &mut dyn IdSource) -> HandlerResult {
    Ok(Outcome::message(render_status(repo)))
}

pub fn render_status(repo: &Repository) -> String {
    let mut lines = vec![format!("On branch {}", repo.current_branch_name())];

    let files = repo.files();
    let staged: Vec<&str> = files
        .iter()
        .filter(|(_, file)| file.staged)
        .map(|(path, _)| path.as_str())
        .collect();
    let modified: Vec<&str> = files
        .iter()
        .filter(|(_, file)| file.modified)
        .map(|(path, _)| path.as_str())
        .collect();

    if staged.is_empty() && modified.is_empty() {
        lines.push("nothing to commit, working tree clean".to_string());
        return lines.join("\n");
    }

    if !staged.is_empty() {
        lines.push(String::new());
        lines.push("Changes to be committed:".to_string());
        lines.push("  (use \"git restore --staged <file>...\" to unstage)".to_string());
        lines.extend(staged.iter().map(|path| format!("\tmodified:   {path}")));
    }

    if !modified.is_empty() {
        lines.push(String::new());
        lines.push("Changes not staged for commit:".to_string());
        lines.push("  (use \"git add <file>...\" to update what will be committed)".to_string());
        lines.extend(modified.iter().map(|path| format!("\tmodified:   {path}")));
    }

    lines.join("\n")
}
