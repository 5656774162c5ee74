use crate::commands::{new_commit, HandlerResult, Outcome};
use crate::core::error::CommandError;
use crate::core::ids::IdSource;
use crate::core::model::{short_id, ChangeKind, FileChange, Repository};

const QUOTES: [char; 2] = ['"', '\''];

/// `git commit -m <message>`, also `-am` and `-a -m`
///
/// Records one `modify` change per staged file, advances the branch head and
/// clears both flags on exactly the committed files. With nothing staged the
/// repository is left alone and the clean-tree message is returned as normal output.
pub fn execute_commit(args: &[String], repo: &Repository, ids: &mut dyn IdSource) -> HandlerResult {
    let stage_modified = args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-a" | "--all" | "-am"));
    let message_at = args
        .iter()
        .position(|arg| matches!(arg.as_str(), "-m" | "-am" | "--message"))
        .ok_or(CommandError::MissingCommitMessage)?;
    let message = parse_message(&args[message_at + 1..])?;

    let mut updated = repo.clone();
    if stage_modified {
        updated.update_files("", |_, file| {
            if file.modified {
                file.staged = true;
            }
        });
    }

    let changes: Vec<FileChange> = updated
        .files()
        .into_iter()
        .filter(|(_, file)| file.staged)
        .map(|(path, file)| FileChange::new(path, ChangeKind::Modify, Some(file.content.clone())))
        .collect();

    if changes.is_empty() {
        return Ok(Outcome::message("nothing to commit, working tree clean"));
    }

    let count = changes.len();
    let commit = new_commit(ids, message.clone(), changes);
    let id = commit.id.clone();
    updated.current_branch_mut().push_commit(commit);
    updated.update_files("", |_, file| {
        if file.staged {
            file.staged = false;
            file.modified = false;
        }
    });

    log::debug!("committed {count} file(s) as {id}");
    let noun = if count == 1 { "file" } else { "files" };
    Ok(Outcome::replaced(
        format!(
            "[{} {}] {}\n {} {} changed",
            updated.current_branch_name(),
            short_id(&id),
            message,
            count,
            noun
        ),
        updated,
    ))
}

/// Rebuild the message from the tokens following `-m`.
///
/// A token opening with a quote is joined with the following tokens up to the one
/// closing with the same quote. Unquoted messages are a single token.
fn parse_message(tokens: &[String]) -> Result<String, CommandError> {
    let first = tokens.first().ok_or(CommandError::MissingCommitMessage)?;

    let Some(quote) = first.chars().next().filter(|c| QUOTES.contains(c)) else {
        if first.contains(QUOTES) {
            return Err(CommandError::EmbeddedQuote);
        }
        return Ok(first.clone());
    };

    let closing = if first.len() > 1 && first.ends_with(quote) {
        0
    } else {
        tokens
            .iter()
            .skip(1)
            .position(|token| token.ends_with(quote))
            .map(|offset| offset + 1)
            .ok_or(CommandError::UnclosedQuote)?
    };

    let joined = tokens[..=closing].join(" ");
    let inner = &joined[quote.len_utf8()..joined.len() - quote.len_utf8()];
    if inner.contains(quote) {
        return Err(CommandError::EmbeddedQuote);
    }
    if inner.trim().is_empty() {
        return Err(CommandError::MissingCommitMessage);
    }
    Ok(inner.to_string())
}
