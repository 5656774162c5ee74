//! In-memory repository model.
//!
//! This module defines the data structures the interpreter reads and replaces:
//! files and directories with their `modified`/`staged` flags, branches with their
//! commit history, and remotes.
//!
//! # Public API
//! - [`Repository`]: root aggregate with read accessors for the presentation layer
//! - [`FileSystemEntry`], [`FileEntry`], [`DirectoryEntry`]: the working tree
//! - [`Branch`], [`Commit`], [`FileChange`], [`ChangeKind`]: history
//! - [`Remote`]: a named URL
//!
//! # Invariants
//! - A repository always has at least one branch, and the current branch is one of them.
//! - A branch always has at least one commit, and its head is the id of the last one.
//!
//! Both are enforced by construction: [`Repository::new`] takes a root branch,
//! [`Branch`] can only be created from a root commit or by forking, and commits are
//! appended through [`Branch::push_commit`], which advances the head.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Number of characters shown when a commit id is abbreviated
pub const SHORT_ID_LEN: usize = 7;

/// Abbreviate a commit id for console output
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub content: String,
    pub modified: bool,
    pub staged: bool,
}

impl FileEntry {
    /// A committed file with no pending changes
    pub fn clean(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            modified: false,
            staged: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub children: Vec<FileSystemEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileSystemEntry {
    File(FileEntry),
    Directory(DirectoryEntry),
}

impl FileSystemEntry {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::File(FileEntry::clean(name, content))
    }

    pub fn directory(name: impl Into<String>, children: Vec<FileSystemEntry>) -> Self {
        Self::Directory(DirectoryEntry {
            name: name.into(),
            children,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => &file.name,
            Self::Directory(dir) => &dir.name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Add,
    Modify,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    pub path: String,
    pub kind: ChangeKind,
    pub content: Option<String>,
}

impl FileChange {
    pub fn new(path: impl Into<String>, kind: ChangeKind, content: Option<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            content,
        }
    }
}

/// Immutable snapshot record. New state is expressed by appending commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub changes: Vec<FileChange>,
}

impl Commit {
    pub fn new(
        id: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
        changes: Vec<FileChange>,
    ) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            timestamp,
            changes,
        }
    }

    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    name: String,
    commit_history: Vec<Commit>,
    head: String,
}

impl Branch {
    /// Bootstrap a branch from its first commit
    pub fn new(name: impl Into<String>, root: Commit) -> Self {
        Self {
            name: name.into(),
            head: root.id.clone(),
            commit_history: vec![root],
        }
    }

    /// Build a branch from a chronological history, oldest first.
    /// Returns `None` for an empty history.
    pub fn from_history(name: impl Into<String>, history: Vec<Commit>) -> Option<Self> {
        let head = history.last()?.id.clone();
        Some(Self {
            name: name.into(),
            commit_history: history,
            head,
        })
    }

    /// New branch sharing this branch's full history and head
    pub fn fork(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit_history: self.commit_history.clone(),
            head: self.head.clone(),
        }
    }

    pub fn push_commit(&mut self, commit: Commit) {
        self.head = commit.id.clone();
        self.commit_history.push(commit);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn head(&self) -> &str {
        &self.head
    }

    /// Commits oldest first
    pub fn commits(&self) -> &[Commit] {
        &self.commit_history
    }

    pub fn last_commit(&self) -> Option<&Commit> {
        self.commit_history.last()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Remote {
    pub name: String,
    pub url: String,
}

impl Remote {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    name: String,
    description: String,
    file_system: Vec<FileSystemEntry>,
    branches: Vec<Branch>,
    current_branch: String,
    remotes: Vec<Remote>,
}

impl Repository {
    /// Create a repository whose only branch is `root`, checked out
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        file_system: Vec<FileSystemEntry>,
        root: Branch,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            file_system,
            current_branch: root.name.clone(),
            branches: vec![root],
            remotes: Vec::new(),
        }
    }

    pub fn with_remote(mut self, remote: Remote) -> Self {
        self.remotes.push(remote);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Top-level working tree entries
    pub fn file_system(&self) -> &[FileSystemEntry] {
        &self.file_system
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn current_branch_name(&self) -> &str {
        &self.current_branch
    }

    pub fn current_branch(&self) -> &Branch {
        // The constructor and every mutator keep `current_branch` pointing at an entry.
        let index = self
            .branch_index(&self.current_branch)
            .unwrap_or_default();
        &self.branches[index]
    }

    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.name == name)
    }

    pub fn has_branch(&self, name: &str) -> bool {
        self.branch(name).is_some()
    }

    pub fn remotes(&self) -> &[Remote] {
        &self.remotes
    }

    pub fn remote(&self, name: &str) -> Option<&Remote> {
        self.remotes.iter().find(|remote| remote.name == name)
    }

    /// Every file in tree order, with its `/`-joined path
    pub fn files(&self) -> Vec<(String, &FileEntry)> {
        let mut files = Vec::new();
        collect_files(&self.file_system, "", &mut files);
        files
    }

    pub fn staged_paths(&self) -> Vec<String> {
        self.files()
            .into_iter()
            .filter(|(_, file)| file.staged)
            .map(|(path, _)| path)
            .collect()
    }

    pub fn modified_paths(&self) -> Vec<String> {
        self.files()
            .into_iter()
            .filter(|(_, file)| file.modified)
            .map(|(path, _)| path)
            .collect()
    }

    /// Files that are modified or staged, i.e. would be lost by a forced update
    pub fn changed_paths(&self) -> Vec<String> {
        self.files()
            .into_iter()
            .filter(|(_, file)| file.modified || file.staged)
            .map(|(path, _)| path)
            .collect()
    }

    /// Look up an entry by `/`-separated path. A trailing `/` is ignored.
    pub fn entry(&self, path: &str) -> Option<&FileSystemEntry> {
        let mut segments = path_segments(path);
        let first = segments.next()?;
        let mut entry = self.file_system.iter().find(|e| e.name() == first)?;
        for segment in segments {
            match entry {
                FileSystemEntry::Directory(dir) => {
                    entry = dir.children.iter().find(|e| e.name() == segment)?;
                }
                FileSystemEntry::File(_) => return None,
            }
        }
        Some(entry)
    }

    /// Whether `path` names the project root or an existing entry
    pub fn has_path(&self, path: &str) -> bool {
        is_root(path) || self.entry(path).is_some()
    }

    pub fn file(&self, path: &str) -> Option<&FileEntry> {
        match self.entry(path)? {
            FileSystemEntry::File(file) => Some(file),
            FileSystemEntry::Directory(_) => None,
        }
    }

    // Mutators used by the handlers on their private copy before it is installed.

    pub(crate) fn add_branch(&mut self, branch: Branch) {
        self.branches.push(branch);
    }

    /// Returns false when no branch has that name
    pub(crate) fn switch_to(&mut self, name: &str) -> bool {
        if self.has_branch(name) {
            self.current_branch = name.to_string();
            true
        } else {
            false
        }
    }

    /// Removes a branch other than the current one
    pub(crate) fn remove_branch(&mut self, name: &str) -> Option<Branch> {
        if name == self.current_branch {
            return None;
        }
        let index = self.branch_index(name)?;
        Some(self.branches.remove(index))
    }

    pub(crate) fn current_branch_mut(&mut self) -> &mut Branch {
        let index = self
            .branch_index(&self.current_branch)
            .unwrap_or_default();
        &mut self.branches[index]
    }

    pub(crate) fn add_remote(&mut self, remote: Remote) {
        self.remotes.push(remote);
    }

    pub(crate) fn remove_remote(&mut self, name: &str) -> Option<Remote> {
        let index = self.remotes.iter().position(|remote| remote.name == name)?;
        Some(self.remotes.remove(index))
    }

    pub(crate) fn file_mut(&mut self, path: &str) -> Option<&mut FileEntry> {
        let mut segments = path_segments(path).peekable();
        let mut entries = &mut self.file_system;
        while let Some(segment) = segments.next() {
            let current = entries;
            let entry = current.iter_mut().find(|e| e.name() == segment)?;
            match entry {
                FileSystemEntry::File(file) if segments.peek().is_none() => return Some(file),
                FileSystemEntry::Directory(dir) => entries = &mut dir.children,
                FileSystemEntry::File(_) => return None,
            }
        }
        None
    }

    /// The children list of the directory at `path`, or the root list for ""
    pub(crate) fn directory_mut(&mut self, path: &str) -> Option<&mut Vec<FileSystemEntry>> {
        let mut entries = &mut self.file_system;
        for segment in path_segments(path) {
            let current = entries;
            let entry = current.iter_mut().find(|e| e.name() == segment)?;
            match entry {
                FileSystemEntry::Directory(dir) => entries = &mut dir.children,
                FileSystemEntry::File(_) => return None,
            }
        }
        Some(entries)
    }

    /// Apply `update` to every file whose path starts with `prefix` ("" for all)
    pub(crate) fn update_files<F>(&mut self, prefix: &str, mut update: F)
    where
        F: FnMut(&str, &mut FileEntry),
    {
        let prefix = path_segments(prefix).collect::<Vec<_>>().join("/");
        update_files_in(&mut self.file_system, "", &prefix, &mut update);
    }

    pub(crate) fn replace_contents(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        file_system: Vec<FileSystemEntry>,
        root: Branch,
        remotes: Vec<Remote>,
    ) {
        self.name = name.into();
        self.description = description.into();
        self.file_system = file_system;
        self.current_branch = root.name.clone();
        self.branches = vec![root];
        self.remotes = remotes;
    }

    fn branch_index(&self, name: &str) -> Option<usize> {
        self.branches.iter().position(|branch| branch.name == name)
    }
}

fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty() && *segment != ".")
}

/// Empty, `.` and `./` all name the project root
fn is_root(path: &str) -> bool {
    path_segments(path).next().is_none()
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

fn collect_files<'a>(
    entries: &'a [FileSystemEntry],
    parent: &str,
    out: &mut Vec<(String, &'a FileEntry)>,
) {
    for entry in entries {
        match entry {
            FileSystemEntry::File(file) => out.push((join_path(parent, &file.name), file)),
            FileSystemEntry::Directory(dir) => {
                collect_files(&dir.children, &join_path(parent, &dir.name), out)
            }
        }
    }
}

fn update_files_in<F>(entries: &mut [FileSystemEntry], parent: &str, prefix: &str, update: &mut F)
where
    F: FnMut(&str, &mut FileEntry),
{
    for entry in entries {
        match entry {
            FileSystemEntry::File(file) => {
                let path = join_path(parent, &file.name);
                if is_within(&path, prefix) {
                    update(&path, file);
                }
            }
            FileSystemEntry::Directory(dir) => {
                let path = join_path(parent, &dir.name);
                update_files_in(&mut dir.children, &path, prefix, update);
            }
        }
    }
}

/// Whether `path` equals `prefix` or lies below it
fn is_within(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    prefix.is_empty()
        || path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}
