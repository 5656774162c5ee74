//! Static repository data: the project every session starts from, the template a
//! simulated clone produces, and the illustrative branches used by the tutorials.

use crate::core::model::{Branch, ChangeKind, Commit, FileChange, FileSystemEntry, Repository};
use chrono::{DateTime, Duration, Utc};

const SEED_README: &str = "# My Project\n\nThis is a sample project for learning Git commands.";
const SEED_INDEX_HTML: &str = "<!DOCTYPE html>\n<html>\n<head>\n  <title>My Project</title>\n</head>\n<body>\n  <h1>Hello, Git!</h1>\n</body>\n</html>";
const SEED_STYLES: &str = "body {\n  font-family: Arial, sans-serif;\n  margin: 0;\n  padding: 20px;\n}\n\nh1 {\n  color: navy;\n}";
const SEED_APP_JS: &str = "console.log(\"Hello from the app!\");\n\nfunction init() {\n  console.log(\"App initialized\");\n}\n\ninit();";

/// Id of the first commit of the seed repository
pub const SEED_ROOT_ID: &str = "a1b2c3d";

/// Remote branch names shown by `git branch -r`
pub const REMOTE_BRANCHES: &[&str] = &[
    "origin/main",
    "origin/stable",
    "origin/feature/new-component",
    "origin/bugfix/login-issue",
];

/// The repository a new session starts with
pub fn initial_repository(now: DateTime<Utc>) -> Repository {
    let root = Commit::new(
        SEED_ROOT_ID,
        "Initial commit",
        now - Duration::days(1),
        vec![
            FileChange::new("README.md", ChangeKind::Add, Some(SEED_README.to_string())),
            FileChange::new(
                "index.html",
                ChangeKind::Add,
                Some(SEED_INDEX_HTML.to_string()),
            ),
        ],
    );

    Repository::new(
        "my-project",
        "A sample project for learning Git",
        vec![
            FileSystemEntry::file("README.md", SEED_README),
            FileSystemEntry::file("index.html", SEED_INDEX_HTML),
            FileSystemEntry::file("styles.css", SEED_STYLES),
            FileSystemEntry::directory("src", vec![FileSystemEntry::file("app.js", SEED_APP_JS)]),
        ],
        Branch::new("main", root),
    )
}

/// Working tree and single `main` branch of a freshly cloned project
pub fn cloned_project(
    project: &str,
    root_id: String,
    now: DateTime<Utc>,
) -> (Vec<FileSystemEntry>, Branch) {
    let readme = format!("# {project}\n\nThis is the README for the {project} project.");
    let package_json = format!(
        "{{\n  \"name\": \"{project}\",\n  \"version\": \"1.0.0\",\n  \"description\": \"A sample project\",\n  \"main\": \"index.js\",\n  \"scripts\": {{\n    \"dev\": \"vite\",\n    \"build\": \"vite build\",\n    \"test\": \"vitest run\"\n  }},\n  \"keywords\": [],\n  \"author\": \"\",\n  \"license\": \"MIT\"\n}}"
    );
    let index_js = "console.log(\"Hello from cloned repository!\");";

    let root = Commit::new(
        root_id,
        "Initial commit",
        now - Duration::days(1),
        vec![
            FileChange::new("README.md", ChangeKind::Add, Some(readme.clone())),
            FileChange::new("package.json", ChangeKind::Add, Some(package_json.clone())),
            FileChange::new("src/index.js", ChangeKind::Add, Some(index_js.to_string())),
        ],
    );

    let files = vec![
        FileSystemEntry::file("README.md", readme),
        FileSystemEntry::file("package.json", package_json),
        FileSystemEntry::directory("src", vec![FileSystemEntry::file("index.js", index_js)]),
    ];

    (files, Branch::new("main", root))
}

/// Synthetic commit appended when a seed branch is materialized
#[derive(Debug)]
pub struct SeedCommit {
    pub id: &'static str,
    pub message: &'static str,
    pub age_hours: i64,
}

/// A branch that `git checkout <name>` creates on demand when it does not exist yet
#[derive(Debug)]
pub struct SeedBranch {
    pub name: &'static str,
    pub base: &'static str,
    pub extra_commit: Option<SeedCommit>,
}

pub static SEED_BRANCHES: &[SeedBranch] = &[
    SeedBranch {
        name: "stable",
        base: "main",
        extra_commit: None,
    },
    SeedBranch {
        name: "feature/new-component",
        base: "main",
        extra_commit: Some(SeedCommit {
            id: "f1e2a3t4",
            message: "Add new component",
            age_hours: 12,
        }),
    },
];

pub fn seed_branch(name: &str) -> Option<&'static SeedBranch> {
    SEED_BRANCHES.iter().find(|seed| seed.name == name)
}

impl SeedBranch {
    /// Build the branch from its base in `repo`; `None` when the base is missing
    pub fn materialize(&self, repo: &Repository, now: DateTime<Utc>) -> Option<Branch> {
        let mut branch = repo.branch(self.base)?.fork(self.name);
        if let Some(extra) = &self.extra_commit {
            branch.push_commit(Commit::new(
                extra.id,
                extra.message,
                now - Duration::hours(extra.age_hours),
                Vec::new(),
            ));
        }
        Some(branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_repository_shape() {
        let repo = initial_repository(Utc::now());
        assert_eq!(repo.name(), "my-project");
        assert_eq!(repo.current_branch_name(), "main");
        assert_eq!(repo.current_branch().head(), SEED_ROOT_ID);
        assert!(repo.remotes().is_empty());
        let names: Vec<&str> = repo.file_system().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["README.md", "index.html", "styles.css", "src"]);
        assert!(repo.changed_paths().is_empty());
    }

    #[test]
    fn test_cloned_project_uses_project_name() {
        let (files, branch) = cloned_project("foo", "abc12345".to_string(), Utc::now());
        assert_eq!(files.len(), 3);
        assert_eq!(branch.name(), "main");
        assert_eq!(branch.head(), "abc12345");
        let root = &branch.commits()[0];
        assert_eq!(root.changes.len(), 3);
        assert_eq!(root.changes[2].path, "src/index.js");
        assert!(root.changes[0]
            .content
            .as_deref()
            .unwrap()
            .starts_with("# foo"));
    }

    #[test]
    fn test_seed_branch_lookup() {
        assert!(seed_branch("stable").is_some());
        assert!(seed_branch("feature/new-component").is_some());
        assert!(seed_branch("develop").is_none());
    }

    #[test]
    fn test_materialize_feature_branch_adds_commit() {
        let repo = initial_repository(Utc::now());
        let branch = seed_branch("feature/new-component")
            .unwrap()
            .materialize(&repo, Utc::now())
            .unwrap();
        assert_eq!(branch.commits().len(), 2);
        assert_eq!(branch.head(), "f1e2a3t4");
    }
}
