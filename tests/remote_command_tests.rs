use predicates::prelude::*;
use pretty_assertions::assert_eq;

mod common;
use common::{assertions, fixtures::*, session::*};
use git_simulator::Remote;

#[cfg(test)]
mod remote_command_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_without_remotes() -> anyhow::Result<()> {
        let mut session = new_session();
        let before = session.repository().clone();
        let text = run_err(&mut session, "git push");
        assert!(assertions::no_push_destination().eval(&text));
        assert_eq!(session.repository(), &before);
        Ok(())
    }

    #[test]
    fn test_clone_replaces_everything() -> anyhow::Result<()> {
        let mut session = session_with_feature_work();
        let url = "https://example.com/foo.git";
        let text = run_ok(&mut session, &format!("git clone {url}"));
        assert!(text.starts_with("Cloning into 'foo'..."));

        let repo = session.repository();
        assert_eq!(repo.name(), "foo");
        assert_eq!(repo.branches().len(), 1);
        assert_eq!(repo.current_branch_name(), "main");
        assert_eq!(repo.current_branch().commits().len(), 1);
        assert_eq!(repo.remotes(), &[Remote::new("origin", url)]);
        assertions::assert_heads_consistent(repo);
        Ok(())
    }

    #[test]
    fn test_remote_add_and_list() -> anyhow::Result<()> {
        let mut session = session_with_origin();
        assert_eq!(run_ok(&mut session, "git remote"), "origin");
        let verbose = run_ok(&mut session, "git remote -v");
        assert!(predicate::str::contains(format!("origin\t{ORIGIN_URL} (fetch)")).eval(&verbose));
        assert!(predicate::str::contains(format!("origin\t{ORIGIN_URL} (push)")).eval(&verbose));

        let before = session.repository().clone();
        assert_eq!(
            run_err(&mut session, "git remote add origin https://elsewhere.example/x.git"),
            "error: remote origin already exists."
        );
        assert_eq!(session.repository(), &before);
        Ok(())
    }

    #[test]
    fn test_push_transcript() -> anyhow::Result<()> {
        let mut session = session_with_origin();
        run_all(
            &mut session,
            &["touch README.md", "git commit -am \"Docs\""],
        );
        let text = run_ok(&mut session, "git push -u origin main");
        assert!(text.contains(&format!("To {ORIGIN_URL}")));
        assert!(text.contains("   a1b2c3d..c000000 main -> main"));
        assert!(text.ends_with("branch 'main' set up to track 'origin/main'."));

        assert!(run_err(&mut session, "git push upstream")
            .starts_with("fatal: 'upstream' does not appear to be a git repository"));
        Ok(())
    }

    #[test]
    fn test_pull_blocked_by_local_changes() -> anyhow::Result<()> {
        let mut session = session_with_origin();
        run_all(&mut session, &["touch README.md", "touch src/app.js", "git add src/app.js"]);
        let before = session.repository().clone();

        let text = run_err(&mut session, "git pull");
        assert!(text.contains("\tREADME.md\n\tsrc/app.js\n"));
        assert!(text.ends_with("Aborting"));
        assert_eq!(session.repository(), &before);

        run_ok(&mut session, "git pull --force");
        let repo = session.repository();
        assert_eq!(
            repo.current_branch().last_commit().expect("update").message,
            "Update from remote repository"
        );
        assertions::assert_heads_consistent(repo);
        Ok(())
    }

    #[test]
    fn test_pull_without_remote() -> anyhow::Result<()> {
        let mut session = new_session();
        assert_eq!(
            run_err(&mut session, "git pull"),
            "fatal: No configured pull destination."
        );
        Ok(())
    }

    #[test]
    fn test_reset_to_remote_branch() -> anyhow::Result<()> {
        let mut session = session_with_edits(&["index.html"]);
        let text = run_ok(&mut session, "git reset --hard origin/main");
        assert_eq!(text, "HEAD is now at c000000 Reset to origin/main");
        let repo = session.repository();
        assert!(repo.changed_paths().is_empty());
        assertions::assert_heads_consistent(repo);
        Ok(())
    }
}
