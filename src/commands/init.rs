use crate::commands::{HandlerResult, Outcome};
use crate::core::ids::IdSource;
use crate::core::model::Repository;

/// `git init`: acknowledges without bootstrapping anything
pub fn execute_init(_args: &[String], _repo: &Repository, _ids: &mut dyn IdSource) -> HandlerResult {
    Ok(Outcome::message("Initialized empty Git repository in .git/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{run, seed};

    #[test]
    fn test_init_leaves_repository_alone() {
        let repo = seed();
        let outcome = run(execute_init, &[], &repo).unwrap();
        assert!(outcome.message.contains("Initialized empty Git repository"));
        assert!(outcome.repository.is_none());
    }
}
