//! Command reference shown by `git-simulator reference`.
//!
//! Entries ship as embedded JSON and are parsed on demand.

use crate::core::error::{Result, SimulatorError};
use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("../../data/commands.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandReference {
    pub name: String,
    pub description: String,
    pub syntax: String,
    pub examples: Vec<String>,
}

impl CommandReference {
    /// Matches `git add` as well as the bare `add`
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name == query || self.name.strip_prefix("git ") == Some(query)
    }
}

pub fn load_catalog() -> Result<Vec<CommandReference>> {
    serde_json::from_str(CATALOG_JSON).map_err(|source| SimulatorError::InvalidData {
        name: "commands.json",
        source,
    })
}

pub fn find_reference(name: &str) -> Result<CommandReference> {
    load_catalog()?
        .into_iter()
        .find(|entry| entry.matches(name))
        .ok_or_else(|| SimulatorError::unknown_reference(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses() {
        let catalog = load_catalog().unwrap();
        assert_eq!(catalog.len(), 21);
        assert!(catalog.iter().all(|entry| entry.name.starts_with("git ")));
        assert!(catalog.iter().all(|entry| !entry.examples.is_empty()));
    }

    #[test]
    fn test_lookup_by_full_or_bare_name() {
        assert_eq!(find_reference("git add").unwrap().name, "git add");
        assert_eq!(find_reference("cherry-pick").unwrap().name, "git cherry-pick");
        assert!(matches!(
            find_reference("frobnicate").unwrap_err(),
            SimulatorError::UnknownReference { .. }
        ));
    }
}
