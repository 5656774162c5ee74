//! User preferences stored as JSON in the simulator's config directory.
//!
//! Loading never writes: a missing file yields the defaults. The shell saves the
//! file when it has something to remember (the last tutorial).

use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, SimulatorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_PROMPT: &str = "user@github-simulator:~$";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SimulatorConfig {
    pub prompt: String,
    pub color: bool,
    pub tutorial_feedback: bool,
    pub last_tutorial: Option<String>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            color: true,
            tutorial_feedback: true,
            last_tutorial: None,
        }
    }
}

impl SimulatorConfig {
    /// Default location, `<config dir>/git-simulator/config.json`
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE))
    }

    /// Load from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|source| SimulatorError::config_read_failed(path, source))?;
        serde_json::from_str(&content)
            .map_err(|source| SimulatorError::config_parse_failed(path, source))
    }

    /// Write pretty JSON to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| SimulatorError::config_write_failed(path, source))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|source| SimulatorError::config_write_failed(path, source))?;
        Ok(())
    }
}
