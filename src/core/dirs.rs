use crate::core::error::{Result, SimulatorError};
use std::path::PathBuf;

const APP_DIRECTORY: &str = "git-simulator";

/// Platform config directory for the simulator, following XDG on Unix-likes
pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|dir| dir.join(APP_DIRECTORY))
        .ok_or(SimulatorError::ConfigDirectoryNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_directory_is_namespaced() {
        if let Ok(dir) = get_config_directory() {
            assert!(dir.ends_with(APP_DIRECTORY));
        }
    }
}
