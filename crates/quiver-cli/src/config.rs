//! Workspace configuration (`quiver.toml`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub workspace: WorkspaceSection,
}

/// `[workspace]` table: subdirectory names and the operations document
/// path, each defaulting field-wise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSection {
    #[serde(default = "default_environments_dir")]
    pub environments: String,
    #[serde(default = "default_requests_dir")]
    pub requests: String,
    #[serde(default = "default_operations_file")]
    pub operations: String,
}

impl Default for WorkspaceSection {
    fn default() -> Self {
        Self {
            environments: default_environments_dir(),
            requests: default_requests_dir(),
            operations: default_operations_file(),
        }
    }
}

fn default_environments_dir() -> String {
    "environments".to_string()
}

fn default_requests_dir() -> String {
    "requests".to_string()
}

fn default_operations_file() -> String {
    "operations.json".to_string()
}

/// Load `quiver.toml` from the workspace root. A missing file yields the
/// defaults; a present but malformed file is an error.
pub fn load_config(root: &Path) -> Result<WorkspaceConfig> {
    let path = root.join("quiver.toml");
    if !path.exists() {
        return Ok(WorkspaceConfig::default());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.workspace.environments, "environments");
        assert_eq!(config.workspace.requests, "requests");
        assert_eq!(config.workspace.operations, "operations.json");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("quiver.toml"),
            "[workspace]\nrequests = \"queries\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.workspace.requests, "queries");
        assert_eq!(config.workspace.environments, "environments");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("quiver.toml"), "[workspace\n").unwrap();
        assert!(load_config(dir.path()).is_err());
    }
}
