//! Workspace discovery: environments, request files, operations document.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::WorkspaceConfig;

/// Precondition failures caught before an interactive session starts.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("no environments found in {0}")]
    NoEnvironments(PathBuf),
    #[error("no request files for environment '{env}' in {dir}")]
    NoRequestFiles { env: String, dir: PathBuf },
    #[error("unknown environment '{0}'")]
    UnknownEnvironment(String),
    #[error("operations document not found at {0}")]
    MissingOperations(PathBuf),
}

/// One parsed environment definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub vars: BTreeMap<String, String>,
}

/// A discovered quiver workspace rooted at one directory.
pub struct Workspace {
    root: PathBuf,
    config: WorkspaceConfig,
}

impl Workspace {
    pub fn discover(root: &Path) -> Result<Self> {
        let config = crate::config::load_config(root)?;
        debug!(root = %root.display(), "workspace discovered");
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Environment names, sorted: the stem of every `.yaml`/`.yml` file in
    /// the environments directory. Each file must parse, so a broken
    /// definition fails here rather than mid-session.
    pub fn environments(&self) -> Result<Vec<String>> {
        let dir = self.root.join(&self.config.workspace.environments);
        let mut names = Vec::new();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => return Err(WorkspaceError::NoEnvironments(dir).into()),
        };
        for entry in entries {
            let path = entry?.path();
            let is_yaml = path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if !is_yaml {
                continue;
            }
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let _: Environment = serde_yaml::from_str(&raw)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        if names.is_empty() {
            return Err(WorkspaceError::NoEnvironments(dir).into());
        }
        names.sort();
        Ok(names)
    }

    /// Parsed definition of one environment.
    pub fn environment(&self, env: &str) -> Result<Environment> {
        let dir = self.root.join(&self.config.workspace.environments);
        let path = ["yaml", "yml"]
            .iter()
            .map(|ext| dir.join(format!("{env}.{ext}")))
            .find(|p| p.exists())
            .ok_or_else(|| WorkspaceError::UnknownEnvironment(env.to_string()))?;
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_yaml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Request file names for one environment, sorted for stability.
    pub fn request_files(&self, env: &str) -> Result<Vec<String>> {
        let dir = self.root.join(&self.config.workspace.requests).join(env);
        let entries = fs::read_dir(&dir).map_err(|_| WorkspaceError::NoRequestFiles {
            env: env.to_string(),
            dir: dir.clone(),
        })?;
        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file()
                && let Some(name) = entry.file_name().to_str()
            {
                files.push(name.to_string());
            }
        }
        if files.is_empty() {
            return Err(WorkspaceError::NoRequestFiles {
                env: env.to_string(),
                dir,
            }
            .into());
        }
        files.sort();
        Ok(files)
    }

    /// Path of the operations document, verified to exist.
    pub fn operations_path(&self) -> Result<PathBuf> {
        let path = self.root.join(&self.config.workspace.operations);
        if !path.exists() {
            return Err(WorkspaceError::MissingOperations(path).into());
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scaffold() -> TempDir {
        let dir = TempDir::new().unwrap();
        let envs = dir.path().join("environments");
        fs::create_dir(&envs).unwrap();
        fs::write(envs.join("dev.yaml"), "endpoint: http://localhost:4000\n").unwrap();
        fs::write(
            envs.join("prod.yaml"),
            "endpoint: https://api.example.com/graphql\nvars:\n  token: abc\n",
        )
        .unwrap();
        let requests = dir.path().join("requests").join("dev");
        fs::create_dir_all(&requests).unwrap();
        fs::write(requests.join("users.graphql"), "query { users { id } }\n").unwrap();
        fs::write(requests.join("orders.graphql"), "query { orders { id } }\n").unwrap();
        dir
    }

    #[test]
    fn environments_are_sorted_file_stems() {
        let dir = scaffold();
        let ws = Workspace::discover(dir.path()).unwrap();
        assert_eq!(ws.environments().unwrap(), vec!["dev", "prod"]);
    }

    #[test]
    fn empty_environments_dir_is_a_precondition_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("environments")).unwrap();
        let ws = Workspace::discover(dir.path()).unwrap();
        let err = ws.environments().unwrap_err();
        assert!(err.downcast_ref::<WorkspaceError>().is_some());
    }

    #[test]
    fn broken_environment_yaml_fails_discovery() {
        let dir = scaffold();
        fs::write(
            dir.path().join("environments/bad.yaml"),
            "endpoint: [unclosed\n",
        )
        .unwrap();
        let ws = Workspace::discover(dir.path()).unwrap();
        assert!(ws.environments().is_err());
    }

    #[test]
    fn request_files_are_sorted() {
        let dir = scaffold();
        let ws = Workspace::discover(dir.path()).unwrap();
        assert_eq!(
            ws.request_files("dev").unwrap(),
            vec!["orders.graphql", "users.graphql"]
        );
    }

    #[test]
    fn missing_request_dir_names_the_environment() {
        let dir = scaffold();
        let ws = Workspace::discover(dir.path()).unwrap();
        let err = ws.request_files("prod").unwrap_err();
        assert!(err.to_string().contains("prod"));
    }

    #[test]
    fn environment_parses_vars() {
        let dir = scaffold();
        let ws = Workspace::discover(dir.path()).unwrap();
        let env = ws.environment("prod").unwrap();
        assert_eq!(env.endpoint.as_deref(), Some("https://api.example.com/graphql"));
        assert_eq!(env.vars.get("token").map(String::as_str), Some("abc"));
    }

    #[test]
    fn config_overrides_directory_names() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("quiver.toml"),
            "[workspace]\nenvironments = \"envs\"\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("envs")).unwrap();
        fs::write(dir.path().join("envs/dev.yaml"), "endpoint: x\n").unwrap();
        let ws = Workspace::discover(dir.path()).unwrap();
        assert_eq!(ws.environments().unwrap(), vec!["dev"]);
    }
}
