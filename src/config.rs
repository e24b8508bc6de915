use std::path::{Path, PathBuf};
use crate::{error::ConfigError, utils::expand_tilde};

pub const INDEX_FILE_NAME: &str = "projects.yaml";

/// where projects live and where their index is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub projects_root: PathBuf,
    pub index_file: PathBuf,
}

impl Config {
    pub fn new(projects_root: impl Into<PathBuf>, index_file: impl Into<PathBuf>) -> Self {
        Self {
            projects_root: projects_root.into(),
            index_file: index_file.into(),
        }
    }

    /// resolve explicit overrides against the user's home directory
    pub fn resolve(root: Option<&Path>, index: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_with_home(root, index, dirs::home_dir().as_deref())
    }

    pub fn resolve_with_home(
        root: Option<&Path>,
        index: Option<&Path>,
        home: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let projects_root = match root {
            Some(root) => expand_tilde(root, home),
            None => default_projects_root(home)?,
        };

        let index_file = match index {
            Some(index) => expand_tilde(index, home),
            None => projects_root.join(INDEX_FILE_NAME),
        };

        Ok(Self { projects_root, index_file })
    }

    /// directory a record's folder resolves to
    pub fn project_path(&self, folder: &str) -> PathBuf {
        self.projects_root.join(folder)
    }
}

fn default_projects_root(home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    home.map(|home| home.join("Documents").join("Projects"))
        .ok_or(ConfigError::NoHomeDir)
}
