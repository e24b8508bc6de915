use std::path::PathBuf;
use clap::{Args, Parser};
use crate::{config::Config, error::ConfigError, format::OutputFormat};

/// where to find projects, shared by both binaries
#[derive(Args, Clone, Debug)]
pub struct LocationArgs {
    /// directory holding the project folders (default: ~/Documents/Projects)
    #[arg(short, long, env = "PROJECTS_DIR")]
    pub root: Option<PathBuf>,

    /// project index file (default: <root>/projects.yaml)
    #[arg(short, long, env = "PROJECTS_INDEX")]
    pub index: Option<PathBuf>,
}

impl LocationArgs {
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::resolve(self.root.as_deref(), self.index.as_deref())
    }
}

#[derive(Parser, Clone, Debug)]
#[command(
    name = "list-projects",
    about = "List projects from the projects index",
    version
)]
pub struct ListCli {
    /// output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(Parser, Clone, Debug)]
#[command(
    name = "projects-selector",
    about = "Pick a project by number and print its directory for a shell wrapper to cd into",
    version
)]
pub struct SelectorCli {
    #[command(flatten)]
    pub location: LocationArgs,
}
