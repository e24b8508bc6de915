use std::{io, path::PathBuf};
use thiserror::Error;

/// failures while reading the project index
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("failed to read index file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse index file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// failures while resolving where projects live
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine home directory; pass --root or set PROJECTS_DIR")]
    NoHomeDir,
}
