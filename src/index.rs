use std::fs;
use std::io;
use std::path::Path;
use log::{debug, warn};
use serde::Deserialize;
use crate::{error::IndexError, project::ProjectRecord};

#[derive(Debug, Default, Deserialize)]
struct IndexFile {
    #[serde(default)]
    projects: Option<Vec<serde_yaml::Value>>,
}

/// load every record from the index file, a missing file is an empty index
pub fn load(path: &Path) -> Result<Vec<ProjectRecord>, IndexError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("index file {} does not exist", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(IndexError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    parse(&content).map_err(|source| IndexError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// like [`load`] but never fails: unreadable or malformed files are logged and skipped
pub fn load_or_empty(path: &Path) -> Vec<ProjectRecord> {
    match load(path) {
        Ok(records) => {
            debug!("loaded {} projects from {}", records.len(), path.display());
            records
        }
        Err(err) => {
            warn!("{err}");
            Vec::new()
        }
    }
}

fn parse(content: &str) -> Result<Vec<ProjectRecord>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let index: Option<IndexFile> = serde_yaml::from_str(content)?;
    let entries = index.and_then(|index| index.projects).unwrap_or_default();

    // a bad entry only costs that entry
    let records = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match ProjectRecord::try_from(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("skipping projects[{i}]: {err}");
                None
            }
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectStatus;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let records = load(&temp_dir.path().join("projects.yaml"))?;
        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_and_null_documents() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n").unwrap().is_empty());
        assert!(parse("~\n").unwrap().is_empty());
        assert!(parse("projects:\n").unwrap().is_empty());
        assert!(parse("other: 1\n").unwrap().is_empty());
    }

    #[test]
    fn test_load_records() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let index_path = temp_dir.path().join("projects.yaml");
        fs::write(
            &index_path,
            "projects:\n  - folder: 2024-01-foo\n    name: Foo\n    type: app\n    status: active\n  - folder: 2023-05-bar\n    status: archived\n",
        )?;

        let records = load(&index_path)?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].folder, "2024-01-foo");
        assert_eq!(records[0].kind.as_deref(), Some("app"));
        assert_eq!(records[1].status, Some(ProjectStatus::Archived));
        assert_eq!(records[1].name, None);
        Ok(())
    }

    #[test]
    fn test_malformed_file() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let index_path = temp_dir.path().join("projects.yaml");
        fs::write(&index_path, "projects: [folder: a\n")?;

        assert!(matches!(load(&index_path), Err(IndexError::Parse { .. })));
        assert!(load_or_empty(&index_path).is_empty());
        Ok(())
    }

    #[test]
    fn test_bad_entries_are_skipped() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let index_path = temp_dir.path().join("projects.yaml");
        fs::write(
            &index_path,
            "projects:\n  - folder: a\n  - name: Nameless\n  - folder: b\n    status: true\n  - just-a-string\n  - folder: c\n    status: archived\n",
        )?;

        let records = load(&index_path)?;
        let folders: Vec<&str> = records.iter().map(|p| p.folder.as_str()).collect();
        assert_eq!(folders, vec!["a", "c"]);
        assert!(records[1].is_archived());
        Ok(())
    }
}
