use std::fs;
use anyhow::Result;
use tempfile::tempdir;
use projpick::{
    format::{format_projects, OutputFormat},
    index,
    keys::ScriptedKeys,
    Config, Outcome, Selector,
};

const INDEX: &str = "\
projects:
  - folder: 2023-05-bar
    name: Bar
    type: research
    status: archived
  - folder: 2024-01-foo
    name: Foo
    type: app
    status: active
";

#[test]
fn test_pick_newest_active_project_from_index() -> Result<()> {
    colored::control::set_override(false);

    let root = tempdir()?;
    let config = Config::new(root.path(), root.path().join("projects.yaml"));
    fs::write(&config.index_file, INDEX)?;
    fs::create_dir(root.path().join("2024-01-foo"))?;

    let projects = index::load_or_empty(&config.index_file);
    let mut selector = Selector::new(config.clone(), projects);

    let mut status = Vec::new();
    let mut out = Vec::new();
    let outcome = selector.run(&mut ScriptedKeys::new("7x1"), &mut status, &mut out)?;

    let expected = config.project_path("2024-01-foo");
    assert_eq!(outcome, Outcome::Selected(expected.clone()));
    assert_eq!(String::from_utf8(out)?, format!("{}\n", expected.display()));
    assert!(String::from_utf8(status)?.contains(" (1-1)\n"));
    Ok(())
}

#[test]
fn test_listing_from_index() -> Result<()> {
    let root = tempdir()?;
    let index_file = root.path().join("projects.yaml");
    fs::write(&index_file, INDEX)?;

    let projects = index::load(&index_file)?;
    let table = format_projects(&projects, OutputFormat::Table)?;

    let foo = table.find("| Foo | app | active |").unwrap();
    let bar = table.find("| Bar | research | archived |").unwrap();
    assert!(foo < bar);
    assert!(table.ends_with("**1 active**, 1 archived"));
    Ok(())
}
