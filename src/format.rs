use clap::ValueEnum;
use crate::project::ProjectRecord;

const NO_PROJECTS: &str = "No projects found.";

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// markdown table, active projects first
    #[default]
    Table,
    /// one project per line
    Simple,
    /// json array
    Json,
}

/// render the records in the requested format, without a trailing newline
pub fn format_projects(
    projects: &[ProjectRecord],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(projects)),
        OutputFormat::Simple => Ok(format_simple(projects)),
        OutputFormat::Json => format_json(projects),
    }
}

pub fn format_table(projects: &[ProjectRecord]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS.to_string();
    }

    let active: Vec<&ProjectRecord> = projects.iter().filter(|p| p.is_active()).collect();
    let archived: Vec<&ProjectRecord> = projects.iter().filter(|p| p.is_archived()).collect();

    let mut lines = vec![
        "| Project | Type | Status |".to_string(),
        "|---------|------|--------|".to_string(),
    ];

    for (group, status) in [(&active, "active"), (&archived, "archived")] {
        for project in group.iter() {
            lines.push(format!(
                "| {} | {} | {} |",
                project.display_name(),
                project.kind_label(),
                status
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("**{} active**, {} archived", active.len(), archived.len()));

    lines.join("\n")
}

pub fn format_simple(projects: &[ProjectRecord]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS.to_string();
    }

    projects
        .iter()
        .map(|p| format!("{} ({}, {})", p.display_name(), p.kind_label(), p.status_label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_json(projects: &[ProjectRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(projects)
}
