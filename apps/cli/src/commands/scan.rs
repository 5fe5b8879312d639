use std::io::Write;

use organizer_common::OrganizerError;
use organizer_insights::{filter_by_status, group_projects, join_views, GroupBy, ProjectView, StatusFilter};
use serde::Serialize;

use super::{write_json, yes_no, App};

#[derive(Serialize)]
struct GroupOut<'v, 'a> {
    name: &'v str,
    projects: Vec<&'v ProjectView<'a>>,
}

pub(crate) fn write_project_line(out: &mut dyn Write, view: &ProjectView<'_>) -> Result<(), OrganizerError> {
    let p = view.project;
    writeln!(
        out,
        "{} {:<28} {:>4} files  req {}  readme {}  {:>9.2} MB  {}  {} {:>3} {}",
        view.record.status.emoji(),
        p.name,
        p.source_file_count,
        yes_no(p.has_manifest),
        yes_no(p.has_readme),
        p.size_mb,
        p.last_modified,
        view.tier().emoji(),
        view.health,
        view.record.status,
    )?;
    if !view.record.notes.is_empty() {
        writeln!(out, "     notes: {}", view.record.notes)?;
    }
    Ok(())
}

pub fn run(
    app: &mut App,
    out: &mut dyn Write,
    root: Option<String>,
    filter: StatusFilter,
    group_by: GroupBy,
) -> Result<(), OrganizerError> {
    app.select_root(root)?;
    let projects = app.session.projects()?;
    let views = join_views(projects, app.manager.status_store());
    let filtered = filter_by_status(&views, filter);
    let groups = group_projects(&filtered, group_by);

    if app.json {
        let groups: Vec<GroupOut<'_, '_>> = groups
            .iter()
            .map(|g| GroupOut {
                name: &g.name,
                projects: g.members.clone(),
            })
            .collect();
        return write_json(out, &groups);
    }

    if views.is_empty() {
        writeln!(out, "🤷 No Python projects found in this folder.")?;
        writeln!(out, "A Python project is detected if it contains `.py` files or a `requirements.txt` file.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Total Projects: {}  Python Files: {}  With Requirements: {}  With README: {}",
        views.len(),
        views.iter().map(|v| v.project.source_file_count).sum::<usize>(),
        views.iter().filter(|v| v.project.has_manifest).count(),
        views.iter().filter(|v| v.project.has_readme).count(),
    )?;

    if filtered.is_empty() {
        if let StatusFilter::Only(status) = filter {
            writeln!(out, "No projects with status: {}", status)?;
        }
        return Ok(());
    }

    for group in &groups {
        writeln!(out)?;
        writeln!(out, "{} ({} projects)", group.name, group.members.len())?;
        for view in &group.members {
            write_project_line(out, view)?;
        }
    }
    Ok(())
}
